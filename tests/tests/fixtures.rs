//! Runs the fixture files under `fixtures/`.

use morph_tests::prelude::*;
use morph_tests::fixtures_root;

#[test]
fn test_end_to_end() {
    Scenario::new("end_to_end")
        .fixture("engine/end_to_end.case")
        .step("basic", |a| a.applied(4).skipped(0).script_found(true))
        .step("nothing_matches", |a| a.applied(1).skipped(3))
        .run()
        .unwrap();
}

#[test]
fn test_rename() {
    Scenario::new("rename")
        .fixture("engine/rename.case")
        .step("twice", |a| a.field("b", 1i64).absent("a").applied(1))
        .step("overwrites_target", |a| a.absent("name").applied(2))
        .step("onto_itself", |a| a.keys(&["same", "eventSource"]))
        .run()
        .unwrap();
}

#[test]
fn test_update() {
    Scenario::new("update")
        .fixture("engine/update.case")
        .step("literal_is_string", |a| a.field("x", "5").applied(3))
        .step("replaces_containers", |a| a.field("nested", "replaced"))
        .run()
        .unwrap();
}

#[test]
fn test_dig() {
    Scenario::new("dig")
        .fixture("engine/dig.case")
        .step("nested", |a| {
            a.field("f", 2i64)
                .absent("out_of_bounds")
                .absent("malformed")
                .absent("through_scalar")
                .applied(3)
                .skipped(3)
        })
        .step("empty", |a| a.applied(0).skipped(6))
        .run()
        .unwrap();
}

#[test]
fn test_delete() {
    Scenario::new("delete")
        .fixture("engine/delete.case")
        .step("present", |a| a.absent("g").absent("password").applied(2))
        .step("absent", |a| a.applied(0).skipped(2))
        .run()
        .unwrap();
}

#[test]
fn test_irregular_lines() {
    Scenario::new("irregular_lines")
        .fixture("parser/irregular_lines.case")
        // blank lines and single words never become commands
        .step("mixed", |a| a.applied(3).skipped(5))
        .run()
        .unwrap();
}

#[test]
fn test_no_script() {
    Scenario::new("no_script")
        .fixture("session/no_script.case")
        .step("plain", |a| a.script_found(false).applied(0).skipped(0))
        .step("overrides_source", |a| a.event_source("unregistered"))
        .run()
        .unwrap();
}

#[test]
fn test_custom_envelope_key() {
    Scenario::new("envelope")
        .fixture("engine/end_to_end.case")
        .config(morph_session::SessionConfig::default().with_envelope_key("payload"))
        .run()
        .unwrap();
}

#[test]
fn test_every_fixture_matches_its_expected_records() {
    let mut pending = vec![fixtures_root()];
    let mut ran = 0;

    while let Some(dir) = pending.pop() {
        for entry in std::fs::read_dir(&dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "case") {
                Scenario::new(path.display().to_string())
                    .fixture(&path)
                    .run()
                    .unwrap_or_else(|e| panic!("{}: {}", path.display(), e));
                ran += 1;
            }
        }
    }

    assert!(ran >= 7, "expected to find the fixture files, ran {}", ran);
}
