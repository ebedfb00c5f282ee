//! Path traversal.
//!
//! Walks a record one segment at a time. Every step requires the current
//! value to be a map; indexed steps additionally require the looked-up value
//! to be a list and the index to be in bounds. The first violation ends the
//! walk with a [`Miss`]; there are no partial results.

use morph_core::{Record, Value};

use crate::{Miss, Segment};

/// Resolve `path` against `record`.
///
/// Returns `None` on a resolution-miss.
pub fn resolve<'r>(record: &'r Record, path: &str) -> Option<&'r Value> {
    trace(record, path).ok()
}

/// Resolve `path` against `record`, reporting why a lookup missed.
pub fn trace<'r>(record: &'r Record, path: &str) -> Result<&'r Value, Miss> {
    let mut segments = path.split('.');
    // `split` always yields at least one segment, possibly empty
    let first = segments.next().unwrap_or_default();
    let mut current = step(record, first)?;

    for raw in segments {
        let map = current
            .as_map()
            .ok_or_else(|| Miss::not_a_map(raw, current.type_name()))?;
        current = step(map, raw)?;
    }

    Ok(current)
}

fn step<'r>(map: &'r Record, raw: &str) -> Result<&'r Value, Miss> {
    match Segment::parse(raw)? {
        Segment::Key(key) => map.get(key).ok_or_else(|| Miss::key_not_found(key)),
        Segment::Index { key, index } => {
            let value = map.get(key).ok_or_else(|| Miss::key_not_found(key))?;
            let items = value
                .as_list()
                .ok_or_else(|| Miss::not_a_list(key, value.type_name()))?;
            items
                .get(index)
                .ok_or_else(|| Miss::index_out_of_bounds(key, index, items.len()))
        }
    }
}
