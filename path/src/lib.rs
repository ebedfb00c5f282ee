//! MORPH Path
//!
//! Resolve dotted, array-indexable paths such as `a.b[1].c` through a
//! record's nested maps and lists.
//!
//! # Module Structure
//!
//! - `segment` - Grammar for a single dot-separated segment
//! - `resolver` - Traversal of a record along a path
//! - `error` - Why a lookup missed

mod error;
mod resolver;
mod segment;

pub use error::Miss;
pub use resolver::{resolve, trace};
pub use segment::Segment;
