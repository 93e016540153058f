//! An axis in a variable font, as seen by the build planner.

use serde::{Deserialize, Serialize};
use write_fonts::types::Tag;

/// A named design dimension, e.g. weight or width.
///
/// The planner only cares about identity and ordering; ranges and unit
/// conversion stay with the loader that produced the snapshot.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Axis {
    pub name: String,
    pub tag: Tag,
}

impl Axis {
    pub fn new(name: impl Into<String>, tag: Tag) -> Axis {
        Axis {
            name: name.into(),
            tag,
        }
    }
}
