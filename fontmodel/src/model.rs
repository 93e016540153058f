//! The font source snapshot driving one planning pass.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use write_fonts::types::Tag;

use crate::{axis::Axis, error::Error, instance::Instance};

fn one() -> usize {
    1
}

/// Global metadata of the representative source.
///
/// Loaded once per planning pass and read-only afterwards. Axis and
/// instance order reproduce source declaration order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FontModel {
    pub family_name: String,
    pub axes: Vec<Axis>,
    pub instances: Vec<Instance>,
    /// Number of distinct design-space positions (masters) in the source.
    #[serde(default = "one")]
    pub positions: usize,
}

impl FontModel {
    /// Read a snapshot previously written by a source loader.
    pub fn load(path: &Path) -> Result<FontModel, Error> {
        let yml = fs::read_to_string(path).map_err(|source| Error::FileIo {
            path: path.to_owned(),
            source,
        })?;
        let model: FontModel = serde_yaml::from_str(&yml)?;
        log::debug!(
            "loaded model for '{}': {} axes, {} instances",
            model.family_name,
            model.axes.len(),
            model.instances.len()
        );
        Ok(model)
    }

    /// Axis tags in declaration order.
    pub fn axis_tags(&self) -> impl Iterator<Item = Tag> + '_ {
        self.axes.iter().map(|axis| axis.tag)
    }
}
