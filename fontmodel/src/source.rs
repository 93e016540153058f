//! Input font sources.

use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// How much design space a source format can span.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// A single-master source; no variable font can be cut from it.
    SingleMaster,
    /// A multi-master source (glyphs, designspace).
    MultiMaster,
    /// A pre-built static binary.
    StaticOnly,
}

/// One input to a planning pass.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub path: PathBuf,
    pub kind: SourceKind,
}

impl Source {
    /// Classify a source by extension.
    ///
    /// Whether a glyphs or designspace file actually carries more than one
    /// master is the loader's knowledge; see [`FontModel::positions`].
    ///
    /// [`FontModel::positions`]: crate::model::FontModel
    pub fn new(path: impl Into<PathBuf>) -> Result<Source, Error> {
        let path = path.into();
        let ext = path
            .extension()
            .and_then(OsStr::to_str)
            .ok_or_else(|| Error::UnrecognizedSource(path.clone()))?;
        let kind = match ext {
            "glyphs" | "designspace" => SourceKind::MultiMaster,
            "ufo" => SourceKind::SingleMaster,
            "ttf" | "otf" => SourceKind::StaticOnly,
            _ => return Err(Error::UnrecognizedSource(path)),
        };
        Ok(Source { path, kind })
    }

    /// A sibling path with an infix spliced in before the extension,
    /// e.g. `Family.glyphs` + `"guidelines"` -> `Family.guidelines.glyphs`.
    ///
    /// This is where the guideline generator writes its transformed source.
    pub fn sibling(&self, infix: &str) -> PathBuf {
        let stem = self
            .path
            .file_stem()
            .and_then(OsStr::to_str)
            .unwrap_or_default();
        let ext = self
            .path
            .extension()
            .and_then(OsStr::to_str)
            .unwrap_or_default();
        self.path.with_file_name(format!("{stem}.{infix}.{ext}"))
    }
}
