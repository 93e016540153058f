use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("'{0}' exists but is not a directory")]
    ExpectedDirectory(PathBuf),
    #[error("No sources configured")]
    NoSources,
    #[error("Only one source supported, {0} configured")]
    UnsupportedMultiSource(usize),
    #[error("Couldn't understand template variable %{{{0}}}")]
    UnknownPlaceholder(String),
    #[error("Font name '{0}' too long; provide shortFamilyName and variant aliases")]
    NameTooLong(String),
    #[error("io failed for '{path}': '{source}'")]
    FileIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write to stdout or stderr: '{0}'")]
    StdioWriteFail(#[source] io::Error),
    #[error(transparent)]
    YamlError(#[from] serde_yaml::Error),
    #[error(transparent)]
    Model(#[from] fontmodel::Error),
}
