use std::{io, path};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("could not open {path:?}: {source}")]
    Open { path: path::PathBuf, source: io::Error },

    #[error("could not create {path:?}: {source}")]
    Create { path: path::PathBuf, source: io::Error },

    #[error(transparent)]
    Io(#[from] io::Error),

    /// A row's field count disagrees with the input header.
    #[error("line {line}: expected {expected} fields from header, found {found}")]
    FieldCountMismatch { line: usize, expected: usize, found: usize },

    /// An output line's value count disagrees with its header.
    #[error("output header has {expected} columns but {found} values were given")]
    HeaderLengthMismatch { expected: usize, found: usize },

    #[error("line {line}: none of {keys:?} found with a value")]
    ItemNotFound { line: usize, keys: Vec<String> },

    #[error("line {line}: column {field} is missing from the input header")]
    MissingField { line: usize, field: String },

    #[error("invalid config: {0}")]
    Config(#[from] serde_yml::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}
