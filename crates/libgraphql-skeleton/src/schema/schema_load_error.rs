use crate::file_reader::ReadContentError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaLoadError {
    #[error("Schema file `{}` not found", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to read schema file: {0}")]
    FileRead(ReadContentError),

    #[error(
        "Schema file{} is not a valid JSON file: {err}",
        file.as_ref()
            .map(|path| format!(" `{}`", path.display()))
            .unwrap_or_default(),
    )]
    MalformedInput {
        file: Option<PathBuf>,
        err: serde_json::Error,
    },

    #[error("Invalid or incomplete introspection result: {reason}")]
    Validation {
        reason: String,
    },
}
impl std::convert::From<ReadContentError> for SchemaLoadError {
    fn from(value: ReadContentError) -> Self {
        match value {
            ReadContentError::FileNotFound(path) => Self::FileNotFound(path),
            other => Self::FileRead(other),
        }
    }
}
