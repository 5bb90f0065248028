use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("Failed to write `{}`: {err}", path.display())]
pub struct OutputWriteError {
    pub path: PathBuf,
    pub err: std::io::Error,
}
impl std::cmp::PartialEq for OutputWriteError {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path && self.err.kind() == other.err.kind()
    }
}
