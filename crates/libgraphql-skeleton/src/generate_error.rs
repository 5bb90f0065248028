use crate::output::OutputWriteError;
use crate::schema::SchemaLoadError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Load(#[from] SchemaLoadError),

    #[error(transparent)]
    Write(#[from] OutputWriteError),
}
