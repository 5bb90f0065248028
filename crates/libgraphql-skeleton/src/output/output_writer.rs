use crate::GeneratedDocument;
use crate::output::OutputWriteError;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, OutputWriteError>;

/// A destination for [`GeneratedDocument`]s.
///
/// Documents are written in the order they are passed to
/// [`OutputWriter::write_document`]. Each call must leave what has been
/// written so far readable even if a later call never happens.
pub trait OutputWriter {
    fn write_document(&mut self, document: &GeneratedDocument) -> Result<()>;

    /// Flushes and releases any open files. No documents may be written
    /// afterward.
    fn finish(&mut self) -> Result<()>;

    /// Paths of every file created or overwritten so far, in the order they
    /// were first written.
    fn written_paths(&self) -> &[PathBuf];
}
