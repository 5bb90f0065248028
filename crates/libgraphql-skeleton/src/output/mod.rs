mod combined_file_writer;
mod output_write_error;
mod output_writer;
mod per_type_file_writer;

pub use combined_file_writer::COMBINED_FILE_NAME;
pub use combined_file_writer::CombinedFileWriter;
pub use output_write_error::OutputWriteError;
pub use output_writer::OutputWriter;
pub use per_type_file_writer::PerTypeFileWriter;
