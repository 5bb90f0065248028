use crate::GeneratedDocument;
use crate::output::OutputWriteError;
use crate::output::OutputWriter;
use inherent::inherent;
use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, OutputWriteError>;

/// Name of the file written by [`CombinedFileWriter`].
pub const COMBINED_FILE_NAME: &str = "all_queries_mutations.graphql";

/// Appends every [`GeneratedDocument`] to a single
/// [`COMBINED_FILE_NAME`] file, one commented section per document:
///
/// ```text
/// # Query for User
/// query {
///   ...
/// }
///
///
/// # Mutation for User (if supported)
/// ...
/// ```
///
/// The file is held open until [`CombinedFileWriter::finish`] is called and is
/// flushed after each document.
#[derive(Debug)]
pub struct CombinedFileWriter {
    file: Option<BufWriter<File>>,
    path: PathBuf,
    written_paths: Vec<PathBuf>,
}
impl CombinedFileWriter {
    /// Creates (or truncates) the combined output file within `output_dir`.
    pub fn create(output_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(output_dir)
            .map_err(|err| OutputWriteError {
                path: output_dir.to_path_buf(),
                err,
            })?;

        let path = output_dir.join(COMBINED_FILE_NAME);
        log::trace!("Creating {path:#?}.");
        let file = File::create(&path)
            .map_err(|err| OutputWriteError {
                path: path.to_owned(),
                err,
            })?;

        Ok(Self {
            file: Some(BufWriter::new(file)),
            path: path.to_owned(),
            written_paths: vec![path],
        })
    }

    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    fn write_section(
        file: &mut BufWriter<File>,
        header: std::fmt::Arguments<'_>,
        body: &str,
    ) -> std::io::Result<()> {
        writeln!(file, "# {header}")?;
        file.write_all(body.as_bytes())?;
        file.write_all(b"\n\n")
    }
}

#[inherent]
impl OutputWriter for CombinedFileWriter {
    pub fn write_document(&mut self, document: &GeneratedDocument) -> Result<()> {
        let Some(file) = self.file.as_mut() else {
            return Err(OutputWriteError {
                path: self.path.to_owned(),
                err: std::io::Error::other("document written after finish()"),
            });
        };

        let type_name = document.type_name();
        Self::write_section(
            file,
            format_args!("Query for {type_name}"),
            document.query(),
        )
        .and_then(|_| Self::write_section(
            file,
            format_args!("Mutation for {type_name} (if supported)"),
            document.mutation().unwrap_or_default(),
        ))
        .and_then(|_| file.flush())
        .map_err(|err| OutputWriteError {
            path: self.path.to_owned(),
            err,
        })
    }

    pub fn finish(&mut self) -> Result<()> {
        if let Some(mut file) = self.file.take() {
            file.flush()
                .map_err(|err| OutputWriteError {
                    path: self.path.to_owned(),
                    err,
                })?;
        }
        Ok(())
    }

    pub fn written_paths(&self) -> &[PathBuf] {
        self.written_paths.as_slice()
    }
}
