use crate::GeneratedDocument;
use crate::output::OutputWriteError;
use crate::output::OutputWriter;
use inherent::inherent;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, OutputWriteError>;

/// Writes each [`GeneratedDocument`] as a `<TypeName>_query.graphql` and
/// `<TypeName>_mutation.graphql` pair. Existing files are overwritten.
#[derive(Debug)]
pub struct PerTypeFileWriter {
    output_dir: PathBuf,
    written_paths: Vec<PathBuf>,
}
impl PerTypeFileWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        std::fs::create_dir_all(&output_dir)
            .map_err(|err| OutputWriteError {
                path: output_dir.to_owned(),
                err,
            })?;

        Ok(Self {
            output_dir,
            written_paths: vec![],
        })
    }

    pub fn mutation_file_name(type_name: &str) -> String {
        format!("{type_name}_mutation.graphql")
    }

    /// Contents of the mutation file written for `type_name` when mutations
    /// are rendered as a placeholder.
    pub fn placeholder_mutation(type_name: &str) -> String {
        format!("# Mutation for {type_name} is not supported by the schema\n")
    }

    pub fn query_file_name(type_name: &str) -> String {
        format!("{type_name}_query.graphql")
    }

    fn write_file(&mut self, file_name: &str, content: &str) -> Result<()> {
        let path = self.output_dir.join(file_name);
        log::trace!("Writing {path:#?}.");
        std::fs::write(&path, content)
            .map_err(|err| OutputWriteError {
                path: path.to_owned(),
                err,
            })?;
        self.written_paths.push(path);
        Ok(())
    }

    pub fn output_dir(&self) -> &Path {
        self.output_dir.as_path()
    }
}

#[inherent]
impl OutputWriter for PerTypeFileWriter {
    pub fn write_document(&mut self, document: &GeneratedDocument) -> Result<()> {
        let type_name = document.type_name();
        self.write_file(&Self::query_file_name(type_name), document.query())?;

        let mutation = match document.mutation() {
            Some(mutation) => mutation.to_string(),
            None => Self::placeholder_mutation(type_name),
        };
        self.write_file(&Self::mutation_file_name(type_name), &mutation)
    }

    pub fn finish(&mut self) -> Result<()> {
        // Each file is closed as soon as it's written.
        Ok(())
    }

    pub fn written_paths(&self) -> &[PathBuf] {
        self.written_paths.as_slice()
    }
}
