use std::path::PathBuf;

/// What a single [`Generator`](crate::Generator) run produced.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GenerationSummary {
    pub(crate) generated_type_names: Vec<String>,
    pub(crate) skipped_type_names: Vec<String>,
    pub(crate) written_paths: Vec<PathBuf>,
}
impl GenerationSummary {
    /// Names of the types documents were generated for, in generation order.
    pub fn generated_type_names(&self) -> &[String] {
        self.generated_type_names.as_slice()
    }

    /// Names of selectable types which were skipped because they have no
    /// fields to select.
    pub fn skipped_type_names(&self) -> &[String] {
        self.skipped_type_names.as_slice()
    }

    pub fn written_paths(&self) -> &[PathBuf] {
        self.written_paths.as_slice()
    }
}
