use crate::GeneratedDocument;
use crate::GenerateError;
use crate::GenerationSummary;
use crate::GeneratorConfig;
use crate::MutationStyle;
use crate::OutputLayout;
use crate::output::CombinedFileWriter;
use crate::output::OutputWriter;
use crate::output::PerTypeFileWriter;
use crate::schema::IntrospectionDocument;
use crate::schema::SchemaModel;
use crate::type_filter;
use std::path::Path;

type Result<T> = std::result::Result<T, GenerateError>;

/// Renders and writes skeleton documents for every selectable type in a
/// schema, as configured by a [`GeneratorConfig`].
#[derive(Clone, Debug, Default)]
pub struct Generator {
    config: GeneratorConfig,
}
impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Loads the introspection result at `schema_file` and generates
    /// documents for it.
    ///
    /// Nothing is written unless the schema loads successfully.
    pub fn generate_from_file<P: AsRef<Path>>(
        &self,
        schema_file: P,
    ) -> Result<GenerationSummary> {
        let schema = IntrospectionDocument::from_file(schema_file)?
            .build_schema()?;
        self.generate(&schema)
    }

    pub fn generate(&self, schema: &SchemaModel) -> Result<GenerationSummary> {
        let mut writer: Box<dyn OutputWriter> = match self.config.layout {
            OutputLayout::Combined => Box::new(
                CombinedFileWriter::create(&self.config.output_dir)?,
            ),
            OutputLayout::PerType => Box::new(
                PerTypeFileWriter::new(&self.config.output_dir)?,
            ),
        };

        if self.config.mutation_style == MutationStyle::ReuseFields {
            log::warn!(
                "Generated mutations select each type's own fields; they are \
                unlikely to be valid mutations against the schema."
            );
        }

        let mut summary = GenerationSummary::default();
        for type_ in type_filter::selectable_types(schema) {
            let Some(field_names) = type_.field_names() else {
                log::debug!(
                    "Skipping `{}` ({}): no fields to select.",
                    type_.name(),
                    type_.kind(),
                );
                summary.skipped_type_names.push(type_.name().to_string());
                continue;
            };

            let document = GeneratedDocument::render(
                type_.name(),
                &field_names,
                self.config.mutation_style,
            );
            writer.write_document(&document)?;
            summary.generated_type_names.push(type_.name().to_string());
        }
        writer.finish()?;

        summary.written_paths = writer.written_paths().to_vec();
        log::debug!(
            "Generated documents for {} types ({} skipped); wrote {} files.",
            summary.generated_type_names.len(),
            summary.skipped_type_names.len(),
            summary.written_paths.len(),
        );

        Ok(summary)
    }
}
