//! Generates skeleton GraphQL query and mutation documents from the result of
//! running the standard introspection query against a GraphQL endpoint.
//!
//! ```no_run
//! use libgraphql_skeleton::Generator;
//! use libgraphql_skeleton::GeneratorConfig;
//! use libgraphql_skeleton::OutputLayout;
//!
//! let generator = Generator::new(GeneratorConfig::for_layout(OutputLayout::PerType));
//! let summary = generator.generate_from_file("schema.json")?;
//! println!("{:?}", summary.generated_type_names());
//! # Ok::<(), libgraphql_skeleton::GenerateError>(())
//! ```

mod document_renderer;
pub mod file_reader;
mod generate_error;
mod generation_summary;
mod generator;
mod generator_config;
mod operation_kind;
pub mod output;
pub mod schema;
pub mod type_filter;
pub mod types;

pub use document_renderer::GeneratedDocument;
pub use document_renderer::render_operation;
pub use generate_error::GenerateError;
pub use generation_summary::GenerationSummary;
pub use generator::Generator;
pub use generator_config::GeneratorConfig;
pub use generator_config::MutationStyle;
pub use generator_config::OutputLayout;
pub use generator_config::Strictness;
pub use operation_kind::OperationKind;

#[cfg(test)]
mod tests;
