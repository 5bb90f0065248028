mod introspection;
mod introspection_document;
mod schema_load_error;
mod schema_model;

pub use introspection_document::IntrospectionDocument;
pub use schema_load_error::SchemaLoadError;
pub use schema_model::SchemaModel;
