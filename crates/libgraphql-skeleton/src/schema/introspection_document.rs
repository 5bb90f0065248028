use crate::file_reader;
use crate::schema::SchemaLoadError;
use crate::schema::SchemaModel;
use serde_json::Value;
use std::path::Path;

type Result<T> = std::result::Result<T, SchemaLoadError>;

/// The parsed JSON body of an introspection response.
///
/// A successfully constructed [`IntrospectionDocument`] is guaranteed to have
/// a top-level `data` object which contains a `__schema` member. The contents
/// of `__schema` are not checked until [`IntrospectionDocument::build_schema`]
/// is called.
#[derive(Clone, Debug, PartialEq)]
pub struct IntrospectionDocument {
    data: Value,
}
impl IntrospectionDocument {
    pub fn from_file<P: AsRef<Path>>(file_path: P) -> Result<Self> {
        let file_path = file_path.as_ref();
        log::debug!("Reading introspection result from {file_path:#?}...");
        let content = file_reader::read_content(file_path)?;

        Self::parse(&content).map_err(|err| match err {
            SchemaLoadError::MalformedInput { file: None, err } =>
                SchemaLoadError::MalformedInput {
                    file: Some(file_path.to_path_buf()),
                    err,
                },

            other => other,
        })
    }

    pub fn from_value(root: Value) -> Result<Self> {
        let Value::Object(mut root) = root else {
            return Err(SchemaLoadError::Validation {
                reason: "the top-level JSON value is not an object".to_string(),
            });
        };

        let data = match root.remove("data") {
            Some(data @ Value::Object(_)) => data,

            None | Some(Value::Null) => return Err(SchemaLoadError::Validation {
                reason: "missing `data`".to_string(),
            }),

            Some(_) => return Err(SchemaLoadError::Validation {
                reason: "`data` is not an object".to_string(),
            }),
        };

        if data.get("__schema").is_none() {
            return Err(SchemaLoadError::Validation {
                reason: "missing `data.__schema`".to_string(),
            });
        }

        let document = Self { data };
        log::debug!("Introspection keys: {:?}", document.data_keys());
        log::debug!("Introspection type names: {:?}", document.type_names());

        Ok(document)
    }

    pub fn parse(json: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(json)
            .map_err(|err| SchemaLoadError::MalformedInput {
                file: None,
                err,
            })?;

        Self::from_value(root)
    }

    /// Builds a [`SchemaModel`] from this document's `data` object.
    pub fn build_schema(&self) -> Result<SchemaModel> {
        SchemaModel::from_introspection_data(&self.data)
    }

    /// The `data` object of the introspection response.
    pub fn data(&self) -> &Value {
        &self.data
    }

    /// The keys of the `data` object, in document order.
    pub fn data_keys(&self) -> Vec<&str> {
        self.data.as_object()
            .map(|data| data.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// The `name` of every entry in `data.__schema.types`, read straight from
    /// the JSON without building a [`SchemaModel`]. Entries without a string
    /// `name` are omitted.
    pub fn type_names(&self) -> Vec<&str> {
        self.data
            .pointer("/__schema/types")
            .and_then(Value::as_array)
            .map(|types| {
                types.iter()
                    .filter_map(|type_| type_.get("name"))
                    .filter_map(Value::as_str)
                    .collect()
            })
            .unwrap_or_default()
    }
}
