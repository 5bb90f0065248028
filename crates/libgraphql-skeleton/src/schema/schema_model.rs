use crate::schema::introspection::IntrospectionSchema;
use crate::schema::SchemaLoadError;
use crate::types::TypeDescriptor;
use crate::types::TypeKind;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

type Result<T> = std::result::Result<T, SchemaLoadError>;

/// An in-memory view of the types described by an introspection result.
///
/// Types are kept in the order they were listed in `__schema.types`, so
/// iterating a [`SchemaModel`] built from the same input always yields the
/// same sequence.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SchemaModel {
    pub(crate) mutation_type_name: Option<String>,
    pub(crate) query_type_name: Option<String>,
    pub(crate) subscription_type_name: Option<String>,
    pub(crate) types: IndexMap<String, TypeDescriptor>,
}
impl SchemaModel {
    /// Builds a [`SchemaModel`] from the `data` object of an introspection
    /// response (i.e. the object containing `__schema`).
    pub fn from_introspection_data(data: &Value) -> Result<Self> {
        if !data.is_object() {
            return Err(SchemaLoadError::Validation {
                reason: "`data` is not an object".to_string(),
            });
        }

        let schema_value = data.get("__schema").ok_or_else(|| {
            SchemaLoadError::Validation {
                reason: "missing `data.__schema`".to_string(),
            }
        })?;

        let schema = IntrospectionSchema::deserialize(schema_value)
            .map_err(|err| SchemaLoadError::Validation {
                reason: format!("malformed `data.__schema`: {err}"),
            })?;

        Self::from_introspection_schema(schema)
    }

    /// Builds a [`SchemaModel`] from the `data` object of an introspection
    /// response which has been serialized as a JSON string.
    ///
    /// Produces the same [`SchemaModel`] as
    /// [`SchemaModel::from_introspection_data`] would for the parsed value.
    pub fn from_introspection_str(data_json: &str) -> Result<Self> {
        let data: Value = serde_json::from_str(data_json)
            .map_err(|err| SchemaLoadError::MalformedInput {
                file: None,
                err,
            })?;

        Self::from_introspection_data(&data)
    }

    /// Builds a [`SchemaModel`] from a sequence of already-constructed
    /// [`TypeDescriptor`]s. Type names must be unique, and every type and
    /// field name must be a GraphQL `Name` (`[_A-Za-z][_0-9A-Za-z]*`).
    pub fn from_type_descriptors(
        types: impl IntoIterator<Item = TypeDescriptor>,
    ) -> Result<Self> {
        let mut types_map = IndexMap::new();
        for type_ in types {
            if !is_graphql_name(type_.name()) {
                return Err(SchemaLoadError::Validation {
                    reason: format!(
                        "type name `{}` is not a valid GraphQL name",
                        type_.name(),
                    ),
                });
            }
            let invalid_field_name = type_.fields.iter()
                .flatten()
                .find(|field_name| !is_graphql_name(field_name));
            if let Some(field_name) = invalid_field_name {
                return Err(SchemaLoadError::Validation {
                    reason: format!(
                        "field name `{field_name}` on type `{}` is not a valid \
                        GraphQL name",
                        type_.name(),
                    ),
                });
            }
            if types_map.contains_key(type_.name()) {
                return Err(SchemaLoadError::Validation {
                    reason: format!(
                        "duplicate definition of type `{}`",
                        type_.name(),
                    ),
                });
            }
            types_map.insert(type_.name().to_string(), type_);
        }

        Ok(Self {
            mutation_type_name: None,
            query_type_name: None,
            subscription_type_name: None,
            types: types_map,
        })
    }

    fn from_introspection_schema(schema: IntrospectionSchema) -> Result<Self> {
        let descriptors = schema.types.into_iter().map(|type_| {
            log::trace!(
                "Loading `{}` ({}) from introspection result.",
                type_.name,
                type_.kind,
            );
            match type_.fields {
                Some(fields) => TypeDescriptor::with_fields(
                    type_.name,
                    type_.kind,
                    fields.into_iter().map(|field| field.name),
                ),
                None => TypeDescriptor::new(type_.name, type_.kind),
            }
        });

        let mut model = Self::from_type_descriptors(descriptors)?;
        model.query_type_name = schema.query_type.map(|t| t.name);
        model.mutation_type_name = schema.mutation_type.map(|t| t.name);
        model.subscription_type_name = schema.subscription_type.map(|t| t.name);

        log::debug!(
            "Schema types: {:?}",
            model.types.keys().collect::<Vec<_>>(),
        );

        Ok(model)
    }

    pub fn get_type(&self, type_name: &str) -> Option<&TypeDescriptor> {
        self.types.get(type_name)
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// The name of the schema's root mutation type, as declared by
    /// `__schema.mutationType`.
    pub fn mutation_type_name(&self) -> Option<&str> {
        self.mutation_type_name.as_deref()
    }

    /// The names of every type whose kind declares a fields collection.
    pub fn object_like_type_names(&self) -> Vec<&str> {
        self.types.values()
            .filter(|type_| TypeKind::is_object_like(type_.kind()))
            .map(TypeDescriptor::name)
            .collect()
    }

    /// The name of the schema's root query type, as declared by
    /// `__schema.queryType`.
    pub fn query_type_name(&self) -> Option<&str> {
        self.query_type_name.as_deref()
    }

    /// The name of the schema's root subscription type, as declared by
    /// `__schema.subscriptionType`.
    pub fn subscription_type_name(&self) -> Option<&str> {
        self.subscription_type_name.as_deref()
    }

    /// A map from TypeName -> [`TypeDescriptor`] for every type in the
    /// introspection result, in declaration order.
    pub fn types(&self) -> &IndexMap<String, TypeDescriptor> {
        &self.types
    }
}

/// Whether `name` matches the GraphQL `Name` production:
/// `/[_A-Za-z][_0-9A-Za-z]*/`.
///
/// Names end up both in rendered documents and in output file names, so
/// anything else (whitespace, punctuation, path separators) is rejected.
fn is_graphql_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => (),
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}
