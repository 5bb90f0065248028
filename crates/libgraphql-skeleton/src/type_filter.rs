use crate::schema::SchemaModel;
use crate::types::TypeDescriptor;

/// Conventional names of the root operation types. Types with these names
/// never receive generated documents.
pub const ROOT_OPERATION_TYPE_NAMES: [&str; 3] = [
    "Query",
    "Mutation",
    "Subscription",
];

/// Whether documents may be generated for a type with the given name.
///
/// Names beginning with `__` are reserved for the introspection system and
/// are excluded along with the [`ROOT_OPERATION_TYPE_NAMES`].
pub fn is_selectable_type_name(type_name: &str) -> bool {
    !type_name.starts_with("__")
        && !ROOT_OPERATION_TYPE_NAMES.contains(&type_name)
}

/// Every type in `schema` that documents may be generated for, in the
/// schema's type-map order.
pub fn selectable_types(schema: &SchemaModel) -> Vec<&TypeDescriptor> {
    schema.types()
        .values()
        .filter(|type_| {
            let selectable = is_selectable_type_name(type_.name());
            if !selectable {
                log::trace!("Skipping reserved type `{}`.", type_.name());
            }
            selectable
        })
        .collect()
}
