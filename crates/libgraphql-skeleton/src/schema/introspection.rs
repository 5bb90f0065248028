//! Serde mirror of the subset of the standard introspection query's
//! `__schema` payload that schema loading needs. Unknown keys are ignored.

use crate::types::TypeKind;

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct IntrospectionSchema {
    #[serde(default)]
    pub(super) mutation_type: Option<IntrospectionTypeRef>,
    #[serde(default)]
    pub(super) query_type: Option<IntrospectionTypeRef>,
    #[serde(default)]
    pub(super) subscription_type: Option<IntrospectionTypeRef>,
    pub(super) types: Vec<IntrospectionType>,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct IntrospectionTypeRef {
    pub(super) name: String,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct IntrospectionType {
    // `fields` is reported as `null` for kinds without a fields collection;
    // some producers omit the key instead.
    #[serde(default)]
    pub(super) fields: Option<Vec<IntrospectionField>>,
    pub(super) kind: TypeKind,
    pub(super) name: String,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct IntrospectionField {
    pub(super) name: String,
}
