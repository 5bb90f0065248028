use crate::types::TypeKind;
use indexmap::IndexSet;

/// A named type described by an introspection result.
///
/// Only the type's name, its [`TypeKind`], and (for object-like types) the
/// names of its fields are retained. Field arguments and return types are
/// not modeled.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeDescriptor {
    pub(crate) fields: Option<IndexSet<String>>,
    pub(crate) kind: TypeKind,
    pub(crate) name: String,
}
impl TypeDescriptor {
    /// Builds a [`TypeDescriptor`] for a type which does not expose a fields
    /// collection at all (scalars, enums, unions, input objects).
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            fields: None,
            kind,
            name: name.into(),
        }
    }

    /// Builds a [`TypeDescriptor`] for a type with a fields collection.
    ///
    /// Duplicate field names are collapsed, keeping the position of the first
    /// occurrence.
    pub fn with_fields<I, S>(
        name: impl Into<String>,
        kind: TypeKind,
        fields: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: Some(fields.into_iter().map(Into::into).collect()),
            kind,
            name: name.into(),
        }
    }

    /// The names of this type's fields, in declaration order.
    ///
    /// Returns `None` both when the type has no fields capability and when
    /// its field list is empty. Either way there is nothing to select.
    pub fn field_names(&self) -> Option<Vec<&str>> {
        let fields = self.fields.as_ref()?;
        if fields.is_empty() {
            return None;
        }
        Some(fields.iter().map(String::as_str).collect())
    }

    /// Whether the introspection result reported a (possibly empty) `fields`
    /// list for this type.
    pub fn has_fields_capability(&self) -> bool {
        self.fields.is_some()
    }

    pub fn kind(&self) -> &TypeKind {
        &self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
