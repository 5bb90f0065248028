/// The `kind` reported for a type in an introspection result's
/// `__schema.types` list.
///
/// Kinds that this crate doesn't recognize are preserved verbatim as
/// [`TypeKind::Other`] rather than rejected.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize)]
#[serde(from = "String")]
pub enum TypeKind {
    Enum,
    InputObject,
    Interface,
    List,
    NonNull,
    Object,
    Other(String),
    Scalar,
    Union,
}
impl TypeKind {
    pub fn name(&self) -> &str {
        match self {
            Self::Enum => "ENUM",
            Self::InputObject => "INPUT_OBJECT",
            Self::Interface => "INTERFACE",
            Self::List => "LIST",
            Self::NonNull => "NON_NULL",
            Self::Object => "OBJECT",
            Self::Other(name) => name.as_str(),
            Self::Scalar => "SCALAR",
            Self::Union => "UNION",
        }
    }

    /// Object and interface types are the only kinds which declare a set of
    /// named output fields.
    pub fn is_object_like(&self) -> bool {
        matches!(self, Self::Interface | Self::Object)
    }
}
impl std::convert::From<String> for TypeKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ENUM" => Self::Enum,
            "INPUT_OBJECT" => Self::InputObject,
            "INTERFACE" => Self::Interface,
            "LIST" => Self::List,
            "NON_NULL" => Self::NonNull,
            "OBJECT" => Self::Object,
            "SCALAR" => Self::Scalar,
            "UNION" => Self::Union,
            _ => Self::Other(value),
        }
    }
}
impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
