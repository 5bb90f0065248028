mod type_descriptor;
mod type_kind;

pub use type_descriptor::TypeDescriptor;
pub use type_kind::TypeKind;
