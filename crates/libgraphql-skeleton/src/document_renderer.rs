use crate::MutationStyle;
use crate::OperationKind;

/// Renders an operation document which selects each of `field_names` on
/// `type_name`:
///
/// ```text
/// query {
///   TypeName {
///     field1
///     field2
///   }
/// }
/// ```
///
/// The result always ends with a newline.
pub fn render_operation(
    kind: OperationKind,
    type_name: &str,
    field_names: &[&str],
) -> String {
    let mut document = format!("{} {{\n  {type_name} {{\n", kind.keyword());
    for field_name in field_names {
        document.push_str("    ");
        document.push_str(field_name);
        document.push('\n');
    }
    document.push_str("  }\n}\n");
    document
}

/// The rendered query and mutation documents for a single type.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeneratedDocument {
    pub(crate) mutation: Option<String>,
    pub(crate) query: String,
    pub(crate) type_name: String,
}
impl GeneratedDocument {
    /// Renders the documents for `type_name`.
    ///
    /// `field_names` must not be empty: a selection set with no fields is not
    /// valid GraphQL, so types without fields are skipped before rendering.
    pub fn render(
        type_name: &str,
        field_names: &[&str],
        mutation_style: MutationStyle,
    ) -> Self {
        debug_assert!(
            !field_names.is_empty(),
            "attempted to render documents for `{type_name}` with no fields",
        );

        let mutation = match mutation_style {
            MutationStyle::Placeholder => None,
            MutationStyle::ReuseFields => Some(render_operation(
                OperationKind::Mutation,
                type_name,
                field_names,
            )),
        };

        Self {
            mutation,
            query: render_operation(OperationKind::Query, type_name, field_names),
            type_name: type_name.to_string(),
        }
    }

    /// The rendered mutation document, or `None` when mutations were rendered
    /// as a placeholder.
    pub fn mutation(&self) -> Option<&str> {
        self.mutation.as_deref()
    }

    pub fn query(&self) -> &str {
        self.query.as_str()
    }

    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }
}
