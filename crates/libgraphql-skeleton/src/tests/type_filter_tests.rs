use crate::schema::SchemaModel;
use crate::type_filter;
use crate::types::TypeDescriptor;
use crate::types::TypeKind;
use proptest::prelude::*;

fn object(name: &str) -> TypeDescriptor {
    TypeDescriptor::with_fields(name, TypeKind::Object, ["id"])
}

#[test]
fn root_operation_types_are_excluded() {
    let schema = SchemaModel::from_type_descriptors([
        object("Query"),
        object("Mutation"),
        object("Subscription"),
        object("Widget"),
    ]).unwrap();

    let selected: Vec<&str> =
        type_filter::selectable_types(&schema)
            .into_iter()
            .map(TypeDescriptor::name)
            .collect();
    assert_eq!(selected, vec!["Widget"]);
}

#[test]
fn introspection_types_are_excluded() {
    let schema = SchemaModel::from_type_descriptors([
        object("__Schema"),
        object("__Type"),
        TypeDescriptor::new("__TypeKind", TypeKind::Enum),
        object("_Service"),
        object("User"),
    ]).unwrap();

    let selected: Vec<&str> =
        type_filter::selectable_types(&schema)
            .into_iter()
            .map(TypeDescriptor::name)
            .collect();
    assert_eq!(selected, vec!["_Service", "User"]);
}

#[test]
fn types_without_fields_are_still_selected() {
    // Field enumeration decides whether anything is generated; the filter
    // only looks at names.
    let schema = SchemaModel::from_type_descriptors([
        TypeDescriptor::new("DateTime", TypeKind::Scalar),
        TypeDescriptor::with_fields("Tag", TypeKind::Object, Vec::<String>::new()),
    ]).unwrap();

    assert_eq!(type_filter::selectable_types(&schema).len(), 2);
}

#[test]
fn root_names_are_matched_exactly() {
    assert!(!type_filter::is_selectable_type_name("Query"));
    assert!(type_filter::is_selectable_type_name("query"));
    assert!(type_filter::is_selectable_type_name("QueryResult"));
    assert!(type_filter::is_selectable_type_name("RootQuery"));
    assert!(type_filter::is_selectable_type_name("_"));
    assert!(!type_filter::is_selectable_type_name("__"));
}

#[test]
fn empty_schema_selects_nothing() {
    assert!(type_filter::selectable_types(&SchemaModel::default()).is_empty());
}

proptest! {
    #[test]
    fn selection_is_the_order_preserving_subset_of_allowed_names(
        names in proptest::collection::hash_set(
            "(__)?(Query|Mutation|Subscription|[A-Z][A-Za-z0-9_]{0,8})",
            0..24,
        ),
    ) {
        let names: Vec<String> = names.into_iter().collect();
        let schema = SchemaModel::from_type_descriptors(
            names.iter().map(|name| object(name)),
        ).unwrap();

        let selected: Vec<&str> =
            type_filter::selectable_types(&schema)
                .into_iter()
                .map(TypeDescriptor::name)
                .collect();
        let expected: Vec<&str> =
            names.iter()
                .map(String::as_str)
                .filter(|name| {
                    !name.starts_with("__")
                        && !["Query", "Mutation", "Subscription"].contains(name)
                })
                .collect();

        prop_assert_eq!(selected, expected);
    }
}
