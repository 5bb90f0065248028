//! Fixture builders shared by the test modules.

use serde_json::Value;
use serde_json::json;
use std::path::Path;
use std::path::PathBuf;

/// An introspection `__Type` entry for an object type whose fields are all
/// nullable `String`s.
pub fn object_type_json(name: &str, field_names: &[&str]) -> Value {
    let fields: Vec<Value> =
        field_names.iter()
            .map(|field_name| json!({
                "name": field_name,
                "description": null,
                "args": [],
                "type": {
                    "kind": "SCALAR",
                    "name": "String",
                    "ofType": null,
                },
                "isDeprecated": false,
                "deprecationReason": null,
            }))
            .collect();

    json!({
        "kind": "OBJECT",
        "name": name,
        "description": null,
        "fields": fields,
        "inputFields": null,
        "interfaces": [],
        "enumValues": null,
        "possibleTypes": null,
    })
}

pub fn scalar_type_json(name: &str) -> Value {
    json!({
        "kind": "SCALAR",
        "name": name,
        "description": null,
        "fields": null,
        "inputFields": null,
        "interfaces": null,
        "enumValues": null,
        "possibleTypes": null,
    })
}

pub fn enum_type_json(name: &str, values: &[&str]) -> Value {
    json!({
        "kind": "ENUM",
        "name": name,
        "fields": null,
        "enumValues": values.iter()
            .map(|value| json!({ "name": value, "isDeprecated": false }))
            .collect::<Vec<_>>(),
    })
}

/// A full introspection response (`{"data": {"__schema": ...}}`) listing
/// `types`, with `Query` declared as the root query type.
pub fn introspection_response(types: Vec<Value>) -> Value {
    json!({
        "data": {
            "__schema": {
                "queryType": { "name": "Query" },
                "mutationType": null,
                "subscriptionType": null,
                "types": types,
                "directives": [],
            },
        },
    })
}

pub fn write_json_file(dir: &Path, file_name: &str, value: &Value) -> PathBuf {
    let path = dir.join(file_name);
    std::fs::write(&path, value.to_string()).unwrap();
    path
}

/// Names of every entry directly within `dir`, sorted.
pub fn dir_file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> =
        std::fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
    names.sort();
    names
}
