use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::Serialize;
use serde_yaml_ng::Value;

use crate::config::ReferenceTables;
use crate::order::{method_rank, resource_order};

/// HTTP verbs that produce SDK methods. Other keys on a path item
/// (parameters, summary, uppercase verbs) are ignored.
const SDK_VERBS: [&str; 5] = ["get", "post", "put", "patch", "delete"];

/// One renderable method: the generated name and its table description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Method {
    pub name: String,
    pub description: String,
}

/// Extracted reference data, ready for rendering.
#[derive(Debug, Clone, Default)]
pub struct Reference {
    /// Resource key -> methods, sorted CRUD-first within each resource.
    pub resources: IndexMap<String, Vec<Method>>,
    /// Final section order.
    pub order: Vec<String>,
    /// Resource key -> section heading text.
    pub display_names: IndexMap<String, String>,
}

/// Walk the document's paths and group operations into resources.
///
/// Operations without tags or without an operationId are skipped, as are
/// operations whose first tag is in the skip set. Only the first tag of an
/// operation is consulted. Malformed entries (a non-mapping path item, a verb
/// mapped to a scalar, a non-string tag) are treated as absent.
pub fn build_reference(doc: &Value, tables: &ReferenceTables) -> Reference {
    let mut resources: IndexMap<String, Vec<Method>> = IndexMap::new();
    let mut display_names: IndexMap<String, String> = IndexMap::new();
    let mut discovered: BTreeSet<String> = BTreeSet::new();

    let paths = doc.get("paths").and_then(Value::as_mapping);
    for (_path, path_item) in paths.into_iter().flatten() {
        let Some(item) = path_item.as_mapping() else {
            continue;
        };

        for (verb, operation) in item {
            let Some(verb) = verb.as_str() else { continue };
            if !SDK_VERBS.contains(&verb) {
                continue;
            }
            let Some(op) = operation.as_mapping() else {
                continue;
            };

            let tag = op
                .get("tags")
                .and_then(Value::as_sequence)
                .and_then(|tags| tags.first())
                .and_then(Value::as_str);
            let Some(tag) = tag else { continue };
            if tables.skip_tags.contains(tag) {
                continue;
            }

            let operation_id = op
                .get("operationId")
                .and_then(Value::as_str)
                .unwrap_or_default();
            if operation_id.is_empty() {
                continue;
            }

            // Merged tags go to their parent resource.
            let resource_key = tables
                .merge_tags
                .get(tag)
                .cloned()
                .unwrap_or_else(|| tag.to_string());
            discovered.insert(resource_key.clone());

            // Track the heading text for non-merged tags only, so a merged
            // child never renames its parent's section.
            if !tables.merge_tags.contains_key(tag) {
                let display = tables
                    .display_names
                    .get(tag)
                    .cloned()
                    .unwrap_or_else(|| tag.to_string());
                display_names.insert(resource_key.clone(), display);
            }

            let name = pascalize(operation_id);
            let summary = op
                .get("summary")
                .and_then(Value::as_str)
                .unwrap_or_default();
            let description = if summary.is_empty() {
                name.clone()
            } else {
                summary.to_string()
            };

            resources
                .entry(resource_key)
                .or_default()
                .push(Method { name, description });
        }
    }

    let order = resource_order(&discovered, tables);

    for methods in resources.values_mut() {
        methods.sort_by(|a, b| {
            method_rank(&a.name)
                .cmp(&method_rank(&b.name))
                .then_with(|| a.name.cmp(&b.name))
        });
    }

    Reference {
        resources,
        order,
        display_names,
    }
}

/// Uppercase the first character of an operationId, matching the Go
/// PascalCase names oapi-codegen emits. The rest of the identifier is
/// left untouched.
pub fn pascalize(operation_id: &str) -> String {
    let mut chars = operation_id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
