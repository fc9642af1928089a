use std::collections::BTreeSet;

use crate::config::ReferenceTables;

/// CRUD-style rank for a generated method name.
///
/// Within a resource, methods sort by `(rank, name)`:
/// list/getAll, then bulk/create, then get, then update, then delete,
/// then everything else.
pub fn method_rank(name: &str) -> u8 {
    let lower = name.to_lowercase();

    if lower.starts_with("list") || lower.starts_with("getall") {
        0
    } else if lower.starts_with("bulk") || lower.starts_with("create") {
        1
    } else if lower.starts_with("get") {
        2
    } else if lower.starts_with("update") {
        3
    } else if lower.starts_with("delete") {
        4
    } else {
        5
    }
}

/// Assemble the final section order from the discovered resource keys.
///
/// Preferred resources come first in their listed order, then the remaining
/// discovered resources alphabetically, then the forced-last resources in
/// their listed order. Only keys actually discovered appear.
pub fn resource_order(discovered: &BTreeSet<String>, tables: &ReferenceTables) -> Vec<String> {
    let in_preferred = |key: &str| tables.preferred_order.iter().any(|p| p == key);
    let in_last = |key: &str| tables.last_resources.iter().any(|l| l == key);

    // BTreeSet iteration is already alphabetical.
    let auto_discovered = discovered
        .iter()
        .filter(|&key| !in_preferred(key) && !in_last(key));

    tables
        .preferred_order
        .iter()
        .filter(|&key| discovered.contains(key))
        .chain(auto_discovered)
        .chain(
            tables
                .last_resources
                .iter()
                .filter(|&key| discovered.contains(key)),
        )
        .cloned()
        .collect()
}
