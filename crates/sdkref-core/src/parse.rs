use serde_yaml_ng::Value;

use crate::error::ParseError;

/// Parse an OpenAPI document from YAML into a generic value tree.
///
/// Only syntactic validity is checked here. Missing or oddly shaped fields
/// are handled by the extractor, which treats them as absent.
pub fn from_yaml(input: &str) -> Result<Value, ParseError> {
    let doc: Value = serde_yaml_ng::from_str(input)?;
    Ok(doc)
}

/// Parse an OpenAPI document from JSON into the same value tree.
pub fn from_json(input: &str) -> Result<Value, ParseError> {
    let doc: Value = serde_json::from_str(input)?;
    Ok(doc)
}
