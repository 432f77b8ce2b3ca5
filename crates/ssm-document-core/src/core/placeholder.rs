// crates/ssm-document-core/src/core/placeholder.rs
// ============================================================================
// Module: SSM Document Placeholders
// Description: Extraction and classification of `{{Name}}` references.
// Purpose: Feed placeholder resolution checks during document validation.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! String fields inside a document may reference other values with `{{Name}}`
//! tokens. The service substitutes these at remote execution time; this layer
//! only extracts the references so validation can check that each one
//! resolves. Text without a matching `}}` is treated as literal content.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Prefixes marking system variables and external store references.
const SYSTEM_VARIABLE_PREFIXES: [&str; 4] = ["automation:", "global:", "ssm-secure:", "ssm:"];

// ============================================================================
// SECTION: Placeholder References
// ============================================================================

/// A single `{{ ... }}` reference extracted from a string field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceholderRef {
    /// Reference to a document parameter by name.
    Parameter(String),
    /// Reference to an output exported by an earlier step.
    StepOutput {
        /// Name of the step exporting the output.
        step: String,
        /// Name of the referenced output.
        output: String,
    },
    /// System variable or external store reference, resolved by the service.
    SystemVariable(String),
}

// ============================================================================
// SECTION: Extraction
// ============================================================================

/// Appends every placeholder reference found in a string.
pub fn collect_from_str(text: &str, out: &mut Vec<PlaceholderRef>) {
    let mut rest = text;
    while let Some(start) = rest.find("{{") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            break;
        };
        let token = after[..end].trim();
        if !token.is_empty() {
            out.push(classify(token));
        }
        rest = &after[end + 2..];
    }
}

/// Appends every placeholder reference found in a JSON value tree.
pub fn collect_from_value(value: &Value, out: &mut Vec<PlaceholderRef>) {
    match value {
        Value::String(text) => collect_from_str(text, out),
        Value::Array(items) => {
            for item in items {
                collect_from_value(item, out);
            }
        }
        Value::Object(map) => {
            for item in map.values() {
                collect_from_value(item, out);
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
}

/// Classifies a non-empty placeholder token.
fn classify(token: &str) -> PlaceholderRef {
    if SYSTEM_VARIABLE_PREFIXES.iter().any(|prefix| token.starts_with(prefix)) {
        return PlaceholderRef::SystemVariable(token.to_string());
    }
    if let Some((step, output)) = token.split_once('.') {
        return PlaceholderRef::StepOutput {
            step: step.to_string(),
            output: output.to_string(),
        };
    }
    PlaceholderRef::Parameter(token.to_string())
}
