// crates/ssm-document-core/src/schema.rs
// ============================================================================
// Module: Content Schemas
// Description: JSON schema builder for SSM document content.
// Purpose: Provide canonical validation schema for rendered content fragments.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! This module defines the JSON Schema for SSM document content. The schema
//! is generated from the canonical document model: action lists, parameter
//! types, and version lists come from the same constants the validator uses.
//! It is consumed by tooling, docs, and validation pipelines.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use serde_json::json;

use crate::core::document::DocumentType;
use crate::core::document::MIN_MAX_ATTEMPTS;
use crate::core::parameter::ParameterType;
use crate::core::step::StepAction;

// ============================================================================
// SECTION: Content Schema
// ============================================================================

/// Returns the JSON schema for SSM document content.
#[must_use]
pub fn content_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "$id": "ssm-document://schemas/content.schema.json",
        "title": "SSM Document Content",
        "description": "Content body of an SSM document.",
        "type": "object",
        "properties": {
            "schemaVersion": {
                "type": "string",
                "enum": schema_version_values(),
                "description": "Document schema version."
            },
            "assumeRole": {
                "type": "string",
                "description": "Role assumed during remote execution."
            },
            "description": {
                "type": "string",
                "description": "Human-readable purpose of the document."
            },
            "parameters": {
                "type": "object",
                "additionalProperties": parameter_schema(),
                "description": "Parameters the document accepts."
            },
            "mainSteps": {
                "type": "array",
                "minItems": 1,
                "items": step_schema(),
                "description": "Steps in execution order."
            }
        },
        "required": ["schemaVersion", "mainSteps"],
        "additionalProperties": false
    })
}

// ============================================================================
// SECTION: Parameter Schema
// ============================================================================

/// Schema for a single parameter specification.
fn parameter_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "type": {
                "type": "string",
                "enum": parameter_type_values(),
                "description": "Semantic type of the parameter."
            },
            "description": {
                "type": "string",
                "description": "Human-readable description of the parameter."
            },
            "default": {
                "description": "Default value; must inhabit the declared type."
            },
            "allowedValues": {
                "type": "array",
                "minItems": 1,
                "description": "Closed set of accepted values."
            },
            "allowedPattern": {
                "type": "string",
                "description": "Regular expression the supplied value must match."
            },
            "displayType": {
                "type": "string",
                "enum": ["textfield", "textarea"],
                "description": "Console rendering hint."
            },
            "minItems": {
                "type": "integer",
                "minimum": 0,
                "description": "Minimum number of items for list-typed parameters."
            },
            "maxItems": {
                "type": "integer",
                "minimum": 0,
                "description": "Maximum number of items for list-typed parameters."
            },
            "minChars": {
                "type": "integer",
                "minimum": 0,
                "description": "Minimum number of characters for string-typed parameters."
            },
            "maxChars": {
                "type": "integer",
                "minimum": 0,
                "description": "Maximum number of characters for string-typed parameters."
            }
        },
        "required": ["type"],
        "additionalProperties": false
    })
}

// ============================================================================
// SECTION: Step Schema
// ============================================================================

/// Schema for a single step specification.
fn step_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "name": {
                "type": "string",
                "minLength": 1,
                "description": "Step name, unique within the document."
            },
            "action": {
                "type": "string",
                "enum": action_values(),
                "description": "Platform action the step executes."
            },
            "maxAttempts": {
                "type": "integer",
                "minimum": MIN_MAX_ATTEMPTS,
                "description": "Retry ceiling for remote execution."
            },
            "onFailure": {
                "type": "string",
                "enum": ["Abort", "Continue"],
                "description": "Failure policy applied once retries are exhausted."
            },
            "inputs": {
                "type": "object",
                "description": "Action-specific inputs."
            },
            "outputs": {
                "type": "array",
                "items": output_schema(),
                "description": "Values the step exports."
            },
            "precondition": {
                "type": "object",
                "properties": {
                    "StringEquals": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "StringEquals comparison pair."
                    }
                },
                "required": ["StringEquals"],
                "additionalProperties": false,
                "description": "Guard restricting the step to matching targets."
            }
        },
        "required": ["name", "action"],
        "additionalProperties": false
    })
}

/// Schema for a single step output binding.
fn output_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "Name": {
                "type": "string",
                "minLength": 1,
                "description": "Output name, unique within the step."
            },
            "Selector": {
                "type": "string",
                "description": "Selector expression applied to the action response."
            },
            "Type": {
                "type": "string",
                "enum": parameter_type_values(),
                "description": "Semantic type of the exported value."
            }
        },
        "required": ["Name", "Selector", "Type"],
        "additionalProperties": false
    })
}

// ============================================================================
// SECTION: Enumeration Values
// ============================================================================

/// Returns every schema version accepted across document types, sorted.
fn schema_version_values() -> Vec<&'static str> {
    let mut versions: Vec<&'static str> = DocumentType::ALL
        .iter()
        .flat_map(|document_type| document_type.supported_schema_versions().iter().copied())
        .collect();
    versions.sort_unstable();
    versions.dedup();
    versions
}

/// Returns the wire form of every parameter type.
fn parameter_type_values() -> Vec<&'static str> {
    ParameterType::ALL.iter().map(|parameter_type| parameter_type.as_str()).collect()
}

/// Returns the wire form of every step action.
fn action_values() -> Vec<&'static str> {
    StepAction::ALL.iter().map(|action| action.as_str()).collect()
}
