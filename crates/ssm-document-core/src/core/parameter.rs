// crates/ssm-document-core/src/core/parameter.rs
// ============================================================================
// Module: SSM Document Parameters
// Description: Parameter types and specifications for SSM documents.
// Purpose: Define the parameter section of document content with wire naming.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Document parameters declare the values a caller supplies when the document
//! is executed remotely. Each parameter carries a semantic type; defaults and
//! allowed values must agree with that type, which is enforced by document
//! validation rather than by these structures.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// SECTION: Parameter Types
// ============================================================================

/// Semantic type of a document parameter or step output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParameterType {
    /// A single string value.
    String,
    /// A list of string values.
    StringList,
    /// A whole number.
    Integer,
    /// A true/false value.
    Boolean,
    /// A list of JSON objects.
    MapList,
    /// A JSON object.
    StringMap,
}

impl ParameterType {
    /// All parameter types accepted by the document schema.
    pub const ALL: [Self; 6] = [
        Self::String,
        Self::StringList,
        Self::Integer,
        Self::Boolean,
        Self::MapList,
        Self::StringMap,
    ];

    /// Returns the wire form of the type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "String",
            Self::StringList => "StringList",
            Self::Integer => "Integer",
            Self::Boolean => "Boolean",
            Self::MapList => "MapList",
            Self::StringMap => "StringMap",
        }
    }

    /// Returns whether a JSON value inhabits this type.
    #[must_use]
    pub fn matches_value(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::StringList => {
                value.as_array().is_some_and(|items| items.iter().all(Value::is_string))
            }
            Self::Integer => value.as_i64().is_some() || value.as_u64().is_some(),
            Self::Boolean => value.is_boolean(),
            Self::MapList => {
                value.as_array().is_some_and(|items| items.iter().all(Value::is_object))
            }
            Self::StringMap => value.is_object(),
        }
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Console rendering hint for a parameter input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayType {
    /// Single-line text box.
    Textfield,
    /// Multi-line text area.
    Textarea,
}

// ============================================================================
// SECTION: Parameter Specification
// ============================================================================

/// Specification of a single document parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterSpec {
    /// Semantic type of the parameter.
    #[serde(rename = "type")]
    pub parameter_type: ParameterType,
    /// Human-readable description of the parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Default value; must inhabit `parameter_type`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Closed set of accepted values; non-empty and contains `default` when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<Value>>,
    /// Regular expression the supplied value must match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_pattern: Option<String>,
    /// Console rendering hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_type: Option<DisplayType>,
    /// Minimum number of items for list-typed parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_items: Option<u32>,
    /// Maximum number of items for list-typed parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u32>,
    /// Minimum number of characters for string-typed parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_chars: Option<u32>,
    /// Maximum number of characters for string-typed parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_chars: Option<u32>,
}

impl ParameterSpec {
    /// Creates a parameter specification of the given type with every
    /// optional field unset.
    #[must_use]
    pub const fn of_type(parameter_type: ParameterType) -> Self {
        Self {
            parameter_type,
            description: None,
            default: None,
            allowed_values: None,
            allowed_pattern: None,
            display_type: None,
            min_items: None,
            max_items: None,
            min_chars: None,
            max_chars: None,
        }
    }
}
