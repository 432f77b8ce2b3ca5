// crates/ssm-document-core/src/core/content.rs
// ============================================================================
// Module: SSM Document Content
// Description: Top-level content body of an SSM document.
// Purpose: Define the schema version, parameters, and step sequence with wire naming.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Document content is the body handed to the template synthesizer: a schema
//! version, an optional assume-role reference, a parameter map, and an
//! ordered step sequence. Step order is execution order and is preserved
//! exactly through rendering; the parameter map renders with sorted keys so
//! output is deterministic.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::ParameterName;
use crate::core::identifiers::SchemaVersion;
use crate::core::parameter::ParameterSpec;
use crate::core::step::StepSpec;

// ============================================================================
// SECTION: Document Content
// ============================================================================

/// Content body of an SSM document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentContent {
    /// Document schema version; supported values depend on the document type.
    pub schema_version: SchemaVersion,
    /// Role assumed during remote execution, typically a placeholder reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assume_role: Option<String>,
    /// Human-readable purpose of the document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Parameters the document accepts, keyed by unique name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub parameters: BTreeMap<ParameterName, ParameterSpec>,
    /// Steps in execution order.
    pub main_steps: Vec<StepSpec>,
}
