// crates/ssm-document-core/src/render.rs
// ============================================================================
// Module: SSM Document Rendering
// Description: Content parsing and template fragment emission.
// Purpose: Move documents between text forms and the validated model.
// Dependencies: crate::core, serde_json, serde_yaml
// ============================================================================

//! ## Overview
//! Content arrives either as structured values or as YAML/JSON text; the YAML
//! parser accepts both text forms since JSON is a YAML subset. Parsing only
//! decodes shape, while invariants are enforced by [`Document::build`].
//! Rendering consumes validated documents and emits template fragments whose
//! field names match the service schema exactly.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use thiserror::Error;

use crate::core::content::DocumentContent;
use crate::core::document::Document;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Rendering and parsing errors.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Content text could not be decoded into the document model.
    #[error("failed to parse document content: {0}")]
    Parse(#[source] serde_yaml::Error),
    /// Document could not be rendered as JSON.
    #[error("failed to render document as JSON: {0}")]
    Json(#[source] serde_json::Error),
    /// Document could not be rendered as YAML.
    #[error("failed to render document as YAML: {0}")]
    Yaml(#[source] serde_yaml::Error),
}

// ============================================================================
// SECTION: Parsing
// ============================================================================

/// Decodes document content from YAML or JSON text.
///
/// # Errors
///
/// Returns [`RenderError::Parse`] when the text does not decode into the
/// content model.
pub fn content_from_str(text: &str) -> Result<DocumentContent, RenderError> {
    serde_yaml::from_str(text).map_err(RenderError::Parse)
}

// ============================================================================
// SECTION: Rendering
// ============================================================================

/// Renders document content as a JSON template fragment.
///
/// # Errors
///
/// Returns [`RenderError::Json`] when serialization fails.
pub fn content_to_value(content: &DocumentContent) -> Result<Value, RenderError> {
    serde_json::to_value(content).map_err(RenderError::Json)
}

/// Renders document content as pretty-printed JSON text.
///
/// # Errors
///
/// Returns [`RenderError::Json`] when serialization fails.
pub fn content_to_json(content: &DocumentContent) -> Result<String, RenderError> {
    serde_json::to_string_pretty(content).map_err(RenderError::Json)
}

/// Renders document content as YAML text.
///
/// # Errors
///
/// Returns [`RenderError::Yaml`] when serialization fails.
pub fn content_to_yaml(content: &DocumentContent) -> Result<String, RenderError> {
    serde_yaml::to_string(content).map_err(RenderError::Yaml)
}

/// Renders a validated document as a JSON resource fragment.
///
/// # Errors
///
/// Returns [`RenderError::Json`] when serialization fails.
pub fn document_to_value(document: &Document) -> Result<Value, RenderError> {
    serde_json::to_value(document).map_err(RenderError::Json)
}

/// Renders a validated document as pretty-printed JSON text.
///
/// # Errors
///
/// Returns [`RenderError::Json`] when serialization fails.
pub fn document_to_json(document: &Document) -> Result<String, RenderError> {
    serde_json::to_string_pretty(document).map_err(RenderError::Json)
}
