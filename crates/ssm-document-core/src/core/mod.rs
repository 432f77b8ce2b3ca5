// crates/ssm-document-core/src/core/mod.rs
// ============================================================================
// Module: SSM Document Core Types
// Description: Canonical SSM document schema structures.
// Purpose: Provide stable, serializable types for SSM document specifications.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Core types define the document resource specification, its content body,
//! parameters, steps, and placeholder references. These types are the
//! canonical source of truth for the rendered template fragments and the
//! generated JSON Schema.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod content;
pub mod document;
pub mod identifiers;
pub mod parameter;
pub mod placeholder;
pub mod step;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use content::DocumentContent;
pub use document::AttachmentKey;
pub use document::AttachmentSource;
pub use document::Document;
pub use document::DocumentSpec;
pub use document::DocumentType;
pub use document::SchemaViolation;
pub use identifiers::DocumentName;
pub use identifiers::ParameterName;
pub use identifiers::SchemaVersion;
pub use identifiers::StepName;
pub use parameter::DisplayType;
pub use parameter::ParameterSpec;
pub use parameter::ParameterType;
pub use placeholder::PlaceholderRef;
pub use placeholder::collect_from_str;
pub use placeholder::collect_from_value;
pub use step::OnFailure;
pub use step::OutputBinding;
pub use step::Precondition;
pub use step::StepAction;
pub use step::StepSpec;
