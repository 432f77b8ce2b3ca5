// crates/ssm-document-core/src/core/document.rs
// ============================================================================
// Module: SSM Document Specification
// Description: Document resource specification, validation, and error taxonomy.
// Purpose: Build validated, immutable SSM documents that fail closed on bad shape.
// Dependencies: crate::core::{content, identifiers, parameter, placeholder, step}, serde, thiserror
// ============================================================================

//! ## Overview
//! A [`DocumentSpec`] describes an SSM document resource: its name, type,
//! target type, attachments, and content body. [`Document::build`] validates
//! every invariant in one pass and returns an immutable wrapper; no partial
//! document is ever handed to the rendering layer, so rendering never
//! re-validates.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::content::DocumentContent;
use crate::core::identifiers::DocumentName;
use crate::core::identifiers::ParameterName;
use crate::core::identifiers::SchemaVersion;
use crate::core::identifiers::is_name_char;
use crate::core::parameter::ParameterSpec;
use crate::core::parameter::ParameterType;
use crate::core::placeholder;
use crate::core::placeholder::PlaceholderRef;
use crate::core::step::StepSpec;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Minimum document name length.
pub(crate) const MIN_DOCUMENT_NAME_LENGTH: usize = 3;
/// Maximum document name length.
pub(crate) const MAX_DOCUMENT_NAME_LENGTH: usize = 128;
/// Minimum retry ceiling for a step.
pub(crate) const MIN_MAX_ATTEMPTS: u32 = 1;
/// Number of entries an attachment `values` list must hold.
pub(crate) const ATTACHMENT_VALUE_COUNT: usize = 1;
/// Parameter names resolved by the service without a declaration.
pub(crate) const BUILTIN_PARAMETERS: [&str; 1] = ["AutomationAssumeRole"];
/// Schema versions accepted for Automation documents.
pub(crate) const AUTOMATION_SCHEMA_VERSIONS: [&str; 1] = ["0.3"];
/// Schema versions accepted for Command documents.
pub(crate) const COMMAND_SCHEMA_VERSIONS: [&str; 3] = ["1.2", "2.0", "2.2"];
/// Schema versions accepted for Policy documents.
pub(crate) const POLICY_SCHEMA_VERSIONS: [&str; 1] = ["2.0"];
/// Schema versions accepted for Session documents.
pub(crate) const SESSION_SCHEMA_VERSIONS: [&str; 1] = ["1.0"];
/// Schema versions accepted for Package documents.
pub(crate) const PACKAGE_SCHEMA_VERSIONS: [&str; 1] = ["2.0"];

/// Default target type when none is specified.
pub(crate) fn default_target_type() -> String {
    "/".to_string()
}

/// Default update policy when none is specified.
pub(crate) const fn default_update_default_version() -> bool {
    true
}

// ============================================================================
// SECTION: Document Types
// ============================================================================

/// Service document type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DocumentType {
    /// Command document run against managed instances.
    #[default]
    Command,
    /// Automation runbook.
    Automation,
    /// Policy document.
    Policy,
    /// Session preferences document.
    Session,
    /// Package manifest document.
    Package,
}

impl DocumentType {
    /// All document types accepted by the service.
    pub const ALL: [Self; 5] =
        [Self::Command, Self::Automation, Self::Policy, Self::Session, Self::Package];

    /// Returns the wire form of the document type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Command => "Command",
            Self::Automation => "Automation",
            Self::Policy => "Policy",
            Self::Session => "Session",
            Self::Package => "Package",
        }
    }

    /// Returns the schema versions accepted for this document type.
    #[must_use]
    pub const fn supported_schema_versions(self) -> &'static [&'static str] {
        match self {
            Self::Command => &COMMAND_SCHEMA_VERSIONS,
            Self::Automation => &AUTOMATION_SCHEMA_VERSIONS,
            Self::Policy => &POLICY_SCHEMA_VERSIONS,
            Self::Session => &SESSION_SCHEMA_VERSIONS,
            Self::Package => &PACKAGE_SCHEMA_VERSIONS,
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Attachments
// ============================================================================

/// Location kind of a document attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttachmentKey {
    /// S3 bucket folder holding the attachment.
    SourceUrl,
    /// Single S3 object holding the attachment.
    S3FileUrl,
    /// File attached to another document version.
    AttachmentReference,
}

/// Source of a file attached to a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentSource {
    /// Location kind for the attachment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<AttachmentKey>,
    /// Attachment file name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Location value; holds exactly one entry when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

// ============================================================================
// SECTION: Document Specification
// ============================================================================

/// Declarative specification of an SSM document resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSpec {
    /// Document name; 3 to 128 characters of `a-z A-Z 0-9 _ . -`.
    pub name: DocumentName,
    /// Service document type.
    #[serde(default)]
    pub document_type: DocumentType,
    /// Resource types the document can run on.
    #[serde(default = "default_target_type")]
    pub target_type: String,
    /// Whether the default version advances on document updates.
    #[serde(default = "default_update_default_version")]
    pub update_default_version: bool,
    /// Files attached to the document.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<AttachmentSource>,
    /// Content body of the document.
    pub content: DocumentContent,
}

impl DocumentSpec {
    /// Creates a specification with default target type, update policy, and
    /// no attachments.
    #[must_use]
    pub fn new(
        name: impl Into<DocumentName>,
        document_type: DocumentType,
        content: DocumentContent,
    ) -> Self {
        Self {
            name: name.into(),
            document_type,
            target_type: default_target_type(),
            update_default_version: default_update_default_version(),
            attachments: Vec::new(),
            content,
        }
    }
}

// ============================================================================
// SECTION: Validated Document
// ============================================================================

/// A validated, immutable SSM document.
///
/// Constructed only through [`Document::build`]; every instance satisfies the
/// full invariant set, so the rendering layer consumes it without further
/// validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Document {
    /// Validated specification.
    spec: DocumentSpec,
}

impl Document {
    /// Validates a specification and wraps it as an immutable document.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaViolation`] when any document invariant fails; no
    /// partial document is returned.
    pub fn build(spec: DocumentSpec) -> Result<Self, SchemaViolation> {
        ensure_document_name(&spec.name)?;
        ensure_target_type(&spec.target_type)?;
        ensure_attachments(&spec.attachments)?;
        ensure_schema_version(spec.document_type, &spec.content.schema_version)?;
        ensure_steps_present(&spec.content.main_steps)?;
        ensure_unique_step_names(&spec.content.main_steps)?;
        ensure_unique_output_names(&spec.content.main_steps)?;
        ensure_step_attempts(&spec.content.main_steps)?;
        ensure_parameter_specs(&spec.content.parameters)?;
        ensure_placeholders_resolve(&spec.content)?;
        Ok(Self {
            spec,
        })
    }

    /// Returns the document name.
    #[must_use]
    pub const fn name(&self) -> &DocumentName {
        &self.spec.name
    }

    /// Returns the document type.
    #[must_use]
    pub const fn document_type(&self) -> DocumentType {
        self.spec.document_type
    }

    /// Returns the content body.
    #[must_use]
    pub const fn content(&self) -> &DocumentContent {
        &self.spec.content
    }

    /// Returns the full validated specification.
    #[must_use]
    pub const fn spec(&self) -> &DocumentSpec {
        &self.spec
    }

    /// Consumes the document and returns the underlying specification.
    #[must_use]
    pub fn into_spec(self) -> DocumentSpec {
        self.spec
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Document validation errors.
#[derive(Debug, Error)]
pub enum SchemaViolation {
    /// Document name violates the length or character rules.
    #[error("invalid document name {name}: names are 3 to 128 characters of a-z, A-Z, 0-9, _, ., and -")]
    InvalidDocumentName {
        /// Offending name.
        name: String,
    },
    /// Target type does not start with `/`.
    #[error("invalid target type {0}: target types start with /")]
    InvalidTargetType(String),
    /// Attachment `values` list does not hold exactly one entry.
    #[error("attachment values must contain exactly one entry")]
    InvalidAttachmentValues,
    /// Schema version is not accepted for the document type.
    #[error("schema version {version} is not supported for {document_type} documents")]
    UnsupportedSchemaVersion {
        /// Document type being built.
        document_type: DocumentType,
        /// Offending schema version.
        version: String,
    },
    /// Content defines no steps.
    #[error("document content must define at least one step")]
    MissingSteps,
    /// Duplicate step names detected.
    #[error("duplicate step name: {0}")]
    DuplicateStepName(String),
    /// Duplicate output names detected within a step.
    #[error("duplicate output name {output} in step {step}")]
    DuplicateOutputName {
        /// Step declaring the outputs.
        step: String,
        /// Offending output name.
        output: String,
    },
    /// Step retry ceiling is below the minimum.
    #[error("step {step} declares maxAttempts {value}; the retry ceiling is at least 1")]
    InvalidMaxAttempts {
        /// Offending step.
        step: String,
        /// Declared retry ceiling.
        value: u32,
    },
    /// Parameter declares an empty `allowedValues` list.
    #[error("parameter {parameter} declares an empty allowedValues list")]
    EmptyAllowedValues {
        /// Offending parameter.
        parameter: String,
    },
    /// Parameter default is outside its `allowedValues` list.
    #[error("parameter {parameter} declares a default outside its allowedValues")]
    DefaultNotAllowed {
        /// Offending parameter.
        parameter: String,
    },
    /// Parameter default does not inhabit the declared type.
    #[error("parameter {parameter} declares a default that does not match type {parameter_type}")]
    DefaultTypeMismatch {
        /// Offending parameter.
        parameter: String,
        /// Declared parameter type.
        parameter_type: ParameterType,
    },
    /// Parameter allowed value does not inhabit the declared type.
    #[error("parameter {parameter} declares an allowed value that does not match type {parameter_type}")]
    AllowedValueTypeMismatch {
        /// Offending parameter.
        parameter: String,
        /// Declared parameter type.
        parameter_type: ParameterType,
    },
    /// Parameter bounds are inverted.
    #[error("parameter {parameter} declares inverted {field} bounds: minimum exceeds maximum")]
    InvertedBounds {
        /// Offending parameter.
        parameter: String,
        /// Bounded quantity (`items` or `chars`).
        field: &'static str,
    },
    /// Placeholder references a parameter that is not declared.
    #[error("placeholder references undeclared parameter: {0}")]
    UndeclaredParameter(String),
    /// Placeholder references a step that does not exist.
    #[error("placeholder references output of unknown step: {0}")]
    UnknownStepReference(String),
    /// Placeholder references an output the step does not export.
    #[error("placeholder references unknown output {output} of step {step}")]
    UnknownStepOutput {
        /// Referenced step.
        step: String,
        /// Referenced output.
        output: String,
    },
}

// ============================================================================
// SECTION: Validation Helpers
// ============================================================================

/// Ensures the document name obeys the length and character rules.
fn ensure_document_name(name: &DocumentName) -> Result<(), SchemaViolation> {
    let text = name.as_str();
    let length_ok = (MIN_DOCUMENT_NAME_LENGTH..=MAX_DOCUMENT_NAME_LENGTH).contains(&text.len());
    let well_formed = length_ok && text.chars().all(is_name_char);
    if well_formed {
        Ok(())
    } else {
        Err(SchemaViolation::InvalidDocumentName {
            name: text.to_string(),
        })
    }
}

/// Ensures the target type is a `/`-rooted resource path.
fn ensure_target_type(target_type: &str) -> Result<(), SchemaViolation> {
    if target_type.starts_with('/') {
        Ok(())
    } else {
        Err(SchemaViolation::InvalidTargetType(target_type.to_string()))
    }
}

/// Ensures attachment value lists hold exactly one entry.
fn ensure_attachments(attachments: &[AttachmentSource]) -> Result<(), SchemaViolation> {
    for attachment in attachments {
        if let Some(values) = &attachment.values
            && values.len() != ATTACHMENT_VALUE_COUNT
        {
            return Err(SchemaViolation::InvalidAttachmentValues);
        }
    }
    Ok(())
}

/// Ensures the schema version is accepted for the document type.
fn ensure_schema_version(
    document_type: DocumentType,
    version: &SchemaVersion,
) -> Result<(), SchemaViolation> {
    if document_type.supported_schema_versions().contains(&version.as_str()) {
        Ok(())
    } else {
        Err(SchemaViolation::UnsupportedSchemaVersion {
            document_type,
            version: version.to_string(),
        })
    }
}

/// Ensures the content declares at least one step.
fn ensure_steps_present(steps: &[StepSpec]) -> Result<(), SchemaViolation> {
    if steps.is_empty() {
        return Err(SchemaViolation::MissingSteps);
    }
    Ok(())
}

/// Ensures step names are unique within the document.
fn ensure_unique_step_names(steps: &[StepSpec]) -> Result<(), SchemaViolation> {
    for (index, step) in steps.iter().enumerate() {
        if steps.iter().skip(index + 1).any(|other| other.name == step.name) {
            return Err(SchemaViolation::DuplicateStepName(step.name.to_string()));
        }
    }
    Ok(())
}

/// Ensures output names are unique within each step.
fn ensure_unique_output_names(steps: &[StepSpec]) -> Result<(), SchemaViolation> {
    for step in steps {
        for (index, output) in step.outputs.iter().enumerate() {
            if step.outputs.iter().skip(index + 1).any(|other| other.name == output.name) {
                return Err(SchemaViolation::DuplicateOutputName {
                    step: step.name.to_string(),
                    output: output.name.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Ensures declared retry ceilings are at least the minimum.
fn ensure_step_attempts(steps: &[StepSpec]) -> Result<(), SchemaViolation> {
    for step in steps {
        if let Some(value) = step.max_attempts
            && value < MIN_MAX_ATTEMPTS
        {
            return Err(SchemaViolation::InvalidMaxAttempts {
                step: step.name.to_string(),
                value,
            });
        }
    }
    Ok(())
}

/// Ensures parameter defaults, allowed values, and bounds are coherent.
fn ensure_parameter_specs(
    parameters: &BTreeMap<ParameterName, ParameterSpec>,
) -> Result<(), SchemaViolation> {
    for (name, parameter) in parameters {
        if let Some(default) = &parameter.default
            && !parameter.parameter_type.matches_value(default)
        {
            return Err(SchemaViolation::DefaultTypeMismatch {
                parameter: name.to_string(),
                parameter_type: parameter.parameter_type,
            });
        }
        if let Some(allowed) = &parameter.allowed_values {
            if allowed.is_empty() {
                return Err(SchemaViolation::EmptyAllowedValues {
                    parameter: name.to_string(),
                });
            }
            if allowed.iter().any(|value| !parameter.parameter_type.matches_value(value)) {
                return Err(SchemaViolation::AllowedValueTypeMismatch {
                    parameter: name.to_string(),
                    parameter_type: parameter.parameter_type,
                });
            }
            if let Some(default) = &parameter.default
                && !allowed.contains(default)
            {
                return Err(SchemaViolation::DefaultNotAllowed {
                    parameter: name.to_string(),
                });
            }
        }
        ensure_ordered_bounds(name, "items", parameter.min_items, parameter.max_items)?;
        ensure_ordered_bounds(name, "chars", parameter.min_chars, parameter.max_chars)?;
    }
    Ok(())
}

/// Ensures a min/max bound pair is not inverted.
fn ensure_ordered_bounds(
    name: &ParameterName,
    field: &'static str,
    min: Option<u32>,
    max: Option<u32>,
) -> Result<(), SchemaViolation> {
    if let (Some(min), Some(max)) = (min, max)
        && min > max
    {
        return Err(SchemaViolation::InvertedBounds {
            parameter: name.to_string(),
            field,
        });
    }
    Ok(())
}

/// Ensures every placeholder reference in the content resolves.
fn ensure_placeholders_resolve(content: &DocumentContent) -> Result<(), SchemaViolation> {
    let mut references = Vec::new();
    if let Some(role) = &content.assume_role {
        placeholder::collect_from_str(role, &mut references);
    }
    for step in &content.main_steps {
        for value in step.inputs.values() {
            placeholder::collect_from_value(value, &mut references);
        }
        for output in &step.outputs {
            placeholder::collect_from_str(&output.selector, &mut references);
        }
        if let Some(precondition) = &step.precondition {
            for text in &precondition.string_equals {
                placeholder::collect_from_str(text, &mut references);
            }
        }
    }

    for reference in references {
        match reference {
            PlaceholderRef::SystemVariable(_) => {}
            PlaceholderRef::Parameter(name) => {
                let declared = content.parameters.keys().any(|key| key.as_str() == name);
                if !declared && !BUILTIN_PARAMETERS.contains(&name.as_str()) {
                    return Err(SchemaViolation::UndeclaredParameter(name));
                }
            }
            PlaceholderRef::StepOutput {
                step,
                output,
            } => {
                let Some(exporter) =
                    content.main_steps.iter().find(|spec| spec.name.as_str() == step)
                else {
                    return Err(SchemaViolation::UnknownStepReference(step));
                };
                if !exporter.outputs.iter().any(|binding| binding.name == output) {
                    return Err(SchemaViolation::UnknownStepOutput {
                        step,
                        output,
                    });
                }
            }
        }
    }
    Ok(())
}
