// crates/ssm-document-core/src/core/identifiers.rs
// ============================================================================
// Module: SSM Document Identifiers
// Description: Canonical opaque identifiers for SSM document specifications.
// Purpose: Provide strongly typed, serializable names with stable string forms.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! This module defines the canonical string-based names used throughout the
//! document model. Names are opaque and serialize as strings. Validation is
//! handled at the document boundary rather than within these simple wrappers;
//! the one exception is [`DocumentName::sanitized`], which normalizes raw
//! input into the character set the service accepts.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Character Rules
// ============================================================================

/// Returns whether a character is permitted in a document name.
pub(crate) const fn is_name_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '_' | '.' | '-')
}

// ============================================================================
// SECTION: Identifier Types
// ============================================================================

/// Name of an SSM document resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentName(String);

impl DocumentName {
    /// Creates a new document name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a document name from raw input, replacing each run of
    /// characters outside `a-z A-Z 0-9 _ . -` with a single `-`.
    #[must_use]
    pub fn sanitized(raw: &str) -> Self {
        let mut name = String::with_capacity(raw.len());
        let mut in_invalid_run = false;
        for ch in raw.chars() {
            if is_name_char(ch) {
                name.push(ch);
                in_invalid_run = false;
            } else if !in_invalid_run {
                name.push('-');
                in_invalid_run = true;
            }
        }
        Self(name)
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for DocumentName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for DocumentName {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Name of a step within a document's step sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepName(String);

impl StepName {
    /// Creates a new step name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StepName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for StepName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for StepName {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Name of a document parameter.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterName(String);

impl ParameterName {
    /// Creates a new parameter name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParameterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for ParameterName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ParameterName {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Document schema version string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaVersion(String);

impl SchemaVersion {
    /// Creates a new schema version.
    #[must_use]
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    /// Returns the version as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for SchemaVersion {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SchemaVersion {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
