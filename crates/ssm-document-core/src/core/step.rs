// crates/ssm-document-core/src/core/step.rs
// ============================================================================
// Module: SSM Document Steps
// Description: Step actions, outputs, and specifications for SSM documents.
// Purpose: Define the ordered step sequence of document content with wire naming.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Steps are the ordered units of work a document describes. Each step names
//! a platform action, supplies action-specific inputs, and may export outputs
//! for later steps or the document caller. Retry ceiling and failure policy
//! are metadata about remote execution; this model only validates their shape.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use crate::core::identifiers::StepName;
use crate::core::parameter::ParameterType;

// ============================================================================
// SECTION: Step Actions
// ============================================================================

/// Platform action identifier executed by a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepAction {
    /// Invoke an AWS service API and capture its response.
    #[serde(rename = "aws:executeAwsApi")]
    ExecuteAwsApi,
    /// Poll an AWS service API until a property reaches a desired state.
    #[serde(rename = "aws:waitForAwsResourceProperty")]
    WaitForAwsResourceProperty,
    /// Run an inline script in the automation runtime.
    #[serde(rename = "aws:executeScript")]
    ExecuteScript,
    /// Run another automation document.
    #[serde(rename = "aws:executeAutomation")]
    ExecuteAutomation,
    /// Choose the next step based on input values.
    #[serde(rename = "aws:branch")]
    Branch,
    /// Suspend execution for a fixed duration.
    #[serde(rename = "aws:sleep")]
    Sleep,
    /// Suspend execution until resumed by an operator.
    #[serde(rename = "aws:pause")]
    Pause,
    /// Run a command document against managed instances.
    #[serde(rename = "aws:runCommand")]
    RunCommand,
    /// Run a shell script on Linux instances.
    #[serde(rename = "aws:runShellScript")]
    RunShellScript,
    /// Run a PowerShell script on Windows instances.
    #[serde(rename = "aws:runPowerShellScript")]
    RunPowerShellScript,
}

impl StepAction {
    /// All step actions accepted by the document schema.
    pub const ALL: [Self; 10] = [
        Self::ExecuteAwsApi,
        Self::WaitForAwsResourceProperty,
        Self::ExecuteScript,
        Self::ExecuteAutomation,
        Self::Branch,
        Self::Sleep,
        Self::Pause,
        Self::RunCommand,
        Self::RunShellScript,
        Self::RunPowerShellScript,
    ];

    /// Returns the wire form of the action identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ExecuteAwsApi => "aws:executeAwsApi",
            Self::WaitForAwsResourceProperty => "aws:waitForAwsResourceProperty",
            Self::ExecuteScript => "aws:executeScript",
            Self::ExecuteAutomation => "aws:executeAutomation",
            Self::Branch => "aws:branch",
            Self::Sleep => "aws:sleep",
            Self::Pause => "aws:pause",
            Self::RunCommand => "aws:runCommand",
            Self::RunShellScript => "aws:runShellScript",
            Self::RunPowerShellScript => "aws:runPowerShellScript",
        }
    }
}

impl fmt::Display for StepAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Failure Policy
// ============================================================================

/// Behavior when a step exhausts its retry ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OnFailure {
    /// Stop the document run.
    Abort,
    /// Continue with the next step.
    Continue,
}

impl OnFailure {
    /// Returns the wire form of the policy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Abort => "Abort",
            Self::Continue => "Continue",
        }
    }
}

impl fmt::Display for OnFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Outputs and Preconditions
// ============================================================================

/// Value a step exports for later steps or the document caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputBinding {
    /// Output name, unique within the step.
    pub name: String,
    /// Selector expression applied to the action response.
    pub selector: String,
    /// Semantic type of the exported value.
    #[serde(rename = "Type")]
    pub output_type: ParameterType,
}

/// Guard restricting a step to matching execution targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Precondition {
    /// `StringEquals` comparison pair, e.g. `["platformType", "Linux"]`.
    #[serde(rename = "StringEquals")]
    pub string_equals: Vec<String>,
}

// ============================================================================
// SECTION: Step Specification
// ============================================================================

/// Specification of a single document step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepSpec {
    /// Step name, unique within the document.
    pub name: StepName,
    /// Platform action the step executes.
    pub action: StepAction,
    /// Retry ceiling for remote execution; at least 1 when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_attempts: Option<u32>,
    /// Failure policy applied once retries are exhausted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_failure: Option<OnFailure>,
    /// Action-specific inputs; string values may reference parameters.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub inputs: Map<String, Value>,
    /// Values the step exports, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<OutputBinding>,
    /// Guard restricting the step to matching execution targets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precondition: Option<Precondition>,
}

impl StepSpec {
    /// Creates a step for the given action with every optional field unset.
    #[must_use]
    pub fn of_action(name: impl Into<StepName>, action: StepAction) -> Self {
        Self {
            name: name.into(),
            action,
            max_attempts: None,
            on_failure: None,
            inputs: Map::new(),
            outputs: Vec::new(),
            precondition: None,
        }
    }
}
