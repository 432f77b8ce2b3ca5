//! Placeholder resolution tests for ssm-document-core.
// crates/ssm-document-core/tests/placeholder_validation.rs
// ============================================================================
// Module: Placeholder Validation Tests
// Description: Tests for `{{Name}}` extraction, classification, and resolution.
// Purpose: Ensure dangling references fail closed while built-ins resolve.
// ============================================================================

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::collections::BTreeMap;

use serde_json::json;
use ssm_document_core::Document;
use ssm_document_core::DocumentContent;
use ssm_document_core::DocumentName;
use ssm_document_core::DocumentSpec;
use ssm_document_core::DocumentType;
use ssm_document_core::OutputBinding;
use ssm_document_core::ParameterName;
use ssm_document_core::ParameterSpec;
use ssm_document_core::ParameterType;
use ssm_document_core::PlaceholderRef;
use ssm_document_core::SchemaViolation;
use ssm_document_core::SchemaVersion;
use ssm_document_core::StepAction;
use ssm_document_core::StepSpec;
use ssm_document_core::collect_from_str;
use ssm_document_core::collect_from_value;

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Builds an automation document whose first step receives the given input.
fn build_with_input(input: serde_json::Value) -> Result<Document, SchemaViolation> {
    let mut parameters = BTreeMap::new();
    parameters
        .insert(ParameterName::new("InstanceId"), ParameterSpec::of_type(ParameterType::String));

    let mut describe = StepSpec::of_action("getEc2State", StepAction::ExecuteAwsApi);
    describe.inputs.insert("Service".to_string(), json!("ec2"));
    describe.inputs.insert("Api".to_string(), json!("DescribeInstances"));
    describe.outputs.push(OutputBinding {
        name: "state".to_string(),
        selector: "$.Reservations[0].Instances[0].State.Name".to_string(),
        output_type: ParameterType::String,
    });

    let mut report = StepSpec::of_action("reportState", StepAction::ExecuteScript);
    report.inputs.insert("InputPayload".to_string(), input);

    let content = DocumentContent {
        schema_version: SchemaVersion::new("0.3"),
        assume_role: Some("{{AutomationAssumeRole}}".to_string()),
        description: None,
        parameters,
        main_steps: vec![describe, report],
    };
    Document::build(DocumentSpec::new(
        DocumentName::new("Placeholder-Fixture"),
        DocumentType::Automation,
        content,
    ))
}

// ============================================================================
// SECTION: Resolution
// ============================================================================

/// Verifies declared parameter references resolve.
#[test]
fn declared_parameter_reference_resolves() {
    assert!(build_with_input(json!({"instance": "{{InstanceId}}"})).is_ok());
}

/// Verifies undeclared parameter references are rejected.
#[test]
fn undeclared_parameter_reference_is_rejected() {
    let result = build_with_input(json!({"instance": "{{InstanceType}}"}));
    assert!(matches!(
        result,
        Err(SchemaViolation::UndeclaredParameter(name)) if name == "InstanceType"
    ));
}

/// Verifies the assume-role built-in resolves without a declaration.
#[test]
fn assume_role_builtin_resolves_without_declaration() {
    assert!(build_with_input(json!({})).is_ok());
}

/// Verifies system variables resolve without declarations.
#[test]
fn system_variables_resolve_without_declarations() {
    let input = json!({
        "execution": "{{automation:EXECUTION_ID}}",
        "region": "{{global:REGION}}",
        "ami": "{{ssm:/ami/latest}}",
        "token": "{{ssm-secure:/deploy/token}}"
    });
    assert!(build_with_input(input).is_ok());
}

/// Verifies references to declared step outputs resolve.
#[test]
fn step_output_reference_resolves() {
    assert!(build_with_input(json!({"state": "{{getEc2State.state}}"})).is_ok());
}

/// Verifies references to undeclared step outputs are rejected.
#[test]
fn unknown_step_output_is_rejected() {
    let result = build_with_input(json!({"state": "{{getEc2State.missing}}"}));
    assert!(matches!(
        result,
        Err(SchemaViolation::UnknownStepOutput { step, output })
            if step == "getEc2State" && output == "missing"
    ));
}

/// Verifies references to unknown steps are rejected.
#[test]
fn unknown_step_reference_is_rejected() {
    let result = build_with_input(json!({"state": "{{nosuchstep.state}}"}));
    assert!(matches!(
        result,
        Err(SchemaViolation::UnknownStepReference(step)) if step == "nosuchstep"
    ));
}

/// Verifies placeholders nested in arrays and objects are scanned.
#[test]
fn nested_placeholders_are_scanned() {
    let input = json!({"targets": [{"ids": ["{{Missing}}"]}]});
    assert!(matches!(
        build_with_input(input),
        Err(SchemaViolation::UndeclaredParameter(_))
    ));
}

/// Verifies whitespace inside braces is tolerated.
#[test]
fn whitespace_inside_braces_is_tolerated() {
    assert!(build_with_input(json!({"instance": "{{ InstanceId }}"})).is_ok());
}

/// Verifies unterminated tokens are treated as literal text.
#[test]
fn unterminated_token_is_literal() {
    assert!(build_with_input(json!({"note": "{{InstanceType"})).is_ok());
}

// ============================================================================
// SECTION: Extraction
// ============================================================================

/// Verifies extraction classifies each reference form.
#[test]
fn extraction_classifies_reference_forms() {
    let mut references = Vec::new();
    collect_from_str(
        "run {{InstanceId}} then {{getEc2State.state}} in {{global:REGION}}",
        &mut references,
    );
    assert_eq!(references, vec![
        PlaceholderRef::Parameter("InstanceId".to_string()),
        PlaceholderRef::StepOutput {
            step: "getEc2State".to_string(),
            output: "state".to_string(),
        },
        PlaceholderRef::SystemVariable("global:REGION".to_string()),
    ]);
}

/// Verifies extraction walks JSON value trees.
#[test]
fn extraction_walks_value_trees() {
    let mut references = Vec::new();
    collect_from_value(&json!({"a": ["{{One}}"], "b": {"c": "{{Two}}"}}), &mut references);
    assert_eq!(references.len(), 2);
}

/// Verifies empty tokens are ignored.
#[test]
fn empty_tokens_are_ignored() {
    let mut references = Vec::new();
    collect_from_str("{{}} and {{   }}", &mut references);
    assert!(references.is_empty());
}
