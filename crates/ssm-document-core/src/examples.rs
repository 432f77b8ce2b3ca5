// crates/ssm-document-core/src/examples.rs
// ============================================================================
// Module: Content Examples
// Description: Canonical example document content payloads.
// Purpose: Deterministic examples for docs and tooling.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Canonical examples for SSM document content. Outputs are deterministic and
//! kept in sync with the model and the generated schema.

/// Returns canonical example content for an EC2 state inspection automation.
#[must_use]
pub fn content_yaml_example() -> String {
    String::from(
        r#"schemaVersion: "0.3"
assumeRole: "{{AutomationAssumeRole}}"
description: Inspects the state of an EC2 instance
parameters:
  AutomationAssumeRole:
    type: String
    description: (Optional) The ARN of the role to run the automation on your behalf.
    default: ""
  InstanceId:
    type: String
    description: Instance to inspect
mainSteps:
  - name: getEc2State
    action: aws:executeAwsApi
    maxAttempts: 2
    onFailure: Abort
    inputs:
      Service: ec2
      Api: DescribeInstances
      InstanceIds:
        - "{{InstanceId}}"
    outputs:
      - Name: state
        Selector: $.Reservations[0].Instances[0].State.Name
        Type: String
"#,
    )
}
