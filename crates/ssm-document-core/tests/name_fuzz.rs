//! Name and placeholder property-based tests.
//!
//! ## Purpose
//! These tests fuzz raw document names and placeholder text to ensure
//! sanitization and extraction fail closed and never panic on adversarial
//! inputs.
//!
//! ## What is covered
//! - Sanitized names only contain accepted characters and are idempotent.
//! - Placeholder extraction handles arbitrary text without panicking.
//! - Wrapped tokens are always recovered as parameter references.
//!
//! ## What is intentionally out of scope
//! - Name length enforcement (covered by `document_validation.rs`).
//! - Reference resolution against declared parameters (covered by
//!   `placeholder_validation.rs`).
// crates/ssm-document-core/tests/name_fuzz.rs
// ============================================================================
// Module: Name and Placeholder Property-Based Tests
// Description: Fuzz-like checks for name sanitization and token extraction.
// Purpose: Ensure text handling fails closed without panics.
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
    reason = "Test-only assertions and helpers are permitted."
)]

use proptest::prelude::*;
use ssm_document_core::DocumentName;
use ssm_document_core::PlaceholderRef;
use ssm_document_core::collect_from_str;

/// Returns whether a character is accepted in document names.
fn accepted(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '_' | '.' | '-')
}

proptest! {
    #[test]
    fn sanitized_names_use_accepted_charset(raw in ".{0,64}") {
        let name = DocumentName::sanitized(&raw);
        prop_assert!(name.as_str().chars().all(accepted));
    }

    #[test]
    fn sanitization_is_idempotent(raw in ".{0,64}") {
        let once = DocumentName::sanitized(&raw);
        let twice = DocumentName::sanitized(once.as_str());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn extraction_handles_arbitrary_text(text in ".{0,128}") {
        let mut references = Vec::new();
        collect_from_str(&text, &mut references);
    }

    #[test]
    fn wrapped_tokens_are_recovered(token in "[A-Za-z][A-Za-z0-9_]{0,16}") {
        let mut references = Vec::new();
        collect_from_str(&format!("{{{{{token}}}}}"), &mut references);
        prop_assert_eq!(references, vec![PlaceholderRef::Parameter(token)]);
    }
}
