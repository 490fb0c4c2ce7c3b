//! Custom test assertions for expressive tests
//!
//! Provides trait-based assertions for issuer claims.

use common::claims::{IssuerClaim, TokenClaims, ISSUER_CLAIM};
use facade_mapper::observability::Severity;
use facade_mapper::OverrideOutcome;
use serde_json::{Map, Value};

/// Custom assertions for token claims
///
/// # Example
/// ```rust,ignore
/// token
///     .assert_issuer("https://auth-facade.example.com")
///     .assert_only_issuer_changed(&before);
/// ```
pub trait IssuerAssertions {
    /// Assert the issuer claim equals `expected`
    fn assert_issuer(&self, expected: &str) -> &Self;

    /// Assert every claim except the issuer equals `before`, in the same order
    fn assert_only_issuer_changed(&self, before: &Self) -> &Self;
}

fn without_issuer(claims: &Map<String, Value>) -> Vec<(&String, &Value)> {
    claims.iter().filter(|(k, _)| *k != ISSUER_CLAIM).collect()
}

impl IssuerAssertions for Map<String, Value> {
    fn assert_issuer(&self, expected: &str) -> &Self {
        assert_eq!(self.issuer(), expected, "Unexpected issuer claim");
        self
    }

    fn assert_only_issuer_changed(&self, before: &Self) -> &Self {
        let keys: Vec<&String> = self.keys().collect();
        let before_keys: Vec<&String> = before.keys().collect();
        assert_eq!(keys, before_keys, "Claim set or claim order changed");
        assert_eq!(
            without_issuer(self),
            without_issuer(before),
            "A claim other than the issuer changed"
        );
        self
    }
}

impl IssuerAssertions for TokenClaims {
    fn assert_issuer(&self, expected: &str) -> &Self {
        assert_eq!(self.issuer(), expected, "Unexpected issuer claim");
        self
    }

    fn assert_only_issuer_changed(&self, before: &Self) -> &Self {
        let after = match serde_json::to_value(self).unwrap() {
            Value::Object(map) => map,
            other => panic!("Claims must serialize to an object, got {other}"),
        };
        let before = match serde_json::to_value(before).unwrap() {
            Value::Object(map) => map,
            other => panic!("Claims must serialize to an object, got {other}"),
        };
        after.assert_only_issuer_changed(&before);
        self
    }
}

/// Custom assertions for decision outcomes
pub trait OutcomeAssertions {
    /// Assert the outcome produces no diagnostic
    fn assert_silent(&self) -> &Self;

    /// Assert the outcome produces a warning mentioning `needle`
    fn assert_warns_about(&self, needle: &str) -> &Self;
}

impl OutcomeAssertions for OverrideOutcome {
    fn assert_silent(&self) -> &Self {
        assert_eq!(
            self.diagnostic(),
            None,
            "Outcome {self:?} should not produce a diagnostic"
        );
        self
    }

    fn assert_warns_about(&self, needle: &str) -> &Self {
        let diagnostic = self
            .diagnostic()
            .unwrap_or_else(|| panic!("Outcome {self:?} should produce a diagnostic"));
        assert_eq!(diagnostic.severity, Severity::Warn);
        assert!(
            diagnostic.message.contains(needle),
            "Warning {:?} should mention {needle:?}",
            diagnostic.message
        );
        self
    }
}
