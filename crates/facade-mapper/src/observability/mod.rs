//! Observability for the facade issuer mapper
//!
//! The mapper reports through two channels:
//! - `tracing` events with target `fm.mapper` (at most one per transformation)
//! - `metrics` counters (see [`metrics`])
//!
//! # Privacy
//!
//! Events carry the configured issuer URL and the token type only. Token
//! subjects and header values other than the facade marker never appear.

pub mod metrics;

use common::claims::TokenType;
use std::fmt;

/// Severity of a diagnostic event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Debug,
    Warn,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Warn => "warn",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operator-facing event describing a transformation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

/// Label for an optional token type (bounded cardinality).
pub fn token_type_label(token_type: Option<TokenType>) -> &'static str {
    token_type.map_or("unspecified", |t| t.as_str())
}

/// Emit a diagnostic as a `tracing` event.
pub fn emit(diagnostic: &Diagnostic, token_type: Option<TokenType>) {
    let token_type = token_type_label(token_type);
    match diagnostic.severity {
        Severity::Debug => tracing::debug!(
            target: "fm.mapper",
            token_type,
            "{}",
            diagnostic.message
        ),
        Severity::Warn => tracing::warn!(
            target: "fm.mapper",
            token_type,
            "{}",
            diagnostic.message
        ),
    }
}
