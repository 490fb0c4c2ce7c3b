//! Metrics definitions for the facade issuer mapper
//!
//! All metrics follow Prometheus naming conventions:
//! - `fm_` prefix for Facade Mapper
//! - `_total` suffix for counters
//!
//! # Cardinality
//!
//! Labels are bounded:
//! - `outcome`: 4 values (not_facade, not_configured, overridden, invalid_url)
//! - `token_type`: 4 values (access, id, userinfo, unspecified)

use metrics::counter;

/// Record one issuer override decision
///
/// Metric: `fm_issuer_override_total`
/// Labels: `outcome`, `token_type`
pub fn record_issuer_override(outcome: &'static str, token_type: &'static str) {
    counter!("fm_issuer_override_total", "outcome" => outcome, "token_type" => token_type)
        .increment(1);
}
