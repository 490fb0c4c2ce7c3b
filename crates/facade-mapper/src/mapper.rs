//! The issuer override decision.
//!
//! A request is facade-originated when it carries `X-Auth-Facade-Request: true`
//! (any header-name case, exact case-sensitive value). For those requests the token issuer is
//! replaced by the configured facade URL, provided it is a well-formed
//! absolute URL. Every other combination leaves the token untouched.
//!
//! The decision never fails the request. A malformed configured URL degrades
//! to a no-op plus one warning so operators can spot the misconfiguration.

use crate::config::MapperConfig;
use crate::errors::IssuerUrlError;
use crate::observability::{self, Diagnostic, Severity};
use common::claims::{IssuerClaim, TokenType};
use common::headers::RequestHeaders;
use url::Url;

/// Header set by the facade on every request it proxies.
pub const FACADE_HEADER_NAME: &str = "X-Auth-Facade-Request";

/// The only header value that marks a request as facade-originated.
pub const FACADE_HEADER_VALUE: &str = "true";

/// What the decision did with a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverrideOutcome {
    /// Facade header absent or not exactly `true`.
    NotFacadeRequest,

    /// Facade request, but no usable URL configured.
    NotConfigured,

    /// Issuer replaced with the trimmed configured URL.
    Overridden { issuer: String },

    /// Facade request with a configured URL that failed validation.
    InvalidUrl {
        value: String,
        reason: IssuerUrlError,
    },
}

impl OverrideOutcome {
    /// Bounded label value for metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            OverrideOutcome::NotFacadeRequest => "not_facade",
            OverrideOutcome::NotConfigured => "not_configured",
            OverrideOutcome::Overridden { .. } => "overridden",
            OverrideOutcome::InvalidUrl { .. } => "invalid_url",
        }
    }

    pub fn is_overridden(&self) -> bool {
        matches!(self, OverrideOutcome::Overridden { .. })
    }

    /// The diagnostic this outcome produces, if any.
    ///
    /// Only an override (debug) and a rejected URL (warn) are reported.
    pub fn diagnostic(&self) -> Option<Diagnostic> {
        match self {
            OverrideOutcome::NotFacadeRequest | OverrideOutcome::NotConfigured => None,
            OverrideOutcome::Overridden { issuer } => Some(Diagnostic {
                severity: Severity::Debug,
                message: format!("Overrode token issuer to facade URL: {issuer}"),
            }),
            OverrideOutcome::InvalidUrl { value, reason } => Some(Diagnostic {
                severity: Severity::Warn,
                message: format!("Invalid facade issuer URL configured: {value} ({reason})"),
            }),
        }
    }

    /// Apply the outcome to a token. Only `Overridden` mutates, and only the
    /// issuer.
    pub fn apply<T: IssuerClaim + ?Sized>(&self, token: &mut T) {
        if let OverrideOutcome::Overridden { issuer } = self {
            token.set_issuer(issuer.clone());
        }
    }
}

/// Whether the request came through the authentication facade.
pub fn is_facade_request<H: RequestHeaders + ?Sized>(headers: &H) -> bool {
    headers.header(FACADE_HEADER_NAME) == Some(FACADE_HEADER_VALUE)
}

/// Validate a facade issuer URL, returning the trimmed input on success.
///
/// The URL must be written in `scheme://authority` form with a non-empty
/// host, and must not contain control characters. The returned value is the
/// caller's text, not the parser's normalized serialization, so anything the
/// parser would silently repair is rejected up front.
pub fn validate_issuer_url(raw: &str) -> Result<&str, IssuerUrlError> {
    let trimmed = raw.trim();
    if trimmed.chars().any(|c| c.is_ascii_control()) {
        return Err(IssuerUrlError::ControlCharacter);
    }

    let parsed = Url::parse(trimmed)?;

    if parsed.cannot_be_a_base() {
        return Err(IssuerUrlError::NotHierarchical);
    }

    // The parser accepts `https:host` and `https:\\host` for special schemes.
    let after_scheme = trimmed.get(parsed.scheme().len()..).unwrap_or("");
    if !after_scheme.starts_with("://") {
        return Err(IssuerUrlError::MissingAuthority);
    }

    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(trimmed),
        _ => Err(IssuerUrlError::MissingHost),
    }
}

/// Decide what to do with the issuer for this request, without touching a
/// token. The result can be applied to several tokens of the same request.
pub fn decide<H: RequestHeaders + ?Sized>(headers: &H, config: &MapperConfig) -> OverrideOutcome {
    if !is_facade_request(headers) {
        return OverrideOutcome::NotFacadeRequest;
    }

    let Some(configured) = config.configured_issuer() else {
        return OverrideOutcome::NotConfigured;
    };

    match validate_issuer_url(configured) {
        Ok(issuer) => OverrideOutcome::Overridden {
            issuer: issuer.to_string(),
        },
        Err(reason) => OverrideOutcome::InvalidUrl {
            value: config.facade_issuer_url.clone().unwrap_or_default(),
            reason,
        },
    }
}

/// Run the decision against one token and report it.
///
/// Emits at most one diagnostic event and records one metric sample.
pub fn transform<H, T>(headers: &H, config: &MapperConfig, token: &mut T) -> OverrideOutcome
where
    H: RequestHeaders + ?Sized,
    T: IssuerClaim + ?Sized,
{
    transform_for(None, headers, config, token)
}

pub(crate) fn transform_for<H, T>(
    token_type: Option<TokenType>,
    headers: &H,
    config: &MapperConfig,
    token: &mut T,
) -> OverrideOutcome
where
    H: RequestHeaders + ?Sized,
    T: IssuerClaim + ?Sized,
{
    let outcome = decide(headers, config);
    outcome.apply(token);

    if let Some(diagnostic) = outcome.diagnostic() {
        observability::emit(&diagnostic, token_type);
    }
    observability::metrics::record_issuer_override(
        outcome.as_label(),
        observability::token_type_label(token_type),
    );

    outcome
}

/// A configured instance of the facade issuer mapper.
///
/// Holds only its immutable configuration, so one instance can serve
/// concurrent requests.
#[derive(Debug, Clone)]
pub struct FacadeIssuerMapper {
    config: MapperConfig,
}

impl FacadeIssuerMapper {
    pub fn new(config: MapperConfig) -> Self {
        tracing::info!(
            target: "fm.provider",
            configured = config.configured_issuer().is_some(),
            "Facade issuer mapper initialized - ready to handle facade issuer overrides"
        );
        Self { config }
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Transform a token outside any specific token-type context.
    pub fn transform<H, T>(&self, headers: &H, token: &mut T) -> OverrideOutcome
    where
        H: RequestHeaders + ?Sized,
        T: IssuerClaim + ?Sized,
    {
        transform(headers, &self.config, token)
    }
}
