//! Token claim types handed to protocol mappers by the host.
//!
//! The host owns a token for its whole lifecycle (construction, signing,
//! serialization). Mappers only ever see it through a mutable borrow for the
//! duration of one call, and the only claim they may touch is the issuer.
//! That contract is captured by [`IssuerClaim`], which any host token type can
//! implement. [`TokenClaims`] is a ready-made implementation for hosts that
//! keep their claims as an OIDC JSON object.
//!
//! # Security
//!
//! The `sub` field of [`TokenClaims`] is redacted in Debug output so that a
//! stray `?claims` in a tracing call never leaks a user identifier.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Name of the issuer claim in an OIDC claim set.
pub const ISSUER_CLAIM: &str = "iss";

// =============================================================================
// Token Types
// =============================================================================

/// The token contexts a mapper can be registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    /// OAuth 2.0 access token.
    Access,
    /// OIDC ID token.
    Id,
    /// OIDC userinfo response.
    UserInfo,
}

impl TokenType {
    /// All token types, in the order the host applies mappers.
    pub const ALL: [TokenType; 3] = [TokenType::Access, TokenType::Id, TokenType::UserInfo];

    /// Bounded label value for logs and metrics.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Access => "access",
            TokenType::Id => "id",
            TokenType::UserInfo => "userinfo",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Issuer Claim
// =============================================================================

/// A token whose issuer claim can be read and replaced.
///
/// Implementations must not alter any other part of the token from
/// [`IssuerClaim::set_issuer`].
pub trait IssuerClaim {
    /// Current issuer value.
    fn issuer(&self) -> &str;

    /// Replace the issuer value.
    fn set_issuer(&mut self, issuer: String);
}

impl<T: IssuerClaim + ?Sized> IssuerClaim for &mut T {
    fn issuer(&self) -> &str {
        (**self).issuer()
    }

    fn set_issuer(&mut self, issuer: String) {
        (**self).set_issuer(issuer);
    }
}

/// Raw JSON claim sets.
///
/// A missing or non-string `iss` reads as the empty string. Setting the issuer
/// replaces the value in place, so an existing `iss` keeps its position.
impl IssuerClaim for Map<String, Value> {
    fn issuer(&self) -> &str {
        self.get(ISSUER_CLAIM).and_then(Value::as_str).unwrap_or("")
    }

    fn set_issuer(&mut self, issuer: String) {
        match self.get_mut(ISSUER_CLAIM) {
            Some(existing) => *existing = Value::String(issuer),
            None => {
                self.insert(ISSUER_CLAIM.to_string(), Value::String(issuer));
            }
        }
    }
}

// =============================================================================
// Claims Types
// =============================================================================

/// OIDC token claim set.
///
/// Registered claims the host always sets are typed fields; everything else
/// (audience, scope, custom claims) is carried in `other` in its original
/// order.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Issuer URL.
    pub iss: String,

    /// Subject - redacted in Debug output.
    pub sub: String,

    /// Expiration timestamp (Unix epoch seconds).
    pub exp: i64,

    /// Issued-at timestamp (Unix epoch seconds).
    pub iat: i64,

    /// Token identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,

    /// All remaining claims.
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl fmt::Debug for TokenClaims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenClaims")
            .field("iss", &self.iss)
            .field("sub", &"[REDACTED]")
            .field("exp", &self.exp)
            .field("iat", &self.iat)
            .field("jti", &self.jti)
            .field("other", &self.other)
            .finish()
    }
}

impl TokenClaims {
    /// Creates a claim set with no optional or custom claims.
    #[must_use]
    pub fn new(iss: String, sub: String, exp: i64, iat: i64) -> Self {
        Self {
            iss,
            sub,
            exp,
            iat,
            jti: None,
            other: Map::new(),
        }
    }

    /// Look up a claim that is not one of the typed fields.
    #[must_use]
    pub fn claim(&self, name: &str) -> Option<&Value> {
        self.other.get(name)
    }
}

impl IssuerClaim for TokenClaims {
    fn issuer(&self) -> &str {
        &self.iss
    }

    fn set_issuer(&mut self, issuer: String) {
        self.iss = issuer;
    }
}

// =============================================================================
// Tests
// =============================================================================
