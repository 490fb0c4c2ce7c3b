//! Builder patterns for test data construction
//!
//! Provides fluent APIs for creating test tokens, request headers, and mapper
//! configuration.

use crate::fixtures::{HOST_ISSUER, TEST_SUBJECT};
use chrono::{Duration, Utc};
use common::claims::TokenClaims;
use facade_mapper::mapper::{FACADE_HEADER_NAME, FACADE_HEADER_VALUE};
use facade_mapper::MapperConfig;
use serde_json::{json, Map, Value};
use std::collections::HashMap;
use uuid::Uuid;

/// Builder for test token claims
///
/// Defaults to a realistic access token: host issuer, audience, scope, and a
/// random `jti`, so tests can verify that non-issuer claims survive untouched.
///
/// # Example
/// ```rust,ignore
/// let token = TestTokenBuilder::new()
///     .issued_by("https://kc/realms/a")
///     .with_claim("azp", json!("web"))
///     .build();
/// ```
pub struct TestTokenBuilder {
    iss: String,
    sub: String,
    exp: i64,
    iat: i64,
    jti: Option<String>,
    other: Map<String, Value>,
}

impl TestTokenBuilder {
    /// Create a new token builder with defaults
    pub fn new() -> Self {
        let now = Utc::now();
        let mut other = Map::new();
        other.insert("aud".to_string(), json!(["web-app", "account"]));
        other.insert("scope".to_string(), json!("openid profile email"));
        other.insert("typ".to_string(), json!("Bearer"));

        Self {
            iss: HOST_ISSUER.to_string(),
            sub: TEST_SUBJECT.to_string(),
            exp: (now + Duration::seconds(300)).timestamp(),
            iat: now.timestamp(),
            jti: Some(Uuid::new_v4().to_string()),
            other,
        }
    }

    /// Set the issuer
    pub fn issued_by(mut self, issuer: &str) -> Self {
        self.iss = issuer.to_string();
        self
    }

    /// Set the subject
    pub fn for_subject(mut self, subject: &str) -> Self {
        self.sub = subject.to_string();
        self
    }

    /// Add or replace a custom claim
    pub fn with_claim(mut self, name: &str, value: Value) -> Self {
        self.other.insert(name.to_string(), value);
        self
    }

    /// Drop the `jti` claim
    pub fn without_jti(mut self) -> Self {
        self.jti = None;
        self
    }

    /// Build the claims
    pub fn build(self) -> TokenClaims {
        TokenClaims {
            iss: self.iss,
            sub: self.sub,
            exp: self.exp,
            iat: self.iat,
            jti: self.jti,
            other: self.other,
        }
    }

    /// Build the claims as a raw JSON object, with `iss` in the middle so
    /// position preservation can be checked
    pub fn build_json(self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("sub".to_string(), json!(self.sub));
        map.insert("iss".to_string(), json!(self.iss));
        map.insert("exp".to_string(), json!(self.exp));
        map.insert("iat".to_string(), json!(self.iat));
        if let Some(jti) = self.jti {
            map.insert("jti".to_string(), json!(jti));
        }
        map.extend(self.other);
        map
    }
}

impl Default for TestTokenBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for request header maps
pub struct TestHeadersBuilder {
    headers: HashMap<String, String>,
}

impl TestHeadersBuilder {
    /// Start with no headers
    pub fn new() -> Self {
        Self {
            headers: HashMap::new(),
        }
    }

    /// Mark the request as coming through the facade
    pub fn from_facade(self) -> Self {
        self.facade_marker(FACADE_HEADER_VALUE)
    }

    /// Set the facade header to an arbitrary value
    pub fn facade_marker(self, value: &str) -> Self {
        self.with_header(FACADE_HEADER_NAME, value)
    }

    /// Add any header
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_string(), value.to_string());
        self
    }

    pub fn build(self) -> HashMap<String, String> {
        self.headers
    }
}

impl Default for TestHeadersBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Mapper config with the given facade URL
pub fn facade_config(url: &str) -> MapperConfig {
    MapperConfig::new(url)
}

/// Mapper config with no facade URL at all
pub fn unset_config() -> MapperConfig {
    MapperConfig::default()
}
