//! Issuer override decision scenarios
//!
//! Each test drives the public `transform` entry point with host-shaped
//! inputs and checks both the resulting token and the reported outcome.

use facade_mapper::mapper::transform;
use facade_mapper::{MapperConfig, OverrideOutcome};
use fm_test_utils::*;
use std::collections::HashMap;

// ============================================================================
// Non-facade requests
// ============================================================================

/// Scenario 1: no headers, empty config
#[test]
fn test_no_headers_empty_config_is_noop() {
    let mut token = TestTokenBuilder::new().build();
    let before = token.clone();
    let headers: HashMap<String, String> = HashMap::new();

    let outcome = transform(&headers, &facade_config(""), &mut token);

    assert_eq!(outcome, OverrideOutcome::NotFacadeRequest);
    outcome.assert_silent();
    token
        .assert_issuer(HOST_ISSUER)
        .assert_only_issuer_changed(&before);
}

/// Scenario 5: explicit `false`
#[test]
fn test_header_false_keeps_issuer() {
    let mut token = TestTokenBuilder::new().build();
    let headers = TestHeadersBuilder::new().facade_marker("false").build();

    let outcome = transform(&headers, &facade_config(FACADE_URL), &mut token);

    assert_eq!(outcome, OverrideOutcome::NotFacadeRequest);
    token.assert_issuer(HOST_ISSUER);
}

#[test]
fn test_only_exact_true_triggers_override() {
    for value in NON_FACADE_VALUES {
        let mut token = TestTokenBuilder::new().build();
        let headers = TestHeadersBuilder::new().facade_marker(value).build();

        let outcome = transform(&headers, &facade_config(FACADE_URL), &mut token);

        assert_eq!(
            outcome,
            OverrideOutcome::NotFacadeRequest,
            "header value {value:?} must not trigger an override"
        );
        token.assert_issuer(HOST_ISSUER);
    }
}

#[test]
fn test_lowercase_header_name_triggers_override() {
    let mut token = TestTokenBuilder::new().build();
    let headers = TestHeadersBuilder::new()
        .with_header("x-auth-facade-request", "true")
        .build();

    let outcome = transform(&headers, &facade_config(FACADE_URL), &mut token);

    assert!(outcome.is_overridden());
    token.assert_issuer(FACADE_URL);
}

#[test]
fn test_unrelated_headers_do_not_trigger() {
    let mut token = TestTokenBuilder::new().build();
    let headers = TestHeadersBuilder::new()
        .with_header("X-Forwarded-Host", "auth-facade.example.com")
        .with_header("X-Auth-Facade", "true")
        .build();

    transform(&headers, &facade_config(FACADE_URL), &mut token);

    token.assert_issuer(HOST_ISSUER);
}

// ============================================================================
// Facade requests
// ============================================================================

/// Scenario 2: valid URL
#[test]
fn test_facade_request_with_valid_url_overrides() {
    let mut token = TestTokenBuilder::new().build();
    let before = token.clone();
    let headers = TestHeadersBuilder::new().from_facade().build();

    let outcome = transform(&headers, &facade_config(FACADE_URL), &mut token);

    assert_eq!(
        outcome,
        OverrideOutcome::Overridden {
            issuer: FACADE_URL.to_string()
        }
    );
    token
        .assert_issuer(FACADE_URL)
        .assert_only_issuer_changed(&before);
}

/// Scenario 3: URL surrounded by whitespace
#[test]
fn test_facade_request_trims_configured_url() {
    let mut token = TestTokenBuilder::new().build();
    let headers = TestHeadersBuilder::new().from_facade().build();

    transform(&headers, &facade_config(PADDED_FACADE_URL), &mut token);

    token.assert_issuer(FACADE_URL);
}

#[test]
fn test_facade_request_keeps_path_and_port() {
    let url = "https://login.example.com:8443/realms/customers";
    let mut token = TestTokenBuilder::new().build();
    let headers = TestHeadersBuilder::new().from_facade().build();

    transform(&headers, &facade_config(url), &mut token);

    token.assert_issuer(url);
}

/// Scenario 4: malformed URL
#[test]
fn test_facade_request_with_invalid_url_warns() {
    let mut token = TestTokenBuilder::new().build();
    let before = token.clone();
    let headers = TestHeadersBuilder::new().from_facade().build();

    let outcome = transform(&headers, &facade_config(INVALID_URL), &mut token);

    assert!(matches!(outcome, OverrideOutcome::InvalidUrl { .. }));
    outcome.assert_warns_about(INVALID_URL);
    token
        .assert_issuer(HOST_ISSUER)
        .assert_only_issuer_changed(&before);
}

/// Scenario 6: config key absent
#[test]
fn test_facade_request_with_unset_config_is_noop() {
    let mut token = TestTokenBuilder::new().build();
    let headers = TestHeadersBuilder::new().from_facade().build();

    let outcome = transform(&headers, &unset_config(), &mut token);

    assert_eq!(outcome, OverrideOutcome::NotConfigured);
    outcome.assert_silent();
    token.assert_issuer(HOST_ISSUER);
}

#[test]
fn test_facade_request_with_blank_config_is_noop() {
    for blank in ["", " ", "\t", "  \n  "] {
        let mut token = TestTokenBuilder::new().build();
        let headers = TestHeadersBuilder::new().from_facade().build();

        let outcome = transform(&headers, &facade_config(blank), &mut token);

        assert_eq!(outcome, OverrideOutcome::NotConfigured);
        token.assert_issuer(HOST_ISSUER);
    }
}

#[test]
fn test_urls_without_authority_are_rejected() {
    for value in ["mailto:ops@example.com", "urn:issuer:facade", "file:///srv/issuer"] {
        let mut token = TestTokenBuilder::new().build();
        let headers = TestHeadersBuilder::new().from_facade().build();

        let outcome = transform(&headers, &facade_config(value), &mut token);

        outcome.assert_warns_about(value);
        token.assert_issuer(HOST_ISSUER);
    }
}

#[test]
fn test_urls_the_parser_would_repair_are_rejected() {
    for value in [
        "https://auth-\nfacade.example.com",
        "https:auth-facade.example.com",
        "https:\\\\auth-facade.example.com",
        "\u{1}https://auth-facade.example.com",
    ] {
        let mut token = TestTokenBuilder::new().build();
        let headers = TestHeadersBuilder::new().from_facade().build();

        let outcome = transform(&headers, &facade_config(value), &mut token);

        outcome.assert_warns_about(value);
        token.assert_issuer(HOST_ISSUER);
    }
}

// ============================================================================
// Host config and token shapes
// ============================================================================

#[test]
fn test_config_loaded_from_host_map() -> Result<(), anyhow::Error> {
    let raw = HashMap::from([
        ("facadeIssuerUrl".to_string(), FACADE_URL.to_string()),
        ("claim.name".to_string(), "ignored".to_string()),
    ]);
    let from_map = MapperConfig::from_config_map(&raw);
    let from_json = MapperConfig::from_json(&serde_json::json!({ "facadeIssuerUrl": FACADE_URL }))?;
    assert_eq!(from_map, from_json);

    let mut token = TestTokenBuilder::new().build();
    let headers = TestHeadersBuilder::new().from_facade().build();
    transform(&headers, &from_map, &mut token);

    token.assert_issuer(FACADE_URL);
    Ok(())
}

#[test]
fn test_raw_json_claims_keep_position_of_iss() {
    let mut claims = TestTokenBuilder::new().build_json();
    let before = claims.clone();
    let headers = TestHeadersBuilder::new().from_facade().build();

    transform(&headers, &facade_config(FACADE_URL), &mut claims);

    claims
        .assert_issuer(FACADE_URL)
        .assert_only_issuer_changed(&before);
}

#[test]
fn test_header_pairs_are_accepted() {
    let headers: &[(&str, &str)] = &[("Host", "idp"), ("X-Auth-Facade-Request", "true")];
    let mut token = TestTokenBuilder::new().build();

    transform(headers, &facade_config(FACADE_URL), &mut token);

    token.assert_issuer(FACADE_URL);
}
