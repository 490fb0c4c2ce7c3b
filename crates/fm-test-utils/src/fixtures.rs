//! Fixed values for reproducible tests

/// Issuer the host puts in tokens before any mapper runs.
pub const HOST_ISSUER: &str = "https://keycloak.internal/realms/main";

/// Facade URL used as the configured override.
pub const FACADE_URL: &str = "https://auth-facade.example.com";

/// Facade URL with surrounding whitespace, as pasted into an admin form.
pub const PADDED_FACADE_URL: &str = "  https://auth-facade.example.com  ";

/// A configured value that is not a URL.
pub const INVALID_URL: &str = "not-a-url";

/// Subject used for test tokens.
pub const TEST_SUBJECT: &str = "7f3c2b8e-user";

/// Header values that must not mark a request as facade-originated.
pub const NON_FACADE_VALUES: &[&str] = &["false", "True", "TRUE", "1", "yes", "", " true", "true "];
