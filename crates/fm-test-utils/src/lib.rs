//! # Facade Mapper Test Utilities
//!
//! Shared test utilities for the facade issuer mapper.
//!
//! This crate provides:
//! - Fixed test constants (issuer URLs, header values)
//! - Test data builders (`TestTokenBuilder`, `TestHeadersBuilder`)
//! - Custom assertions (`IssuerAssertions` trait)
//! - Log capture for asserting on emitted diagnostics (`LogCapture`)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fm_test_utils::*;
//!
//! #[test]
//! fn test_example() {
//!     let mut token = TestTokenBuilder::new().build();
//!     let before = token.clone();
//!     let headers = TestHeadersBuilder::new().from_facade().build();
//!
//!     mapper.transform_access_token(&headers, &mut token);
//!
//!     token.assert_issuer(FACADE_URL)
//!          .assert_only_issuer_changed(&before);
//! }
//! ```

pub mod assertions;
pub mod builders;
pub mod fixtures;
pub mod log_capture;

// Re-export commonly used items
pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
pub use log_capture::*;
