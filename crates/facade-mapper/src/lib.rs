//! Facade Issuer Mapper
//!
//! A protocol mapper that rewrites the issuer claim of tokens whose request
//! arrived through an authentication facade, so relying parties see the
//! facade as the identity provider.
//!
//! # Modules
//!
//! - `adapters` - Per-token-type entry points used by the host
//! - `config` - Mapper instance configuration
//! - `errors` - Error types
//! - `mapper` - The issuer override decision
//! - `observability` - Diagnostic events and metrics
//! - `provider` - Provider metadata for host registration

pub mod adapters;
pub mod config;
pub mod errors;
pub mod mapper;
pub mod observability;
pub mod provider;

pub use adapters::TokenMapper;
pub use config::MapperConfig;
pub use mapper::{FacadeIssuerMapper, OverrideOutcome};
pub use provider::ProtocolMapperProvider;
