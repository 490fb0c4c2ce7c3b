//! Host-boundary types shared by the facade mapper and its test utilities.

#![warn(clippy::pedantic)]

/// Module for token claim types and the issuer-claim abstraction
pub mod claims;

/// Module for request header lookup
pub mod headers;
