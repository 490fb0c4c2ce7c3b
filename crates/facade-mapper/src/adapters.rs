//! Per-token-type entry points.
//!
//! The host calls a mapper once per token type it is registered for. Each
//! entry point here is a thin adapter over the single decision in
//! [`crate::mapper`], differing only in the token type it reports.

use crate::mapper::{transform_for, FacadeIssuerMapper, OverrideOutcome};
use common::claims::{IssuerClaim, TokenType};
use common::headers::RequestHeaders;

/// A protocol mapper the host can apply to access tokens, ID tokens, and
/// userinfo responses.
pub trait TokenMapper: Send + Sync {
    /// Token types this mapper handles.
    fn supported_token_types(&self) -> &'static [TokenType];

    /// Transform a token of the given type in place.
    fn transform_token(
        &self,
        token_type: TokenType,
        headers: &dyn RequestHeaders,
        token: &mut dyn IssuerClaim,
    ) -> OverrideOutcome;

    fn transform_access_token(
        &self,
        headers: &dyn RequestHeaders,
        token: &mut dyn IssuerClaim,
    ) -> OverrideOutcome {
        self.transform_token(TokenType::Access, headers, token)
    }

    fn transform_id_token(
        &self,
        headers: &dyn RequestHeaders,
        token: &mut dyn IssuerClaim,
    ) -> OverrideOutcome {
        self.transform_token(TokenType::Id, headers, token)
    }

    fn transform_user_info(
        &self,
        headers: &dyn RequestHeaders,
        token: &mut dyn IssuerClaim,
    ) -> OverrideOutcome {
        self.transform_token(TokenType::UserInfo, headers, token)
    }
}

impl TokenMapper for FacadeIssuerMapper {
    fn supported_token_types(&self) -> &'static [TokenType] {
        &TokenType::ALL
    }

    fn transform_token(
        &self,
        token_type: TokenType,
        headers: &dyn RequestHeaders,
        token: &mut dyn IssuerClaim,
    ) -> OverrideOutcome {
        transform_for(Some(token_type), headers, self.config(), token)
    }
}
