use crate::error::UnauthorizedError;
use crate::protocol::{Effect, PolicyDecision};
use crate::traits::Authorizer;
use tracing::{debug, warn};

/// Principal attached to every decision. There is no identity lookup.
pub const PRINCIPAL_ID: &str = "user";

pub const ALLOW_TOKEN: &str = "allow";
pub const DENY_TOKEN: &str = "deny";

/// Exact, case-sensitive match on two fixed tokens.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokenAuthorizer;

impl TokenAuthorizer {
    pub fn new() -> Self {
        Self
    }
}

impl Authorizer for TokenAuthorizer {
    fn authorize(
        &self,
        token: Option<&str>,
        method_arn: &str,
    ) -> Result<PolicyDecision, UnauthorizedError> {
        let effect = match token {
            Some(ALLOW_TOKEN) => Effect::Allow,
            Some(DENY_TOKEN) => Effect::Deny,
            other => {
                warn!(
                    token_present = other.is_some(),
                    token_len = other.map_or(0, str::len),
                    resource = %method_arn,
                    "unrecognized authorization token"
                );
                return Err(UnauthorizedError);
            }
        };

        let decision = PolicyDecision::new(PRINCIPAL_ID, effect, method_arn);
        debug!(
            principal_id = %decision.principal_id,
            effect = %decision.effect,
            resource = %decision.resource,
            "policy decision"
        );
        Ok(decision)
    }
}
