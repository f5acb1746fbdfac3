use crate::error::UnauthorizedError;
use crate::protocol::PolicyDecision;

/// Contract for a gateway token authorizer.
///
/// An explicit deny is a successful decision; only a token the authorizer
/// cannot interpret is an error. The gateway turns the former into a 403 and
/// the latter into a 401, so implementations must keep the two apart.
pub trait Authorizer: Send + Sync {
    fn authorize(
        &self,
        token: Option<&str>,
        method_arn: &str,
    ) -> Result<PolicyDecision, UnauthorizedError>;
}
