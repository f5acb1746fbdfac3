use crate::error::UnauthorizedError;
use crate::protocol::{AuthorizerEvent, AuthorizerResponse};
use crate::traits::Authorizer;

/// Generic entry point for a token-authorizer invocation.
///
/// Pulls the token and method ARN out of the gateway event, delegates to the
/// provider and renders the policy document. A missing `methodArn` is passed
/// on as an empty resource, which the gateway will never match.
pub fn authorize_event(
    provider: &dyn Authorizer,
    event: &AuthorizerEvent,
) -> Result<AuthorizerResponse, UnauthorizedError> {
    let method_arn = event.method_arn.as_deref().unwrap_or_default();
    let decision = provider.authorize(event.authorization_token.as_deref(), method_arn)?;
    Ok(decision.to_response())
}
