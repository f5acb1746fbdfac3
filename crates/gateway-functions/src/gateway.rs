//! Local stand-in for the managed API gateway.
//!
//! Wires the three functions together the way the deployed gateway does:
//! public routes go straight to the greeting, `/auth-get` runs the authorizer
//! first and only reaches the secure handler on an allow policy.

use std::future::Future;
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use gateway_auth_core::protocol::INVOKE_ACTION;
use gateway_auth_core::{
    authorize_event, handle_event, Authorizer, AuthorizerEvent, AuthorizerResponse, Effect,
    FunctionHandler, HandlerConfig, HandlerResponse, PublicHandler, SecureHandler,
    TokenAuthorizer,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tracing::{debug, info};

pub const AUTH_GET_PATH: &str = "/auth-get";

const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";
const EXPLICIT_DENY_MESSAGE: &str =
    "User is not authorized to access this resource with an explicit deny";
const MISSING_ROUTE_MESSAGE: &str = "Missing Authentication Token";

#[derive(Clone)]
pub struct GatewayState {
    authorizer: Arc<dyn Authorizer>,
    public: Arc<dyn FunctionHandler>,
    secure: Arc<dyn FunctionHandler>,
    stage: String,
}

impl GatewayState {
    pub fn new(config: &HandlerConfig, stage: impl Into<String>) -> gateway_auth_core::Result<Self> {
        Ok(Self {
            authorizer: Arc::new(TokenAuthorizer::new()),
            public: Arc::new(PublicHandler::new(config)?),
            secure: Arc::new(SecureHandler::new(config)?),
            stage: stage.into(),
        })
    }

    pub fn with_authorizer(mut self, authorizer: Arc<dyn Authorizer>) -> Self {
        self.authorizer = authorizer;
        self
    }

    /// ARN the gateway presents to the authorizer for a route on this stage.
    pub fn method_arn(&self, method: &str, path: &str) -> String {
        format!(
            "arn:aws:execute-api:local:000000000000:gateway/{}/{}/{}",
            self.stage,
            method,
            path.trim_start_matches('/')
        )
    }
}

pub fn router(state: GatewayState) -> Router {
    Router::new()
        .route("/", get(public_route))
        .route("/public-get", get(public_route))
        .route(AUTH_GET_PATH, get(secure_route))
        .fallback(missing_route)
        .method_not_allowed_fallback(missing_route)
        .with_state(state)
}

/// Serve the emulator on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: GatewayState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, stage = %state.stage, "local gateway listening");
    }
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}

async fn public_route(State(state): State<GatewayState>, request: Request) -> Response {
    let event = proxy_event(&request);
    proxy_response(handle_event(state.public.as_ref(), &event))
}

async fn secure_route(State(state): State<GatewayState>, request: Request) -> Response {
    let method_arn = state.method_arn(request.method().as_str(), AUTH_GET_PATH);
    let event = AuthorizerEvent {
        kind: Some("TOKEN".to_string()),
        authorization_token: authorization_token(request.headers()),
        method_arn: Some(method_arn.clone()),
    };

    let policy = match authorize_event(state.authorizer.as_ref(), &event) {
        Ok(policy) => policy,
        Err(err) => {
            debug!(%method_arn, "authorizer rejected request: {err}");
            return message_response(StatusCode::UNAUTHORIZED, UNAUTHORIZED_MESSAGE);
        }
    };

    if !grants(&policy, &method_arn) {
        debug!(%method_arn, principal_id = %policy.principal_id, "policy does not allow invoke");
        return message_response(StatusCode::FORBIDDEN, EXPLICIT_DENY_MESSAGE);
    }

    let event = proxy_event(&request);
    proxy_response(handle_event(state.secure.as_ref(), &event))
}

async fn missing_route() -> Response {
    message_response(StatusCode::FORBIDDEN, MISSING_ROUTE_MESSAGE)
}

fn authorization_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// Whether `policy` lets the caller invoke `method_arn`.
///
/// A matching deny statement wins over any allow.
pub fn grants(policy: &AuthorizerResponse, method_arn: &str) -> bool {
    let mut allowed = false;
    for statement in &policy.policy_document.statement {
        let action_matches = statement.action == INVOKE_ACTION || statement.action == "*";
        let resource_matches = statement.resource == method_arn || statement.resource == "*";
        if !(action_matches && resource_matches) {
            continue;
        }
        match statement.effect {
            Effect::Deny => return false,
            Effect::Allow => allowed = true,
        }
    }
    allowed
}

fn proxy_event(request: &Request) -> Value {
    let headers: serde_json::Map<String, Value> = request
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), Value::String(v.to_string())))
        })
        .collect();

    json!({
        "httpMethod": request.method().as_str(),
        "path": request.uri().path(),
        "queryString": request.uri().query(),
        "headers": headers,
    })
}

fn proxy_response(response: HandlerResponse) -> Response {
    let status = StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::BAD_GATEWAY);
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        response.body,
    )
        .into_response()
}

fn message_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gateway_auth_core::PolicyDecision;
    use gateway_auth_core::protocol::{PolicyDocument, Statement};

    const ARN: &str = "arn:aws:execute-api:local:000000000000:gateway/local/GET/auth-get";

    fn statement(effect: Effect, resource: &str) -> Statement {
        Statement {
            action: INVOKE_ACTION.to_string(),
            effect,
            resource: resource.to_string(),
        }
    }

    fn policy(statement: Vec<Statement>) -> AuthorizerResponse {
        AuthorizerResponse {
            principal_id: "user".to_string(),
            policy_document: PolicyDocument {
                version: "2012-10-17".to_string(),
                statement,
            },
        }
    }

    #[test]
    fn test_allow_for_same_resource() {
        let policy = PolicyDecision::new("user", Effect::Allow, ARN).to_response();
        assert!(grants(&policy, ARN));
    }

    #[test]
    fn test_allow_for_other_resource_does_not_grant() {
        let policy = PolicyDecision::new("user", Effect::Allow, "arn:other").to_response();
        assert!(!grants(&policy, ARN));
    }

    #[test]
    fn test_explicit_deny_wins() {
        let policy = policy(vec![statement(Effect::Allow, "*"), statement(Effect::Deny, ARN)]);
        assert!(!grants(&policy, ARN));
    }

    #[test]
    fn test_empty_policy_does_not_grant() {
        assert!(!grants(&policy(vec![]), ARN));
    }

    #[test]
    fn test_method_arn_uses_stage() {
        let state = GatewayState::new(&HandlerConfig::default(), "dev").unwrap();
        assert_eq!(
            state.method_arn("GET", AUTH_GET_PATH),
            "arn:aws:execute-api:local:000000000000:gateway/dev/GET/auth-get"
        );
    }
}
