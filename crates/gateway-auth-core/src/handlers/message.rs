use crate::config::HandlerConfig;
use crate::error::Result;
use crate::protocol::{to_body_string, HandlerResponse, MessageBody};
use crate::traits::FunctionHandler;
use serde_json::Value;
use tracing::debug;

const STATUS_OK: u16 = 200;

/// A handler whose output never depends on its input.
///
/// The body is encoded once up front, which is the only step that can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
struct StaticMessage {
    body: String,
}

impl StaticMessage {
    fn new(message: &str) -> Result<Self> {
        Ok(Self {
            body: to_body_string(&MessageBody::new(message))?,
        })
    }

    fn respond(&self) -> HandlerResponse {
        HandlerResponse {
            status_code: STATUS_OK,
            body: self.body.clone(),
        }
    }
}

/// Greeting served on `/` and `/public-get` without authorization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicHandler(StaticMessage);

impl PublicHandler {
    pub fn new(config: &HandlerConfig) -> Result<Self> {
        StaticMessage::new(&config.public_message).map(Self)
    }
}

impl FunctionHandler for PublicHandler {
    fn handle(&self, _event: &Value) -> HandlerResponse {
        self.0.respond()
    }
}

/// Served on `/auth-get`. Performs no checks of its own: the gateway only
/// invokes it after the authorizer returned an allow policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecureHandler(StaticMessage);

impl SecureHandler {
    pub fn new(config: &HandlerConfig) -> Result<Self> {
        StaticMessage::new(&config.secure_message).map(Self)
    }
}

impl FunctionHandler for SecureHandler {
    fn handle(&self, _event: &Value) -> HandlerResponse {
        self.0.respond()
    }
}

/// Generic entry point for a proxy-integration invocation.
pub fn handle_event(provider: &dyn FunctionHandler, event: &Value) -> HandlerResponse {
    let response = provider.handle(event);
    debug!(status_code = response.status_code, "handled event");
    response
}
