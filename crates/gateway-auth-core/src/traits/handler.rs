use crate::protocol::HandlerResponse;
use serde_json::Value;

/// A proxy-integration function: any event in, a status and body out.
///
/// Implementations are total. Anything that can fail happens at construction.
pub trait FunctionHandler: Send + Sync {
    fn handle(&self, event: &Value) -> HandlerResponse;
}
