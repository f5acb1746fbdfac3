pub mod encoding;
pub mod types;

pub use encoding::{to_body_string, SpacedFormatter};
pub use types::{
    AuthorizerEvent, AuthorizerResponse, Effect, HandlerResponse, MessageBody, PolicyDecision,
    PolicyDocument, Statement, INVOKE_ACTION, POLICY_VERSION,
};
