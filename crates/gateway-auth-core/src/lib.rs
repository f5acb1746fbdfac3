//! Handlers for a small gateway-fronted function set: a public greeting, a
//! token authorizer, and a protected endpoint the gateway only reaches after
//! the authorizer allowed the call.
//!
//! The crate does no I/O. A host (Lambda runtime, local gateway emulator)
//! deserializes events into the [`protocol`] types and calls the generic
//! entry points in [`handlers`].

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod protocol;
pub mod traits;

pub use auth::TokenAuthorizer;
pub use config::HandlerConfig;
pub use error::{Error, Result, UnauthorizedError};
pub use handlers::{authorize_event, handle_event, PublicHandler, SecureHandler};
pub use protocol::{
    AuthorizerEvent, AuthorizerResponse, Effect, HandlerResponse, PolicyDecision,
};
pub use traits::{Authorizer, FunctionHandler};
