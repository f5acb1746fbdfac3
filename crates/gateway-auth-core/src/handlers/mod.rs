pub mod authorizer;
pub mod message;

pub use authorizer::authorize_event;
pub use message::{handle_event, PublicHandler, SecureHandler};
