pub mod authorizer;
pub mod handler;

pub use authorizer::Authorizer;
pub use handler::FunctionHandler;
