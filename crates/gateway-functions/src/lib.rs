pub mod gateway;
pub mod lambda;

pub use gateway::{router, GatewayState};
