pub mod token;

pub use token::{TokenAuthorizer, ALLOW_TOKEN, DENY_TOKEN, PRINCIPAL_ID};
