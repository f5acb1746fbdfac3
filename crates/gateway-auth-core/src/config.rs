/// Message returned by the unauthenticated endpoints.
pub const DEFAULT_PUBLIC_MESSAGE: &str = "Hello from Lambda!";

/// Message returned by the protected endpoint once the authorizer allowed the call.
pub const DEFAULT_SECURE_MESSAGE: &str =
    "Access granted to the /auth-get endpoint with authorization token!";

/// Environment keys read by the function host.
pub struct ConfigKeys;

impl ConfigKeys {
    pub const PUBLIC_MESSAGE: &'static str = "PUBLIC_MESSAGE";
    pub const SECURE_MESSAGE: &'static str = "SECURE_MESSAGE";
    pub const FUNCTION: &'static str = "GATEWAY_FUNCTION";
    pub const BIND: &'static str = "GATEWAY_BIND";
    pub const STAGE: &'static str = "GATEWAY_STAGE";
}

/// Text served by the public and secure handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerConfig {
    pub public_message: String,
    pub secure_message: String,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            public_message: DEFAULT_PUBLIC_MESSAGE.to_string(),
            secure_message: DEFAULT_SECURE_MESSAGE.to_string(),
        }
    }
}

impl HandlerConfig {
    pub fn with_public_message(mut self, message: impl Into<String>) -> Self {
        self.public_message = message.into();
        self
    }

    pub fn with_secure_message(mut self, message: impl Into<String>) -> Self {
        self.secure_message = message.into();
        self
    }
}
