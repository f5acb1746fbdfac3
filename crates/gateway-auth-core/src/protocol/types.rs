use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// IAM policy language version the gateway expects in every policy document.
pub const POLICY_VERSION: &str = "2012-10-17";

/// The only action a gateway authorizer grants or refuses.
pub const INVOKE_ACTION: &str = "execute-api:Invoke";

/// Event delivered to a token authorizer.
///
/// The gateway also sends `type` (always `TOKEN` for this kind of authorizer);
/// it is logged with the invocation but plays no part in the decision.
///
/// Fields are read leniently: a token that is not a JSON string is treated as
/// absent so it ends in `Unauthorized` rather than a deserialization failure,
/// and a non-string `methodArn` is kept as its JSON text.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizerEvent {
    #[serde(
        rename = "type",
        default,
        deserialize_with = "string_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<String>,
    #[serde(
        default,
        deserialize_with = "string_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub authorization_token: Option<String>,
    #[serde(
        default,
        deserialize_with = "string_or_json_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub method_arn: Option<String>,
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

fn string_or_json_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

impl AuthorizerEvent {
    pub fn new(token: impl Into<String>, method_arn: impl Into<String>) -> Self {
        Self {
            kind: Some("TOKEN".to_string()),
            authorization_token: Some(token.into()),
            method_arn: Some(method_arn.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Effect {
    Allow,
    Deny,
}

impl Effect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Effect::Allow => "Allow",
            Effect::Deny => "Deny",
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Allow/deny verdict for one principal on one resource.
///
/// `resource` always echoes the `methodArn` of the triggering event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyDecision {
    pub principal_id: String,
    pub effect: Effect,
    pub resource: String,
}

impl PolicyDecision {
    pub fn new(principal_id: impl Into<String>, effect: Effect, resource: impl Into<String>) -> Self {
        Self {
            principal_id: principal_id.into(),
            effect,
            resource: resource.into(),
        }
    }

    pub fn is_allowed(&self) -> bool {
        self.effect == Effect::Allow
    }

    /// Render the decision in the shape the gateway consumes.
    pub fn to_response(&self) -> AuthorizerResponse {
        AuthorizerResponse {
            principal_id: self.principal_id.clone(),
            policy_document: PolicyDocument {
                version: POLICY_VERSION.to_string(),
                statement: vec![Statement {
                    action: INVOKE_ACTION.to_string(),
                    effect: self.effect,
                    resource: self.resource.clone(),
                }],
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizerResponse {
    pub principal_id: String,
    pub policy_document: PolicyDocument,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyDocument {
    pub version: String,
    pub statement: Vec<Statement>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Statement {
    pub action: String,
    pub effect: Effect,
    pub resource: String,
}

/// Proxy-integration response returned by the public and secure handlers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResponse {
    pub status_code: u16,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
