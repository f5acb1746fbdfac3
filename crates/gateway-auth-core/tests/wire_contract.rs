// Wire-level checks against the shapes the gateway and existing clients rely on.

use gateway_auth_core::{
    authorize_event, handle_event, AuthorizerEvent, HandlerConfig, PublicHandler, SecureHandler,
    TokenAuthorizer, UnauthorizedError,
};
use serde_json::{json, Value};

fn authorize_json(event: Value) -> Result<Value, UnauthorizedError> {
    let event: AuthorizerEvent = serde_json::from_value(event).unwrap();
    authorize_event(&TokenAuthorizer, &event).map(|r| serde_json::to_value(r).unwrap())
}

#[test]
fn test_allow_scenario() {
    let response = authorize_json(json!({
        "type": "TOKEN",
        "authorizationToken": "allow",
        "methodArn": "arn:exec:123",
    }))
    .unwrap();

    assert_eq!(
        response,
        json!({
            "principalId": "user",
            "policyDocument": {
                "Version": "2012-10-17",
                "Statement": [
                    { "Action": "execute-api:Invoke", "Effect": "Allow", "Resource": "arn:exec:123" }
                ]
            }
        })
    );
}

#[test]
fn test_deny_scenario() {
    let response = authorize_json(json!({
        "authorizationToken": "deny",
        "methodArn": "arn:exec:123",
    }))
    .unwrap();

    assert_eq!(
        response,
        json!({
            "principalId": "user",
            "policyDocument": {
                "Version": "2012-10-17",
                "Statement": [
                    { "Action": "execute-api:Invoke", "Effect": "Deny", "Resource": "arn:exec:123" }
                ]
            }
        })
    );
}

#[test]
fn test_unauthorized_scenarios() {
    let events = [
        json!({ "authorizationToken": "bogus", "methodArn": "arn:exec:123" }),
        json!({ "authorizationToken": "", "methodArn": "arn:exec:123" }),
        json!({ "authorizationToken": null, "methodArn": "arn:exec:123" }),
        json!({ "authorizationToken": "Allow", "methodArn": "arn:exec:123" }),
        json!({ "methodArn": "arn:exec:123" }),
    ];
    for event in events {
        let err = authorize_json(event.clone()).unwrap_err();
        assert_eq!(err.to_string(), "Unauthorized", "event: {event}");
    }
}

#[test]
fn test_non_string_tokens_are_unauthorized() {
    for token in [json!(5), json!(true), json!({ "value": "allow" }), json!(["allow"])] {
        let err = authorize_json(json!({
            "authorizationToken": token.clone(),
            "methodArn": "arn:exec:123",
        }))
        .unwrap_err();
        assert_eq!(err, UnauthorizedError, "token: {token}");
    }
}

#[test]
fn test_non_string_method_arn_is_echoed_as_text() {
    let response = authorize_json(json!({ "authorizationToken": "allow", "methodArn": 123 })).unwrap();
    assert_eq!(response["policyDocument"]["Statement"][0]["Resource"], json!("123"));
}

#[test]
fn test_missing_method_arn_yields_empty_resource() {
    for event in [
        json!({ "authorizationToken": "allow" }),
        json!({ "authorizationToken": "allow", "methodArn": null }),
    ] {
        let response = authorize_json(event).unwrap();
        assert_eq!(
            response,
            json!({
                "principalId": "user",
                "policyDocument": {
                    "Version": "2012-10-17",
                    "Statement": [
                        { "Action": "execute-api:Invoke", "Effect": "Allow", "Resource": "" }
                    ]
                }
            })
        );
    }
}

#[test]
fn test_handler_responses_serialize_for_the_gateway() {
    let config = HandlerConfig::default();
    let public = PublicHandler::new(&config).unwrap();
    let secure = SecureHandler::new(&config).unwrap();

    assert_eq!(
        serde_json::to_string(&handle_event(&public, &json!({}))).unwrap(),
        r#"{"statusCode":200,"body":"{\"message\": \"Hello from Lambda!\"}"}"#
    );
    assert_eq!(
        serde_json::to_value(handle_event(&secure, &json!({}))).unwrap(),
        json!({
            "statusCode": 200,
            "body": "{\"message\": \"Access granted to the /auth-get endpoint with authorization token!\"}"
        })
    );
}
