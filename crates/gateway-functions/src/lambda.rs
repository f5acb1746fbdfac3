//! Lambda runtime bindings: one process serves exactly one function.

use gateway_auth_core::{
    authorize_event, handle_event, Authorizer, AuthorizerEvent, AuthorizerResponse,
    FunctionHandler, HandlerResponse,
};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::{info_span, warn};

/// Run the token authorizer until the runtime shuts the process down.
///
/// An unrecognized token is returned to the runtime as an error whose message
/// is `Unauthorized`, which the gateway answers with a 401.
pub async fn run_authorizer<A>(authorizer: A) -> Result<(), Error>
where
    A: Authorizer,
{
    let authorizer = &authorizer;
    lambda_runtime::run(service_fn(
        move |event: LambdaEvent<AuthorizerEvent>| async move {
            invoke_authorizer(authorizer, &event.context.request_id, &event.payload)
        },
    ))
    .await
}

/// Run a proxy-integration function until the runtime shuts the process down.
pub async fn run_function<H>(handler: H) -> Result<(), Error>
where
    H: FunctionHandler,
{
    let handler = &handler;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        Ok::<_, Error>(invoke_function(
            handler,
            &event.context.request_id,
            &event.payload,
        ))
    }))
    .await
}

pub fn invoke_authorizer(
    authorizer: &dyn Authorizer,
    request_id: &str,
    event: &AuthorizerEvent,
) -> Result<AuthorizerResponse, Error> {
    let _span = info_span!(
        "authorizer",
        request_id = %request_id,
        kind = event.kind.as_deref().unwrap_or("-")
    )
    .entered();
    authorize_event(authorizer, event).map_err(|err| {
        warn!("rejecting request: {err}");
        Error::from(err)
    })
}

pub fn invoke_function(
    handler: &dyn FunctionHandler,
    request_id: &str,
    event: &Value,
) -> HandlerResponse {
    let _span = info_span!("function", request_id = %request_id).entered();
    handle_event(handler, event)
}
