use crate::adapters::gateway::{GatewayHandler, GatewayRequest, GatewayResponse};
use crate::core::CountProvider;
use crate::utils::error::{GoodCountError, Result};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

/// Registers the handler with the Lambda runtime and serves until the host stops us.
pub async fn serve<P: CountProvider>(handler: GatewayHandler<P>) -> Result<()> {
    tracing::info!("Starting good-count Lambda function");

    let handler = &handler;
    run(service_fn(move |event: LambdaEvent<GatewayRequest>| async move {
        tracing::debug!(request_id = %event.context.request_id, "handling invocation");
        Ok::<GatewayResponse, Error>(handler.handle(event.payload).await)
    }))
    .await
    .map_err(|e| GoodCountError::RuntimeError {
        message: e.to_string(),
    })
}
