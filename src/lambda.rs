#[cfg(feature = "lambda")]
use dados_proxy::config::lambda::{GatewayRequest, GatewayResponse};
#[cfg(feature = "lambda")]
use dados_proxy::utils::logger;
#[cfg(feature = "lambda")]
use dados_proxy::{dispatch, Settings};
#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use reqwest::Client;

#[cfg(feature = "lambda")]
async fn function_handler(
    client: &Client,
    event: LambdaEvent<GatewayRequest>,
) -> Result<GatewayResponse, Error> {
    let request = event.payload.to_api_request();
    tracing::info!(
        request_id = %event.context.request_id,
        "{} {}",
        request.method,
        request.path
    );

    // Environment is re-read on every invocation
    let settings = Settings::from_env();
    let response = dispatch(&request, &settings, client).await;

    tracing::info!("Responding with {}", response.status);
    Ok(GatewayResponse::from(response))
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let client = Client::new();
    let client = &client;

    run(service_fn(move |event: LambdaEvent<GatewayRequest>| async move {
        function_handler(client, event).await
    }))
    .await
}
