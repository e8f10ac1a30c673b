use clap::Parser;
use dados_proxy::utils::{logger, validation::Validate};
use dados_proxy::{dispatch, ApiRequest, CliConfig};
use reqwest::Client;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting dados-proxy CLI");

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let settings = config.settings()?;
    if config.verbose {
        tracing::debug!("Settings: {:?}", settings);
    }
    if let Err(e) = settings.validate() {
        // Still dispatched: the handler reports config problems in the response
        tracing::warn!("⚠️ {}", e);
    }

    let request = ApiRequest::new(config.method(), config.path.clone());
    let response = dispatch(&request, &settings, &Client::new()).await;

    eprintln!("HTTP {}", response.status);
    for (name, value) in &response.headers {
        eprintln!("{}: {}", name, value.to_str().unwrap_or("<binary>"));
    }

    if let Some(body) = &response.body {
        if config.pretty {
            let value: serde_json::Value = serde_json::from_str(body)?;
            println!("{}", serde_json::to_string_pretty(&value)?);
        } else {
            println!("{}", body);
        }
    }

    if !response.status.is_success() {
        std::process::exit(1);
    }

    Ok(())
}
