use crate::adapters::{InlineSource, RemoteSource};
use crate::config::Settings;
use crate::core::handler::{default_headers, not_found, JsonHandler};
use crate::domain::model::{ApiRequest, ApiResponse};
use reqwest::{Client, StatusCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// JSON fetched from `DADOS_URL`.
    Remote,
    /// JSON read from `DADOS_JSON`.
    Inline,
}

impl Endpoint {
    /// Matches on the path alone; any query string is ignored.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split_once('?').map_or(path, |(path, _)| path);
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" | "/api/dados" | "/dados" => Some(Endpoint::Remote),
            "/api/dados-env" | "/dados-env" => Some(Endpoint::Inline),
            _ => None,
        }
    }

    pub fn cache_control(self) -> bool {
        matches!(self, Endpoint::Remote)
    }
}

/// Routes one request to its handler. `settings` is the environment
/// snapshot for this request.
pub async fn dispatch(request: &ApiRequest, settings: &Settings, client: &Client) -> ApiResponse {
    // Preflight is answered for every path, known or not
    if request.is_preflight() {
        return ApiResponse::new(StatusCode::OK, default_headers(false));
    }

    let Some(endpoint) = Endpoint::from_path(&request.path) else {
        return not_found(request);
    };
    tracing::debug!("{} {} -> {:?}", request.method, request.path, endpoint);

    match endpoint {
        Endpoint::Remote => {
            JsonHandler::new(RemoteSource::new(client.clone(), settings))
                .with_cache_control(endpoint.cache_control())
                .handle(request)
                .await
        }
        Endpoint::Inline => {
            JsonHandler::new(InlineSource::new(settings))
                .with_cache_control(endpoint.cache_control())
                .handle(request)
                .await
        }
    }
}
