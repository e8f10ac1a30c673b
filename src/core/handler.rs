use crate::domain::model::{ApiRequest, ApiResponse, ErrorBody};
use crate::domain::ports::DataSource;
use reqwest::header::{
    HeaderMap, HeaderValue, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CACHE_CONTROL, CONTENT_TYPE,
};
use reqwest::StatusCode;

pub const CACHE_CONTROL_VALUE: &str = "s-maxage=3600, stale-while-revalidate";

/// CORS and content headers attached to every response.
pub fn default_headers(cache_control: bool) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static("GET"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if cache_control {
        headers.insert(CACHE_CONTROL, HeaderValue::from_static(CACHE_CONTROL_VALUE));
    }
    headers
}

/// Re-serves the JSON document of a [`DataSource`] with CORS headers.
pub struct JsonHandler<S: DataSource> {
    source: S,
    cache_control: bool,
}

impl<S: DataSource> JsonHandler<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache_control: false,
        }
    }

    pub fn with_cache_control(mut self, enabled: bool) -> Self {
        self.cache_control = enabled;
        self
    }

    pub async fn handle(&self, request: &ApiRequest) -> ApiResponse {
        let mut response = ApiResponse::new(StatusCode::OK, default_headers(self.cache_control));

        // CORS preflight
        if request.is_preflight() {
            return response;
        }

        match self.source.load().await {
            Ok(payload) => {
                tracing::info!("✅ Dados carregados com sucesso");
                response.body = Some(payload.get().to_string());
            }
            Err(e) => {
                tracing::error!(
                    "Erro ao processar dados: {} (Category: {:?})",
                    e,
                    e.category()
                );
                response.status = e.status_code();
                response.body = Some(e.to_body().to_json());
            }
        }

        response
    }
}

pub fn not_found(request: &ApiRequest) -> ApiResponse {
    tracing::warn!("Rota não encontrada: {} {}", request.method, request.path);

    let mut response = ApiResponse::new(StatusCode::NOT_FOUND, default_headers(false));
    response.body = Some(
        ErrorBody::new(
            "Rota não encontrada",
            format!("Nenhum endpoint em {}", request.path),
        )
        .to_json(),
    );
    response
}
