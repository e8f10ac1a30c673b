use crate::config::{Settings, DADOS_URL};
use crate::domain::ports::DataSource;
use crate::utils::error::{ProxyError, Result};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde_json::value::RawValue;
use std::time::Duration;

pub const USER_AGENT_VALUE: &str = "Vercel-Dashboard-PMMe";

/// Fetches the document from `DADOS_URL`, authenticating with
/// `GITHUB_TOKEN` when one is configured (private repositories).
#[derive(Debug, Clone)]
pub struct RemoteSource {
    client: Client,
    url: Option<String>,
    token: Option<String>,
    timeout: Duration,
}

impl RemoteSource {
    pub fn new(client: Client, settings: &Settings) -> Self {
        Self {
            client,
            url: settings.dados_url.clone(),
            token: settings.github_token.clone(),
            timeout: settings.timeout(),
        }
    }

    fn request_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        if let Some(token) = &self.token {
            let mut value = HeaderValue::from_str(&format!("token {}", token)).map_err(|_| {
                ProxyError::InvalidConfigValueError {
                    field: "GITHUB_TOKEN".to_string(),
                    value: "***".to_string(),
                    reason: "Token contains characters not allowed in a header".to_string(),
                }
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }
}

#[async_trait]
impl DataSource for RemoteSource {
    async fn load(&self) -> Result<Box<RawValue>> {
        let url = self.url.as_deref().ok_or_else(|| {
            tracing::error!("DADOS_URL não configurado");
            ProxyError::MissingDataUrl
        })?;
        validate_url(DADOS_URL, url)?;

        tracing::info!("Buscando dados de: {}", url);
        let response = self
            .client
            .get(url)
            .headers(self.request_headers()?)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(
                "Erro ao buscar dados: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("")
            );

            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    ProxyError::UpstreamAuthError {
                        status: status.as_u16(),
                    }
                }
                _ => ProxyError::UpstreamStatusError {
                    status: status.as_u16(),
                },
            });
        }

        let text = response.text().await?;
        tracing::debug!("Upstream body: {} bytes", text.len());

        let payload: Box<RawValue> = serde_json::from_str(&text)?;
        Ok(payload)
    }
}
