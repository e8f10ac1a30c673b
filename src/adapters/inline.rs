use crate::config::Settings;
use crate::domain::ports::DataSource;
use crate::utils::error::{ProxyError, Result};
use async_trait::async_trait;
use serde_json::value::RawValue;

/// Serves the document stored in `DADOS_JSON`.
#[derive(Debug, Clone, Default)]
pub struct InlineSource {
    json: Option<String>,
}

impl InlineSource {
    pub fn new(settings: &Settings) -> Self {
        Self {
            json: settings.dados_json.clone(),
        }
    }
}

#[async_trait]
impl DataSource for InlineSource {
    async fn load(&self) -> Result<Box<RawValue>> {
        let json = self.json.as_deref().ok_or_else(|| {
            tracing::error!("DADOS_JSON não configurado");
            ProxyError::MissingInlineData
        })?;

        let payload: Box<RawValue> = serde_json::from_str(json)?;
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(json: Option<&str>) -> InlineSource {
        InlineSource {
            json: json.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_returns_text_verbatim() {
        let raw = r#"{"b":1,"a":[1, 2,  3]}"#;
        let payload = source(Some(raw)).load().await.unwrap();
        assert_eq!(payload.get(), raw);
    }

    #[tokio::test]
    async fn test_missing_data() {
        let err = source(None).load().await.unwrap_err();
        assert!(matches!(err, ProxyError::MissingInlineData));
    }

    #[tokio::test]
    async fn test_malformed_json() {
        let err = source(Some("{\"total\": ")).load().await.unwrap_err();
        assert!(matches!(err, ProxyError::ParseError(_)));
        assert!(err.to_string().contains("EOF"));
    }
}
