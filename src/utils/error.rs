use crate::domain::model::ErrorBody;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("DADOS_URL não configurado nas variáveis de ambiente")]
    MissingDataUrl,

    #[error("DADOS_JSON não configurado nas variáveis de ambiente")]
    MissingInlineData,

    #[error("Verifique se GITHUB_TOKEN está configurado corretamente")]
    UpstreamAuthError { status: u16 },

    #[error("GitHub retornou status {status}")]
    UpstreamStatusError { status: u16 },

    /// Carries no request URL, see the `From` impl below.
    #[error("{0}")]
    HttpError(#[source] reqwest::Error),

    #[error("{0}")]
    ParseError(#[from] serde_json::Error),

    #[error("{0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// The three ways a request can fail, as reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Upstream,
    Processing,
}

impl ProxyError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ProxyError::MissingDataUrl | ProxyError::MissingInlineData => {
                ErrorCategory::Configuration
            }
            ProxyError::UpstreamAuthError { .. } | ProxyError::UpstreamStatusError { .. } => {
                ErrorCategory::Upstream
            }
            ProxyError::HttpError(_)
            | ProxyError::ParseError(_)
            | ProxyError::IoError(_)
            | ProxyError::InvalidConfigValueError { .. } => ErrorCategory::Processing,
        }
    }

    /// Short title placed in the `error` field of the response body.
    pub fn title(&self) -> &'static str {
        match self {
            ProxyError::MissingDataUrl => "Configuração incompleta",
            ProxyError::MissingInlineData => "Dados não disponíveis",
            ProxyError::UpstreamAuthError { .. } => "Erro de autenticação",
            ProxyError::UpstreamStatusError { .. } => "Erro ao buscar dados",
            _ => "Erro ao carregar dados",
        }
    }

    /// Every failure is surfaced to the caller as a 500.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    pub fn to_body(&self) -> ErrorBody {
        ErrorBody::new(self.title(), self.to_string())
    }
}

// The upstream URL may carry credentials, keep it out of response bodies
impl From<reqwest::Error> for ProxyError {
    fn from(error: reqwest::Error) -> Self {
        ProxyError::HttpError(error.without_url())
    }
}

pub type Result<T> = std::result::Result<T, ProxyError>;
