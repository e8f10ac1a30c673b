use crate::config::{timeout_in_range, Settings, DEFAULT_TIMEOUT_SECONDS};
use crate::utils::error::{ProxyError, Result};
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use reqwest::Method;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "dados-proxy")]
#[command(about = "Serve the dashboard JSON locally, exactly as the serverless endpoints would")]
pub struct CliConfig {
    #[arg(
        long,
        default_value = "/api/dados",
        help = "Endpoint path (/api/dados or /api/dados-env)"
    )]
    pub path: String,

    #[arg(long, default_value = "GET")]
    pub method: String,

    #[arg(long, env = "DADOS_URL")]
    pub dados_url: Option<String>,

    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    #[arg(long, env = "DADOS_JSON", hide_env_values = true)]
    pub dados_json: Option<String>,

    #[arg(long, help = "Read the DADOS_JSON document from a file (takes precedence)")]
    pub dados_json_file: Option<PathBuf>,

    #[arg(long, env = "DADOS_TIMEOUT_SECONDS", default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Pretty-print the response body")]
    pub pretty: bool,
}

impl CliConfig {
    pub fn method(&self) -> Method {
        Method::from_bytes(self.method.to_ascii_uppercase().as_bytes()).unwrap_or(Method::GET)
    }

    /// Builds the settings the handlers see, reading `--dados-json-file`
    /// when given.
    pub fn settings(&self) -> Result<Settings> {
        let dados_json = match &self.dados_json_file {
            Some(file) => Some(std::fs::read_to_string(file)?),
            None => self.dados_json.clone(),
        };

        let non_empty = |value: Option<String>| value.filter(|v| !v.is_empty());
        Ok(Settings {
            dados_url: non_empty(self.dados_url.clone()),
            github_token: non_empty(self.github_token.clone()),
            dados_json: non_empty(dados_json),
            timeout_seconds: timeout_in_range(self.timeout),
        })
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("path", &self.path)?;
        Method::from_bytes(self.method.as_bytes()).map_err(|_| {
            ProxyError::InvalidConfigValueError {
                field: "method".to_string(),
                value: self.method.clone(),
                reason: "Not a valid HTTP method".to_string(),
            }
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let config =
            CliConfig::try_parse_from(["dados-proxy", "--dados-url", "https://example.com/d.json"])
                .unwrap();

        assert_eq!(config.path, "/api/dados");
        assert_eq!(config.method(), Method::GET);
        assert!(config.validate().is_ok());

        let settings = config.settings().unwrap();
        assert_eq!(
            settings.dados_url.as_deref(),
            Some("https://example.com/d.json")
        );
    }

    #[test]
    fn test_out_of_range_timeout_flag_uses_default() {
        for timeout in ["0", "301"] {
            let config =
                CliConfig::try_parse_from(["dados-proxy", "--timeout", timeout]).unwrap();
            assert_eq!(
                config.settings().unwrap().timeout_seconds,
                DEFAULT_TIMEOUT_SECONDS
            );
        }
    }

    #[test]
    fn test_validate_rejects_relative_path() {
        let config = CliConfig::try_parse_from(["dados-proxy", "--path", "api/dados"]).unwrap();
        assert!(config.validate().is_err());
    }
}
