#[cfg(feature = "cli")]
pub mod cli;
pub mod lambda;

use crate::utils::error::Result;
use crate::utils::validation::{validate_range, validate_url, Validate};
use std::env;
use std::fmt;
use std::time::Duration;

pub const DADOS_URL: &str = "DADOS_URL";
pub const GITHUB_TOKEN: &str = "GITHUB_TOKEN";
pub const DADOS_JSON: &str = "DADOS_JSON";
pub const DADOS_TIMEOUT_SECONDS: &str = "DADOS_TIMEOUT_SECONDS";

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const MAX_TIMEOUT_SECONDS: u64 = 300;

/// Keeps `seconds` when it lies in `1..=MAX_TIMEOUT_SECONDS`, otherwise warns
/// and falls back to the default.
pub fn timeout_in_range(seconds: u64) -> u64 {
    if (1..=MAX_TIMEOUT_SECONDS).contains(&seconds) {
        return seconds;
    }
    tracing::warn!(
        "{} fora do intervalo 1-{} ({}), usando {}s",
        DADOS_TIMEOUT_SECONDS,
        MAX_TIMEOUT_SECONDS,
        seconds,
        DEFAULT_TIMEOUT_SECONDS
    );
    DEFAULT_TIMEOUT_SECONDS
}

/// Snapshot of the environment configuration, taken once per request.
///
/// Empty variables count as unset.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    pub dados_url: Option<String>,
    pub github_token: Option<String>,
    pub dados_json: Option<String>,
    pub timeout_seconds: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dados_url: None,
            github_token: None,
            dados_json: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let timeout_seconds = match non_empty(DADOS_TIMEOUT_SECONDS) {
            Some(raw) => raw
                .trim()
                .parse()
                .map(timeout_in_range)
                .unwrap_or_else(|_| {
                    tracing::warn!(
                        "{} inválido ('{}'), usando {}s",
                        DADOS_TIMEOUT_SECONDS,
                        raw,
                        DEFAULT_TIMEOUT_SECONDS
                    );
                    DEFAULT_TIMEOUT_SECONDS
                }),
            None => DEFAULT_TIMEOUT_SECONDS,
        };

        Self {
            dados_url: non_empty(DADOS_URL),
            github_token: non_empty(GITHUB_TOKEN),
            dados_json: non_empty(DADOS_JSON),
            timeout_seconds,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("dados_url", &self.dados_url)
            .field("github_token", &self.github_token.as_ref().map(|_| "***"))
            .field(
                "dados_json",
                &self.dados_json.as_ref().map(|json| format!("<{} bytes>", json.len())),
            )
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        // Missing values are reported per request, only present ones are checked here
        if let Some(url) = &self.dados_url {
            validate_url(DADOS_URL, url)?;
        }
        validate_range(
            DADOS_TIMEOUT_SECONDS,
            self.timeout_seconds,
            1,
            MAX_TIMEOUT_SECONDS,
        )?;

        tracing::debug!("✅ Configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_reads_all_variables() {
        let settings = Settings::from_lookup(lookup_from(&[
            (DADOS_URL, "https://example.com/dados.json"),
            (GITHUB_TOKEN, "ghp_secret"),
            (DADOS_JSON, "[1,2,3]"),
            (DADOS_TIMEOUT_SECONDS, "5"),
        ]));

        assert_eq!(
            settings.dados_url.as_deref(),
            Some("https://example.com/dados.json")
        );
        assert_eq!(settings.github_token.as_deref(), Some("ghp_secret"));
        assert_eq!(settings.dados_json.as_deref(), Some("[1,2,3]"));
        assert_eq!(settings.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_empty_values_count_as_unset() {
        let settings = Settings::from_lookup(lookup_from(&[
            (DADOS_URL, ""),
            (GITHUB_TOKEN, ""),
            (DADOS_JSON, ""),
        ]));

        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_bad_timeout_falls_back_to_default() {
        let settings = Settings::from_lookup(lookup_from(&[(DADOS_TIMEOUT_SECONDS, "soon")]));
        assert_eq!(settings.timeout_seconds, DEFAULT_TIMEOUT_SECONDS);
    }

    #[test]
    fn test_out_of_range_timeout_falls_back_to_default() {
        for raw in ["0", "301"] {
            let settings = Settings::from_lookup(lookup_from(&[(DADOS_TIMEOUT_SECONDS, raw)]));
            assert_eq!(settings.timeout_seconds, DEFAULT_TIMEOUT_SECONDS);
            assert!(settings.validate().is_ok());
        }

        let settings = Settings::from_lookup(lookup_from(&[(DADOS_TIMEOUT_SECONDS, "300")]));
        assert_eq!(settings.timeout_seconds, MAX_TIMEOUT_SECONDS);
    }

    #[test]
    fn test_debug_redacts_token() {
        let settings = Settings {
            github_token: Some("ghp_secret".to_string()),
            ..Settings::default()
        };
        let printed = format!("{:?}", settings);
        assert!(!printed.contains("ghp_secret"));
        assert!(printed.contains("***"));
    }

    #[test]
    fn test_validate() {
        assert!(Settings::default().validate().is_ok());

        let bad_url = Settings {
            dados_url: Some("ftp://example.com/dados.json".to_string()),
            ..Settings::default()
        };
        assert!(bad_url.validate().is_err());

        let bad_timeout = Settings {
            timeout_seconds: 0,
            ..Settings::default()
        };
        assert!(bad_timeout.validate().is_err());
    }
}
