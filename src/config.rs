use anyhow::{bail, Result};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const BASE_URL_ENV: &str = "LOVEMATCH_API_URL";

/// Where the prediction/history service lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub base_url: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ServiceConfig {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = normalize_base_url(&base_url.into())?;
        Ok(Self { base_url })
    }

    /// Reads `LOVEMATCH_API_URL`, falling back to the local development server.
    pub fn from_env() -> Result<Self> {
        match std::env::var(BASE_URL_ENV) {
            Ok(value) if !value.trim().is_empty() => Self::new(value),
            _ => Ok(Self::default()),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        bail!("service base URL must start with http:// or https://, got '{raw}'");
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = ServiceConfig::new("https://api.example.com/").unwrap();
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(
            config.endpoint("/api/predict"),
            "https://api.example.com/api/predict"
        );
    }

    #[test]
    fn rejects_url_without_scheme() {
        assert!(ServiceConfig::new("localhost:5000").is_err());
    }

    #[test]
    fn default_points_at_local_server() {
        assert_eq!(
            ServiceConfig::default().endpoint("api/test"),
            "http://localhost:5000/api/test"
        );
    }
}
