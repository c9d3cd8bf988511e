use std::env;
use url::Url;

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Overrides the Comprehend endpoint, e.g. for a local AWS emulator.
    pub comprehend_endpoint_url: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            comprehend_endpoint_url: lookup("COMPREHEND_ENDPOINT_URL")
                .filter(|v| !v.trim().is_empty())
                .map(|v| parse_endpoint_url(&v))
                .transpose()?,
        })
    }
}

fn parse_endpoint_url(raw: &str) -> Result<String, String> {
    let raw = raw.trim();
    let parsed = Url::parse(raw).map_err(|e| format!("COMPREHEND_ENDPOINT_URL: {}", e))?;
    match parsed.scheme() {
        "http" | "https" => Ok(raw.to_string()),
        other => Err(format!(
            "COMPREHEND_ENDPOINT_URL: unsupported scheme `{}`",
            other
        )),
    }
}
