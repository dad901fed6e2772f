//! Endpoint configuration
//!
//! Resolved from the environment so the same binary can point at local or
//! hosted deployments.

use crate::error::{Error, Result};
use std::env;
use url::Url;

/// Direct endpoint when nothing is configured
const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Processing endpoint configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the processing endpoint (long-running requests go here)
    pub direct_base: Url,
    /// Base URL of the request relay (default path for everything else)
    pub relay_base: Url,
}

impl ApiConfig {
    /// Resolve configuration from the environment.
    ///
    /// - `CLARIS_API_URL`: direct processing endpoint
    ///   (default `http://localhost:8000`)
    /// - `CLARIS_RELAY_URL`: relay path; falls back to the direct URL so
    ///   single-endpoint deployments still work
    pub fn from_env() -> Result<Self> {
        let direct = env::var("CLARIS_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let direct_base = parse_base(&direct, "CLARIS_API_URL")?;

        let relay_base = match env::var("CLARIS_RELAY_URL") {
            Ok(relay) => parse_base(&relay, "CLARIS_RELAY_URL")?,
            Err(_) => direct_base.clone(),
        };

        Ok(Self {
            direct_base,
            relay_base,
        })
    }
}

fn parse_base(raw: &str, var: &str) -> Result<Url> {
    let mut url =
        Url::parse(raw.trim()).map_err(|e| Error::Config(format!("{var} is not a URL: {e}")))?;
    // Endpoint paths are joined onto the base, which requires a trailing slash
    if !url.path().ends_with('/') {
        url.set_path(&format!("{}/", url.path()));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_base_adds_trailing_slash() {
        let url = parse_base("http://localhost:8000", "TEST").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/");

        let nested = parse_base("https://api.example.com/claris", "TEST").unwrap();
        assert_eq!(nested.as_str(), "https://api.example.com/claris/");
    }

    #[test]
    fn test_parse_base_rejects_garbage() {
        assert!(parse_base("not a url", "TEST").is_err());
    }
}
