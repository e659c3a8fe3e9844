use serde::Deserialize;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Cloudflare account that owns the Workers AI binding
    pub cloudflare_account_id: String,

    /// Cloudflare API token, sent as a bearer token
    pub cloudflare_api_key: String,

    /// Cloudflare REST API base URL
    #[serde(default = "default_cloudflare_api_url")]
    pub cloudflare_api_url: String,

    /// Workers AI model used for roast generation
    #[serde(default = "default_ai_model")]
    pub ai_model: String,

    /// Upper bound on generated tokens per roast
    #[serde(default = "default_ai_max_tokens")]
    pub ai_max_tokens: u32,

    /// Letterboxd base URL; profiles live at `<base>/<username>/`
    #[serde(default = "default_profile_base_url")]
    pub profile_base_url: String,

    /// User-Agent sent when fetching profile pages
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Timeout applied to every outbound HTTP call
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_cloudflare_api_url() -> String {
    "https://api.cloudflare.com/client/v4".to_string()
}

fn default_ai_model() -> String {
    "@cf/meta/llama-3.2-3b-instruct".to_string()
}

fn default_ai_max_tokens() -> u32 {
    2048
}

fn default_profile_base_url() -> String {
    "https://letterboxd.com".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36".to_string()
}

fn default_http_timeout_secs() -> u64 {
    15
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of key/value pairs
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_applied() {
        let config = Config::from_vars(vars(&[
            ("CLOUDFLARE_ACCOUNT_ID", "acct"),
            ("CLOUDFLARE_API_KEY", "secret"),
        ]))
        .unwrap();

        assert_eq!(config.cloudflare_account_id, "acct");
        assert_eq!(config.cloudflare_api_key, "secret");
        assert_eq!(config.ai_model, "@cf/meta/llama-3.2-3b-instruct");
        assert_eq!(config.ai_max_tokens, 2048);
        assert_eq!(config.profile_base_url, "https://letterboxd.com");
        assert_eq!(config.http_timeout(), Duration::from_secs(15));
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_vars(vars(&[
            ("CLOUDFLARE_ACCOUNT_ID", "acct"),
            ("CLOUDFLARE_API_KEY", "secret"),
            ("PORT", "8080"),
            ("HOST", "0.0.0.0"),
            ("AI_MAX_TOKENS", "512"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.ai_max_tokens, 512);
    }

    #[test]
    fn test_missing_credentials_rejected() {
        let result = Config::from_vars(vars(&[("CLOUDFLARE_ACCOUNT_ID", "acct")]));
        assert!(result.is_err());
    }
}
