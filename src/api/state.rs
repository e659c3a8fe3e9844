use std::sync::Arc;

use reqwest::Client as HttpClient;

use crate::{
    config::Config,
    services::{
        LetterboxdProvider, ProfileSource, RoastService, TextGenerator, WorkersAiProvider,
    },
};

/// Shared application state
///
/// Everything in here is immutable and cheap to clone; requests share no
/// mutable data.
#[derive(Clone)]
pub struct AppState {
    pub profiles: Arc<dyn ProfileSource>,
    pub roaster: RoastService,
}

impl AppState {
    /// Creates state from explicit providers
    pub fn new(profiles: Arc<dyn ProfileSource>, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            profiles,
            roaster: RoastService::new(generator),
        }
    }

    /// Wires the Letterboxd scraper and Workers AI client from configuration
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(config.http_timeout())
            .build()?;

        let profiles = LetterboxdProvider::new(
            http_client.clone(),
            config.profile_base_url.clone(),
            config.user_agent.clone(),
        );
        let generator = WorkersAiProvider::from_config(http_client, config);

        Ok(Self::new(Arc::new(profiles), Arc::new(generator)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{Favorites, FavoritesOutcome, Username},
        services::providers::test_support::spawn_stub,
    };
    use axum::Router;
    use std::time::{Duration, Instant};

    /// Answers every request, but only after the client should have given up
    async fn stalled() -> &'static str {
        tokio::time::sleep(Duration::from_secs(5)).await;
        "too late"
    }

    async fn create_stalled_state() -> AppState {
        let upstream = spawn_stub(Router::new().fallback(stalled)).await;
        let vars = [
            ("CLOUDFLARE_ACCOUNT_ID", "acct"),
            ("CLOUDFLARE_API_KEY", "secret"),
            ("CLOUDFLARE_API_URL", upstream.as_str()),
            ("PROFILE_BASE_URL", upstream.as_str()),
            ("HTTP_TIMEOUT_SECS", "1"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()));

        let config = Config::from_vars(vars).unwrap();
        AppState::from_config(&config).unwrap()
    }

    #[tokio::test]
    async fn test_profile_fetch_times_out() {
        let state = create_stalled_state().await;
        let username = Username::parse("slowpoke").unwrap();

        let started = Instant::now();
        let outcome = state.profiles.fetch_favorites(&username).await.unwrap();

        assert!(matches!(outcome, FavoritesOutcome::Unavailable(_)));
        assert!(started.elapsed() < Duration::from_secs(4));
    }

    #[tokio::test]
    async fn test_generation_times_out() {
        let state = create_stalled_state().await;
        let username = Username::parse("slowpoke").unwrap();
        let favorites = Favorites::from_titles(vec!["Satantango".to_string()]);

        let started = Instant::now();
        let roast = state.roaster.roast(&username, &favorites).await;

        assert_eq!(
            roast,
            "slowpoke, failed to generate a roast—the AI must’ve laughed too hard and crashed!"
        );
        assert!(started.elapsed() < Duration::from_secs(4));
    }
}
