/// Letterboxd profile scraper
///
/// Fetches `<base>/<username>/` with a browser User-Agent and hands the markup
/// to the favorites extractor. Letterboxd has no public API for this, so the
/// page structure is the contract.
use crate::{
    error::{AppError, AppResult},
    models::{FavoritesOutcome, Username},
    services::{favorites::extract_favorites, providers::ProfileSource},
};
use reqwest::{header::USER_AGENT, Client as HttpClient, StatusCode, Url};

#[derive(Clone)]
pub struct LetterboxdProvider {
    http_client: HttpClient,
    base_url: String,
    user_agent: String,
}

impl LetterboxdProvider {
    pub fn new(http_client: HttpClient, base_url: String, user_agent: String) -> Self {
        Self {
            http_client,
            base_url,
            user_agent,
        }
    }

    /// Builds the profile URL, encoding the username as a single path segment
    pub fn profile_url(&self, username: &Username) -> AppResult<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            AppError::Internal(format!("Invalid profile base URL {}: {}", self.base_url, e))
        })?;

        url.path_segments_mut()
            .map_err(|_| {
                AppError::Internal(format!("Profile base URL cannot be a base: {}", self.base_url))
            })?
            .pop_if_empty()
            .push(username.as_str())
            .push("");

        Ok(url)
    }
}

#[async_trait::async_trait]
impl ProfileSource for LetterboxdProvider {
    async fn fetch_favorites(&self, username: &Username) -> AppResult<FavoritesOutcome> {
        let url = self.profile_url(username)?;

        tracing::info!(username = %username, url = %url, "Scraping Letterboxd profile");

        let response = match self
            .http_client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(username = %username, error = %e, "Error fetching Letterboxd profile");
                return Ok(FavoritesOutcome::Unavailable(e.to_string()));
            }
        };

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            tracing::warn!(username = %username, "Letterboxd profile does not exist");
            return Ok(FavoritesOutcome::ProfileNotFound);
        }
        if !status.is_success() {
            tracing::error!(
                username = %username,
                status = %status,
                "Letterboxd returned an unexpected status"
            );
            return Ok(FavoritesOutcome::Unavailable(format!(
                "Profile site returned status {}",
                status
            )));
        }

        let html = match response.text().await {
            Ok(html) => html,
            Err(e) => {
                tracing::error!(username = %username, error = %e, "Error reading Letterboxd profile body");
                return Ok(FavoritesOutcome::Unavailable(e.to_string()));
            }
        };

        let favorites = extract_favorites(&html);

        tracing::info!(
            username = %username,
            favorites = favorites.len(),
            provider = self.name(),
            "Profile scraped"
        );

        Ok(FavoritesOutcome::from_extracted(favorites))
    }

    fn name(&self) -> &'static str {
        "letterboxd"
    }
}
