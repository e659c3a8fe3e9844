/// Upstream provider abstraction
///
/// The roast flow talks to two external systems: the profile site that lists a
/// user's favorite films, and the text-generation API that writes the roast.
/// Each sits behind a trait so handlers and services can be exercised with
/// fakes.
use crate::{
    error::AppResult,
    models::{FavoritesOutcome, Username},
};

pub mod letterboxd;
pub mod workers_ai;

pub use letterboxd::LetterboxdProvider;
pub use workers_ai::WorkersAiProvider;

/// Source of a user's favorite films
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ProfileSource: Send + Sync {
    /// Looks up the favorites shown on a user's profile
    ///
    /// Upstream failures are reported through the outcome, not as errors.
    /// An `Err` means something unexpected happened on our side.
    async fn fetch_favorites(&self, username: &Username) -> AppResult<FavoritesOutcome>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Text-generation backend
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    /// Runs the prompt and returns the generated text
    ///
    /// `Ok(None)` means the call succeeded but the model returned no text.
    async fn generate(&self, prompt: &str) -> AppResult<Option<String>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
