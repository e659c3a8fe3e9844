use std::fmt::Display;

use crate::error::{AppError, AppResult};

pub mod favorites;
pub mod workers_ai;

pub use favorites::{Favorites, MAX_FAVORITES};
pub use workers_ai::{RunRequest, RunResponse, RunResult};

/// Body returned when a username is empty or blank
pub const INVALID_USERNAME_MESSAGE: &str = "Invalid username provided.";

/// A Letterboxd username taken from the request path
///
/// Rejected when blank after trimming; otherwise kept exactly as received,
/// surrounding whitespace included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    pub fn parse(raw: &str) -> AppResult<Self> {
        if raw.trim().is_empty() {
            return Err(AppError::InvalidInput(INVALID_USERNAME_MESSAGE.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of looking up a user's favorites on the profile site
///
/// Every variant except `Found` is answered the same way over HTTP, but the
/// cause is kept so it can be logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoritesOutcome {
    /// Profile fetched and at least one title extracted
    Found(Favorites),
    /// Profile fetched but no titles matched
    NoFavorites,
    /// Profile site answered 404
    ProfileNotFound,
    /// Transport failure or unexpected upstream status
    Unavailable(String),
}

impl FavoritesOutcome {
    /// Classifies an extracted list: empty lists become `NoFavorites`
    pub fn from_extracted(favorites: Favorites) -> Self {
        if favorites.is_empty() {
            FavoritesOutcome::NoFavorites
        } else {
            FavoritesOutcome::Found(favorites)
        }
    }

    /// Short label for log fields
    pub fn kind(&self) -> &'static str {
        match self {
            FavoritesOutcome::Found(_) => "found",
            FavoritesOutcome::NoFavorites => "no_favorites",
            FavoritesOutcome::ProfileNotFound => "profile_not_found",
            FavoritesOutcome::Unavailable(_) => "unavailable",
        }
    }
}
