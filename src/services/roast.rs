use std::sync::Arc;

use crate::{
    models::{Favorites, Username},
    services::providers::TextGenerator,
};

/// Turns a user's favorite films into a roast
///
/// Never fails: generation problems are logged and answered with canned text
/// that still names the user.
#[derive(Clone)]
pub struct RoastService {
    generator: Arc<dyn TextGenerator>,
}

impl RoastService {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub async fn roast(&self, username: &Username, favorites: &Favorites) -> String {
        if favorites.is_empty() {
            return no_favorites_roast(username);
        }

        let prompt = build_prompt(username, favorites);

        match self.generator.generate(&prompt).await {
            Ok(Some(text)) => text,
            Ok(None) => {
                tracing::warn!(
                    username = %username,
                    provider = self.generator.name(),
                    "Generator returned no text"
                );
                format!(
                    "{}, no roast generated—guess the AI couldn’t handle your terrible taste!",
                    username
                )
            }
            Err(e) => {
                tracing::error!(
                    username = %username,
                    provider = self.generator.name(),
                    error = %e,
                    "Error calling AI API"
                );
                format!(
                    "{}, failed to generate a roast—the AI must’ve laughed too hard and crashed!",
                    username
                )
            }
        }
    }
}

fn no_favorites_roast(username: &Username) -> String {
    format!(
        "{}, you have no favorite movies to roast—maybe pick some films so I can actually have some fun with you!",
        username
    )
}

/// Builds the instruction sent to the model
pub fn build_prompt(username: &Username, favorites: &Favorites) -> String {
    format!(
        "Generate a funny roast for {user} based on their top 4 favorite movies: {movies}. \
         Please refer to the user as \"{user}, \" and roast their account. \
         We will have one paragraph for each favourite without any extra text or commentary. \
         Please make sure to not use the username more than twice in the entire response.",
        user = username,
        movies = favorites.joined(),
    )
}
