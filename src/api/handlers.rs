use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{FavoritesOutcome, Username, INVALID_USERNAME_MESSAGE},
};

use super::AppState;

/// Body returned whenever no favorites could be found for a user
pub const NO_FAVORITES_MESSAGE: &str =
    "No favorite movies found for this user. Are they too cool for favorites?";

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Roast a Letterboxd user based on their favorite films
pub async fn roast(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(raw_username): Path<String>,
) -> AppResult<String> {
    let username = Username::parse(&raw_username)?;

    tracing::info!(
        request_id = %request_id,
        username = %username,
        "Processing roast request"
    );

    let favorites = match state.profiles.fetch_favorites(&username).await? {
        FavoritesOutcome::Found(favorites) => favorites,
        outcome => {
            tracing::warn!(
                request_id = %request_id,
                username = %username,
                outcome = outcome.kind(),
                "No favorites to roast"
            );
            return Err(AppError::NotFound(NO_FAVORITES_MESSAGE.to_string()));
        }
    };

    let roast = state.roaster.roast(&username, &favorites).await;

    tracing::info!(
        request_id = %request_id,
        username = %username,
        favorites = favorites.len(),
        "Roast completed"
    );

    Ok(roast)
}

/// Any path without a route
pub async fn not_found() -> AppError {
    AppError::NotFound("Not found".to_string())
}

/// `/roast/` with nothing after the slash
pub async fn missing_username() -> AppError {
    AppError::InvalidInput(INVALID_USERNAME_MESSAGE.to_string())
}
