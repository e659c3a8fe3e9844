use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::models::{Favorites, MAX_FAVORITES};

/// Poster images inside the "Favorite films" section of a profile page
static FAVORITES_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("#favourites .film-poster img").expect("favorites selector is valid CSS")
});

/// Extracts favorite film titles from a Letterboxd profile page
///
/// Only the first `MAX_FAVORITES` poster images are examined. Titles come from
/// each image's `alt` attribute; images without one are skipped rather than
/// padded. A page without the favorites section yields an empty list.
pub fn extract_favorites(html: &str) -> Favorites {
    let document = Html::parse_document(html);

    let titles = document
        .select(&FAVORITES_SELECTOR)
        .take(MAX_FAVORITES)
        .filter_map(|img| img.value().attr("alt"))
        .filter(|title| !title.is_empty())
        .map(str::to_string);

    Favorites::from_titles(titles)
}
