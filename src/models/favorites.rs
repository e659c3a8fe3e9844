/// Letterboxd profiles show at most four favorite films
pub const MAX_FAVORITES: usize = 4;

/// Ordered favorite film titles, at most `MAX_FAVORITES` long
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites(Vec<String>);

impl Favorites {
    /// Builds a list from titles in order, dropping anything past the limit
    pub fn from_titles<I>(titles: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self(titles.into_iter().take(MAX_FAVORITES).collect())
    }

    pub fn titles(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Titles joined with ", " for prompt text
    pub fn joined(&self) -> String {
        self.0.join(", ")
    }
}
