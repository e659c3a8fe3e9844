pub mod favorites;
pub mod providers;
pub mod roast;

pub use providers::{LetterboxdProvider, ProfileSource, TextGenerator, WorkersAiProvider};
pub use roast::RoastService;
