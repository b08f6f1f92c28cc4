pub mod catalog;
pub mod matching;
pub mod preferences;
pub mod recommendations;
pub mod scoring;

pub use catalog::Catalog;
pub use recommendations::{browse_by_mood, Recommender, MAX_RECOMMENDATIONS};
