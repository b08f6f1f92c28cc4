use serde::{Deserialize, Serialize};
use std::fmt::Display;

mod taxonomy;
mod user_preferences;

pub use taxonomy::{Energy, Genre, Intensity, Language, Mood};
pub use user_preferences::PreferenceVector;

/// Structural identity of a generated content item
///
/// Unique by construction across the mood × genre × language × song product,
/// so no collision repair is needed after generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemKey {
    pub mood: Mood,
    pub genre: Genre,
    pub language: Language,
    pub song: u8,
}

impl ItemKey {
    /// Flattened numeric id exposed to clients
    ///
    /// `mood*1_000_000 + genre*10_000 + language*100 + song`
    pub fn numeric_id(&self) -> u64 {
        self.mood.index() * 1_000_000
            + self.genre.index() * 10_000
            + self.language.index() * 100
            + u64::from(self.song)
    }
}

impl Display for ItemKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.mood, self.genre, self.language, self.song
        )
    }
}

/// A recommendable song in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentItem {
    pub id: u64,
    pub key: ItemKey,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub external_link: String,
    pub genre: Genre,
    pub language: Language,
    pub artist: String,
    pub energy: Energy,
    pub mood: Mood,
}

/// Which stage of the engine produced a recommendation list
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatchPass {
    /// Exact-match filters produced the items
    Strict,
    /// Soft scoring over the whole catalog produced the items
    Fallback,
    /// Items came straight from the requested mood bucket
    Mood,
    /// Head of the catalog, served when no preferences or mood bucket apply
    Catalog,
    /// Nothing matched
    None,
}

/// Outcome of a single recommendation call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub items: Vec<ContentItem>,
    pub has_preferences: bool,
    pub pass: MatchPass,
}

impl Recommendation {
    /// Result for a caller without usable preferences
    pub fn without_preferences() -> Self {
        Self {
            items: Vec::new(),
            has_preferences: false,
            pass: MatchPass::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_id_layout() {
        let key = ItemKey {
            mood: Mood::Angry,
            genre: Genre::Jazz,
            language: Language::Korean,
            song: 2,
        };
        assert_eq!(key.numeric_id(), 2_030_302);
    }

    #[test]
    fn test_item_key_display() {
        let key = ItemKey {
            mood: Mood::Calm,
            genre: Genre::LoFi,
            language: Language::Instrumental,
            song: 0,
        };
        assert_eq!(format!("{}", key), "calm/lo-fi/instrumental/0");
    }

    #[test]
    fn test_match_pass_serialization() {
        assert_eq!(
            serde_json::to_string(&MatchPass::Fallback).unwrap(),
            "\"fallback\""
        );
        assert_eq!(serde_json::to_string(&MatchPass::None).unwrap(), "\"none\"");
        assert_eq!(
            serde_json::to_string(&MatchPass::Catalog).unwrap(),
            "\"catalog\""
        );
    }

    #[test]
    fn test_without_preferences() {
        let rec = Recommendation::without_preferences();
        assert!(rec.items.is_empty());
        assert!(!rec.has_preferences);
        assert_eq!(rec.pass, MatchPass::None);
    }
}
