use crate::models::ContentItem;

use super::preferences::{GenreMode, LanguageMode, NormalizedPreferences};

/// Runs the strict pass: genre, language, energy and mood filters, each
/// narrowing the output of the previous stage.
///
/// Returns nothing when no genre, language or mood was selected at all.
pub fn strict_pass<'a>(
    items: &'a [ContentItem],
    prefs: &NormalizedPreferences,
) -> Vec<&'a ContentItem> {
    if prefs.is_unset() {
        return Vec::new();
    }

    let mut matched: Vec<&ContentItem> = items.iter().collect();

    matched.retain(|item| passes_genre(item, prefs));
    matched.retain(|item| passes_language(item, prefs));
    matched.retain(|item| prefs.energy_compatible(item.energy));
    if !prefs.moods.is_empty() {
        matched.retain(|item| prefs.mood_matches(item.mood));
    }

    tracing::debug!(
        catalog_size = items.len(),
        matched = matched.len(),
        "Strict pass completed"
    );

    matched
}

fn passes_genre(item: &ContentItem, prefs: &NormalizedPreferences) -> bool {
    match &prefs.genre_mode {
        GenreMode::Any => true,
        GenreMode::Exclusive(genre) => item.genre == *genre,
        GenreMode::Normal { custom_title } => {
            prefs.genre_matches(item.genre)
                || custom_title
                    .as_deref()
                    .is_some_and(|text| item.title.to_lowercase().contains(text))
        }
    }
}

fn passes_language(item: &ContentItem, prefs: &NormalizedPreferences) -> bool {
    match prefs.language_mode {
        LanguageMode::Any => true,
        LanguageMode::Exclusive(language) => item.language == language,
        LanguageMode::Normal => prefs.language_matches(item.language),
    }
}
