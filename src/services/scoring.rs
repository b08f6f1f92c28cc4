use crate::models::ContentItem;

use super::preferences::NormalizedPreferences;

const GENRE_POINTS: u8 = 3;
const LANGUAGE_POINTS: u8 = 2;
const MOOD_POINTS: u8 = 2;
const ENERGY_POINTS: u8 = 1;

/// Lowest score an item needs to stay in the fallback result
pub const MIN_FALLBACK_SCORE: u8 = 1;

/// A catalog item with its fallback score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredItem<'a> {
    pub item: &'a ContentItem,
    pub score: u8,
}

/// Soft score of one item
///
/// A dimension the user left empty awards its points unconditionally. The
/// energy check always runs.
pub fn score_item(item: &ContentItem, prefs: &NormalizedPreferences) -> u8 {
    let mut score = 0;

    if prefs.genres.is_empty() || prefs.genre_matches(item.genre) {
        score += GENRE_POINTS;
    }
    if prefs.languages.is_empty() || prefs.language_matches(item.language) {
        score += LANGUAGE_POINTS;
    }
    if prefs.moods.is_empty() || prefs.mood_matches(item.mood) {
        score += MOOD_POINTS;
    }
    if prefs.energy_compatible(item.energy) {
        score += ENERGY_POINTS;
    }

    score
}

/// Scores the whole catalog and ranks it by descending score
///
/// Ties keep catalog order.
pub fn fallback_pass<'a>(
    items: &'a [ContentItem],
    prefs: &NormalizedPreferences,
) -> Vec<ScoredItem<'a>> {
    let mut scored: Vec<ScoredItem<'a>> = items
        .iter()
        .map(|item| ScoredItem {
            item,
            score: score_item(item, prefs),
        })
        .filter(|scored| scored.score >= MIN_FALLBACK_SCORE)
        .collect();

    // sort_by is stable
    scored.sort_by(|a, b| b.score.cmp(&a.score));

    tracing::debug!(
        catalog_size = items.len(),
        scored = scored.len(),
        top_score = scored.first().map(|s| s.score),
        "Fallback pass completed"
    );

    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Energy, Genre, Intensity, Language, Mood, PreferenceVector};
    use crate::services::matching::strict_pass;
    use crate::services::test_support::item;

    fn normalize(prefs: PreferenceVector) -> NormalizedPreferences {
        NormalizedPreferences::from_preferences(&prefs)
    }

    #[test]
    fn test_score_components() {
        let prefs = normalize(
            PreferenceVector::new()
                .with_genres(["jazz"])
                .with_languages(["english"])
                .with_moods(["calm"])
                .with_intensity(Intensity::Low),
        );

        let full = item(1, Genre::Jazz, Language::English, Energy::Low, Mood::Calm);
        assert_eq!(score_item(&full, &prefs), 8);

        let genre_only = item(2, Genre::Jazz, Language::Korean, Energy::High, Mood::Happy);
        assert_eq!(score_item(&genre_only, &prefs), 3);

        let energy_only = item(3, Genre::Rock, Language::Korean, Energy::Low, Mood::Happy);
        assert_eq!(score_item(&energy_only, &prefs), 1);

        let nothing = item(4, Genre::Rock, Language::Korean, Energy::High, Mood::Happy);
        assert_eq!(score_item(&nothing, &prefs), 0);
    }

    #[test]
    fn test_empty_dimension_awards_points() {
        let prefs = normalize(PreferenceVector::new().with_genres(["rock"]));
        let unrelated = item(1, Genre::Pop, Language::Tamil, Energy::Low, Mood::Sad);
        // language (2) + mood (2) + energy (1)
        assert_eq!(score_item(&unrelated, &prefs), 5);
    }

    #[test]
    fn test_fallback_activates_over_original_catalog() {
        let items = vec![
            item(1, Genre::Rock, Language::English, Energy::High, Mood::Happy),
            item(2, Genre::Jazz, Language::Spanish, Energy::Low, Mood::Happy),
            item(3, Genre::Jazz, Language::Korean, Energy::High, Mood::Sad),
            item(4, Genre::Rock, Language::Spanish, Energy::High, Mood::Sad),
        ];
        // Genre matches but no jazz item is in English
        let prefs = normalize(
            PreferenceVector::new()
                .with_genres(["jazz"])
                .with_languages(["english"])
                .with_intensity(Intensity::Low),
        );
        assert!(strict_pass(&items, &prefs).is_empty());

        let ranked = fallback_pass(&items, &prefs);
        let ids: Vec<u64> = ranked.iter().map(|s| s.item.id).collect();
        let scores: Vec<u8> = ranked.iter().map(|s| s.score).collect();

        // 2: 3+0+2+1, 3: 3+0+2+0, 1: 0+2+2+0, 4: 0+0+2+0
        assert_eq!(ids, vec![2, 3, 1, 4]);
        assert_eq!(scores, vec![6, 5, 4, 2]);
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let items = vec![
            item(10, Genre::Pop, Language::Hindi, Energy::Low, Mood::Sad),
            item(11, Genre::Rock, Language::Hindi, Energy::Low, Mood::Sad),
            item(12, Genre::Pop, Language::Hindi, Energy::Low, Mood::Sad),
            item(13, Genre::Rock, Language::Hindi, Energy::Low, Mood::Sad),
        ];
        let prefs = normalize(PreferenceVector::new().with_genres(["pop"]));

        let ids: Vec<u64> = fallback_pass(&items, &prefs)
            .iter()
            .map(|s| s.item.id)
            .collect();
        assert_eq!(ids, vec![10, 12, 11, 13]);
    }

    #[test]
    fn test_zero_scores_are_dropped() {
        let items = vec![item(1, Genre::Rock, Language::Korean, Energy::High, Mood::Happy)];
        let prefs = normalize(
            PreferenceVector::new()
                .with_genres(["jazz"])
                .with_languages(["english"])
                .with_moods(["calm"])
                .with_intensity(Intensity::Low),
        );
        assert!(fallback_pass(&items, &prefs).is_empty());
    }

    #[test]
    fn test_unset_preferences_score_everything_equally() {
        let items = vec![
            item(1, Genre::Rock, Language::Korean, Energy::Low, Mood::Happy),
            item(2, Genre::Pop, Language::Hindi, Energy::Low, Mood::Sad),
        ];
        let prefs = normalize(PreferenceVector::new().with_intensity(Intensity::High));
        let ranked = fallback_pass(&items, &prefs);
        assert!(ranked.iter().all(|s| s.score == 8));
    }
}
