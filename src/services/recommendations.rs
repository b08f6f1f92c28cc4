use std::collections::HashSet;

use crate::models::{ContentItem, MatchPass, Mood, PreferenceVector, Recommendation};

use super::matching::strict_pass;
use super::preferences::NormalizedPreferences;
use super::scoring::fallback_pass;

/// Upper bound on the number of items returned by any lookup
pub const MAX_RECOMMENDATIONS: usize = 50;

/// Generates song recommendations from a user's preferences
///
/// Runs the strict pass first and falls back to soft scoring over the whole
/// catalog when it finds nothing. The result is narrowed to the requested
/// mood when possible, deduplicated and capped.
pub struct Recommender<'a> {
    items: &'a [ContentItem],
    preferences: Option<&'a PreferenceVector>,
}

impl<'a> Recommender<'a> {
    /// Creates a new recommender over the given catalog items
    pub fn new(items: &'a [ContentItem], preferences: Option<&'a PreferenceVector>) -> Self {
        Self { items, preferences }
    }

    pub fn recommend(&self, target_mood: Option<Mood>) -> Recommendation {
        let Some(preferences) = self.preferences.filter(|p| !p.is_empty()) else {
            tracing::debug!("No preferences set, skipping recommendation engine");
            return Recommendation::without_preferences();
        };

        let normalized = NormalizedPreferences::from_preferences(preferences);

        let strict = strict_pass(self.items, &normalized);
        let (matched, pass) = if !strict.is_empty() {
            (strict, MatchPass::Strict)
        } else {
            let scored = fallback_pass(self.items, &normalized);
            tracing::info!(
                scored = scored.len(),
                "Strict pass found nothing, using fallback scoring"
            );
            let pass = if scored.is_empty() {
                MatchPass::None
            } else {
                MatchPass::Fallback
            };
            (scored.into_iter().map(|s| s.item).collect(), pass)
        };

        let (shaped, pass) = match target_mood {
            Some(mood) => narrow_to_mood(self.items, matched, mood, pass),
            None => (matched, pass),
        };
        // The mood bucket can re-add ids, so dedup runs on the shaped list
        let mut shaped = dedup_by_id(shaped);
        shaped.truncate(MAX_RECOMMENDATIONS);

        tracing::debug!(
            returned = shaped.len(),
            pass = ?pass,
            target_mood = ?target_mood,
            "Recommendation completed"
        );

        Recommendation {
            items: shaped.into_iter().cloned().collect(),
            has_preferences: true,
            pass,
        }
    }
}

/// Removes later occurrences of an id, keeping order
pub fn dedup_by_id(items: Vec<&ContentItem>) -> Vec<&ContentItem> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.id))
        .collect()
}

/// Prefers items tagged with the target mood
///
/// Matched items of that mood win. Failing that, the whole mood bucket
/// replaces the result. If the bucket is empty the matches stand.
fn narrow_to_mood<'a>(
    catalog: &'a [ContentItem],
    matched: Vec<&'a ContentItem>,
    mood: Mood,
    pass: MatchPass,
) -> (Vec<&'a ContentItem>, MatchPass) {
    let in_mood: Vec<&ContentItem> = matched
        .iter()
        .copied()
        .filter(|item| item.mood == mood)
        .collect();
    if !in_mood.is_empty() {
        return (in_mood, pass);
    }

    let bucket: Vec<&ContentItem> = catalog.iter().filter(|item| item.mood == mood).collect();
    if !bucket.is_empty() {
        tracing::debug!(
            mood = %mood,
            bucket_size = bucket.len(),
            "No preference match in mood, using mood bucket"
        );
        return (bucket, MatchPass::Mood);
    }

    (matched, pass)
}

/// Mood-only lookup for callers without preferences
///
/// Returns the mood bucket, or the start of the catalog when the mood is
/// absent or has no items. At most `limit` items, never more than
/// [`MAX_RECOMMENDATIONS`].
pub fn browse_by_mood(catalog: &[ContentItem], mood: Option<Mood>, limit: usize) -> Vec<ContentItem> {
    let limit = limit.min(MAX_RECOMMENDATIONS);

    if let Some(mood) = mood {
        let bucket: Vec<ContentItem> = catalog
            .iter()
            .filter(|item| item.mood == mood)
            .take(limit)
            .cloned()
            .collect();
        if !bucket.is_empty() {
            return bucket;
        }
        tracing::debug!(mood = %mood, "Mood bucket empty, returning catalog head");
    }

    catalog.iter().take(limit).cloned().collect()
}
