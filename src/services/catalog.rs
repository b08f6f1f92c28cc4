use std::collections::HashSet;
use std::sync::OnceLock;
use std::time::Instant;

use crate::models::{ContentItem, Genre, ItemKey, Language, Mood};

/// Songs generated per valid (mood, genre, language) triple
pub const SONGS_PER_COMBINATION: u8 = 3;

const TITLE_TEMPLATES: [&str; 3] = [
    "{mood} {genre} Vibes",
    "{artist}: {genre} for {mood} Days",
    "{mood} Moments with {artist}",
];

const DESCRIPTION_TEMPLATES: [&str; 3] = [
    "A {genre} pick by {artist} to match a {mood_lower} mood.",
    "{artist} brings {genre} sounds for when you feel {mood_lower}.",
    "Let {artist} carry you through this {mood_lower} moment with some {genre}.",
];

/// The full, ordered list of generated content items
#[derive(Debug)]
pub struct Catalog {
    items: Vec<ContentItem>,
}

static SHARED_CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Returns the process-wide catalog, generating it on first use.
pub fn shared() -> &'static Catalog {
    SHARED_CATALOG.get_or_init(Catalog::generate)
}

impl Catalog {
    /// Generates a fresh catalog over every valid mood × genre × language triple
    pub fn generate() -> Self {
        let start = Instant::now();
        let mut items = Vec::new();

        for mood in Mood::ALL {
            for genre in Genre::ALL {
                for language in Language::ALL {
                    if !is_valid_combination(genre, language) {
                        continue;
                    }
                    for song in 0..SONGS_PER_COMBINATION {
                        items.push(build_item(ItemKey {
                            mood,
                            genre,
                            language,
                            song,
                        }));
                    }
                }
            }
        }

        let catalog = Self::from_items(items);

        tracing::info!(
            item_count = catalog.items.len(),
            elapsed_ms = start.elapsed().as_millis(),
            "Generated content catalog"
        );

        catalog
    }

    /// Builds a catalog from prepared items
    ///
    /// Items whose id already appeared in the same mood bucket are dropped,
    /// keeping the first occurrence.
    pub fn from_items(items: Vec<ContentItem>) -> Self {
        let mut seen: HashSet<(Mood, u64)> = HashSet::new();
        let mut duplicates = 0usize;

        let items: Vec<ContentItem> = items
            .into_iter()
            .filter(|item| {
                let fresh = seen.insert((item.mood, item.id));
                if !fresh {
                    duplicates += 1;
                }
                fresh
            })
            .collect();

        if duplicates > 0 {
            tracing::warn!(
                duplicates,
                "Dropped catalog items with duplicate ids in the same mood bucket"
            );
        }

        Self { items }
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items generated for the given mood, in catalog order
    pub fn by_mood(&self, mood: Mood) -> impl Iterator<Item = &ContentItem> {
        self.items.iter().filter(move |item| item.mood == mood)
    }

    pub fn get(&self, id: u64) -> Option<&ContentItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

/// Whether a (genre, language) pair gets songs at all
///
/// The two checks are kept separate: instrumental genre is always allowed,
/// and instrumental language only pairs with a few genres.
pub fn is_valid_combination(genre: Genre, language: Language) -> bool {
    if genre == Genre::Instrumental {
        return true;
    }
    if language == Language::Instrumental
        && !matches!(
            genre,
            Genre::Instrumental | Genre::Classical | Genre::LoFi
        )
    {
        return false;
    }
    true
}

/// Artist pool for a language (and for English, a genre)
pub fn artists_for(genre: Genre, language: Language) -> &'static [&'static str] {
    match language {
        Language::English => match genre {
            Genre::Pop => &["Taylor Swift", "Dua Lipa", "Ed Sheeran", "Ariana Grande", "Harry Styles"],
            Genre::Rock => &["Coldplay", "Imagine Dragons", "Foo Fighters", "Arctic Monkeys"],
            Genre::HipHop => &["Kendrick Lamar", "Drake", "J. Cole", "Eminem"],
            Genre::Jazz => &["Norah Jones", "Michael Buble", "Diana Krall", "Gregory Porter"],
            Genre::Classical => &["Yo-Yo Ma", "Lang Lang", "Hilary Hahn"],
            Genre::Electronic => &["Calvin Harris", "Avicii", "Daft Punk", "Marshmello"],
            Genre::RnB => &["The Weeknd", "SZA", "Frank Ocean", "H.E.R."],
            Genre::Indie => &["Bon Iver", "Phoebe Bridgers", "Tame Impala", "The Lumineers"],
            _ => &["Adele", "Bruno Mars", "Billie Eilish", "Sam Smith", "John Legend"],
        },
        Language::Hindi => &["Arijit Singh", "Shreya Ghoshal", "A. R. Rahman", "Sunidhi Chauhan", "Pritam"],
        Language::Spanish => &["Shakira", "Bad Bunny", "Rosalia", "J Balvin"],
        Language::Korean => &["BTS", "BLACKPINK", "IU", "SEVENTEEN"],
        Language::Punjabi => &["Diljit Dosanjh", "AP Dhillon", "Sidhu Moose Wala", "Guru Randhawa"],
        Language::Tamil => &["Anirudh Ravichander", "Sid Sriram", "Shreya Ghoshal", "Yuvan Shankar Raja"],
        Language::Instrumental => &["Ludovico Einaudi", "Max Richter", "Nujabes", "Yiruma", "Hans Zimmer"],
    }
}

fn artist_index(key: &ItemKey, pool_len: usize) -> usize {
    let raw = key.mood.index() * 7
        + key.genre.index() * 3
        + key.language.index() * 2
        + u64::from(key.song);
    (raw % pool_len as u64) as usize
}

fn render(template: &str, artist: &str, key: &ItemKey) -> String {
    template
        .replace("{artist}", artist)
        .replace("{genre}", key.genre.label())
        .replace("{mood_lower}", key.mood.as_str())
        .replace("{mood}", key.mood.label())
}

fn external_link(artist: &str, key: &ItemKey) -> String {
    let query = format!("{} {} {} music", artist, key.genre.label(), key.mood.as_str());
    format!(
        "https://www.youtube.com/results?search_query={}",
        urlencoding::encode(&query)
    )
}

fn build_item(key: ItemKey) -> ContentItem {
    let pool = artists_for(key.genre, key.language);
    let artist = pool[artist_index(&key, pool.len())];

    let energies = key.mood.valid_energy_levels();
    let energy = energies[usize::from(key.song) % energies.len()];

    let template_index = usize::from(key.song) % TITLE_TEMPLATES.len();

    ContentItem {
        id: key.numeric_id(),
        key,
        title: render(TITLE_TEMPLATES[template_index], artist, &key),
        description: render(DESCRIPTION_TEMPLATES[template_index], artist, &key),
        thumbnail: key.genre.thumbnail().to_string(),
        external_link: external_link(artist, &key),
        genre: key.genre,
        language: key.language,
        artist: artist.to_string(),
        energy,
        mood: key.mood,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Energy;

    #[test]
    fn test_catalog_size() {
        let catalog = Catalog::generate();
        // 13 genres × 6 spoken languages, plus 3 genres for instrumental language
        let per_mood = 13 * 6 + 3;
        assert_eq!(
            catalog.len(),
            Mood::ALL.len() * per_mood * SONGS_PER_COMBINATION as usize
        );
    }

    #[test]
    fn test_validity_rule() {
        assert!(is_valid_combination(Genre::Instrumental, Language::Instrumental));
        assert!(is_valid_combination(Genre::Instrumental, Language::Hindi));
        assert!(is_valid_combination(Genre::Classical, Language::Instrumental));
        assert!(is_valid_combination(Genre::LoFi, Language::Instrumental));
        assert!(!is_valid_combination(Genre::Pop, Language::Instrumental));
        assert!(!is_valid_combination(Genre::Bollywood, Language::Instrumental));
        assert!(is_valid_combination(Genre::Pop, Language::English));
    }

    #[test]
    fn test_no_invalid_pairs_generated() {
        let catalog = Catalog::generate();
        assert!(catalog
            .items()
            .iter()
            .all(|item| is_valid_combination(item.genre, item.language)));
        assert!(!catalog
            .items()
            .iter()
            .any(|item| item.genre == Genre::Rock && item.language == Language::Instrumental));
    }

    #[test]
    fn test_ids_are_unique() {
        let catalog = Catalog::generate();
        let ids: HashSet<u64> = catalog.items().iter().map(|item| item.id).collect();
        assert_eq!(ids.len(), catalog.len());

        let keys: HashSet<ItemKey> = catalog.items().iter().map(|item| item.key).collect();
        assert_eq!(keys.len(), catalog.len());
    }

    #[test]
    fn test_generation_is_deterministic() {
        let first = Catalog::generate();
        let second = Catalog::generate();
        assert_eq!(first.items(), second.items());
    }

    #[test]
    fn test_item_fields() {
        let catalog = Catalog::generate();
        // angry (2), jazz (3), korean (3), song 1
        let item = catalog.get(2_030_301).unwrap();
        assert_eq!(item.mood, Mood::Angry);
        assert_eq!(item.genre, Genre::Jazz);
        assert_eq!(item.language, Language::Korean);
        assert_eq!(item.key.song, 1);

        // (2*7 + 3*3 + 3*2 + 1) % 4 = 30 % 4 = 2
        assert_eq!(item.artist, "IU");
        // angry cycles low, high
        assert_eq!(item.energy, Energy::High);
        assert_eq!(item.title, "IU: Jazz for Angry Days");
        assert_eq!(item.thumbnail, "🎷");
        assert!(item
            .external_link
            .starts_with("https://www.youtube.com/results?search_query=IU%20Jazz%20angry"));
    }

    #[test]
    fn test_english_artists_depend_on_genre() {
        let catalog = Catalog::generate();
        let pop = catalog.get(10_000 * Genre::Pop.index()).unwrap();
        let rock = catalog.get(10_000 * Genre::Rock.index()).unwrap();
        assert!(artists_for(Genre::Pop, Language::English).contains(&pop.artist.as_str()));
        assert!(artists_for(Genre::Rock, Language::English).contains(&rock.artist.as_str()));
    }

    #[test]
    fn test_energy_follows_mood() {
        let catalog = Catalog::generate();
        for item in catalog.items() {
            let levels = item.mood.valid_energy_levels();
            assert_eq!(item.energy, levels[usize::from(item.key.song) % levels.len()]);
        }
        assert!(catalog
            .by_mood(Mood::Stressed)
            .all(|item| item.energy == Energy::Low));
        assert!(catalog
            .by_mood(Mood::Excited)
            .all(|item| item.energy == Energy::High));
    }

    #[test]
    fn test_by_mood_stays_in_bucket() {
        let catalog = Catalog::generate();
        let calm: Vec<&ContentItem> = catalog.by_mood(Mood::Calm).collect();
        assert!(!calm.is_empty());
        assert!(calm.iter().all(|item| item.mood == Mood::Calm));
    }

    #[test]
    fn test_from_items_drops_duplicate_ids_per_mood() {
        let generated = Catalog::generate();
        let first = generated.items()[0].clone();
        let second = generated.items()[1].clone();

        let mut duplicate = first.clone();
        duplicate.title = "Shadow copy".to_string();

        let catalog = Catalog::from_items(vec![first.clone(), duplicate, second]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.items()[0], first);
    }

    #[test]
    fn test_shared_catalog_is_memoized() {
        let a = shared() as *const Catalog;
        let b = shared() as *const Catalog;
        assert_eq!(a, b);
    }
}
