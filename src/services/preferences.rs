use crate::models::{Energy, Genre, Intensity, Language, Mood, PreferenceVector};

/// Raw genre selection that restricts results to Bollywood only
pub const BOLLYWOOD_ONLY: &str = "Bollywood";
/// Raw genre selection that enables the free-text genre
pub const OTHER_GENRE: &str = "Other";
/// Raw language selection that restricts results to instrumental tracks
pub const INSTRUMENTAL_ONLY: &str = "Instrumental only";

/// A preference token mapped onto the taxonomy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<T> {
    Known(T),
    /// Trimmed, lower-cased input that did not map to any taxonomy value
    Unrecognized(String),
}

/// Taxonomy values that preference tokens normalize to
pub trait Canonical: Copy + PartialEq + Sized {
    fn slug(self) -> &'static str;

    /// Looks up a compacted key (see [`compact_key`])
    fn from_key(key: &str) -> Option<Self>;
}

impl<T: Canonical> Token<T> {
    pub fn parse(raw: &str) -> Self {
        match T::from_key(&compact_key(raw)) {
            Some(value) => Token::Known(value),
            None => Token::Unrecognized(raw.trim().to_lowercase()),
        }
    }

    pub fn matches(&self, value: T) -> bool {
        match self {
            Token::Known(known) => *known == value,
            Token::Unrecognized(text) => text == value.slug(),
        }
    }

    pub fn known(&self) -> Option<T> {
        match self {
            Token::Known(value) => Some(*value),
            Token::Unrecognized(_) => None,
        }
    }
}

/// Lower-cases and drops separators so "Lo Fi", "lofi" and "lo-fi" compare equal
pub fn compact_key(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_alphanumeric() || *c == '&')
        .flat_map(char::to_lowercase)
        .collect()
}

impl Canonical for Genre {
    fn slug(self) -> &'static str {
        self.as_str()
    }

    fn from_key(key: &str) -> Option<Self> {
        let genre = match key {
            "pop" => Genre::Pop,
            "rock" => Genre::Rock,
            "hiphop" | "rap" => Genre::HipHop,
            "jazz" => Genre::Jazz,
            "classical" | "classic" => Genre::Classical,
            "lofi" | "chill" => Genre::LoFi,
            "electronic" | "electronica" | "edm" => Genre::Electronic,
            "r&b" | "rnb" | "randb" => Genre::RnB,
            "indie" => Genre::Indie,
            "folk" => Genre::Folk,
            "instrumental" => Genre::Instrumental,
            "bollywood" => Genre::Bollywood,
            "hollywood" => Genre::Hollywood,
            _ => return None,
        };
        Some(genre)
    }
}

impl Canonical for Language {
    fn slug(self) -> &'static str {
        self.as_str()
    }

    fn from_key(key: &str) -> Option<Self> {
        let language = match key {
            "english" => Language::English,
            "hindi" | "hinglish" => Language::Hindi,
            "spanish" => Language::Spanish,
            "korean" => Language::Korean,
            "punjabi" => Language::Punjabi,
            "tamil" => Language::Tamil,
            "instrumental" | "instrumentalonly" => Language::Instrumental,
            _ => return None,
        };
        Some(language)
    }
}

impl Canonical for Mood {
    fn slug(self) -> &'static str {
        self.as_str()
    }

    fn from_key(key: &str) -> Option<Self> {
        let mood = match key {
            "happy" | "joy" | "joyful" => Mood::Happy,
            "sad" | "sadness" => Mood::Sad,
            "angry" | "anger" | "disgust" => Mood::Angry,
            "anxious" | "anxiety" | "fear" | "fearful" => Mood::Anxious,
            "stressed" | "stress" => Mood::Stressed,
            "excited" | "surprise" | "surprised" => Mood::Excited,
            "calm" | "relaxed" => Mood::Calm,
            "neutral" => Mood::Neutral,
            _ => return None,
        };
        Some(mood)
    }
}

/// How the genre stage of the strict pass behaves
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenreMode {
    /// No genre selected; the stage is skipped
    Any,
    /// Match any selected genre, or a title containing the custom genre text
    Normal { custom_title: Option<String> },
    /// Only this genre is allowed, regardless of other selections
    Exclusive(Genre),
}

/// How the language stage of the strict pass behaves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageMode {
    Any,
    Normal,
    Exclusive(Language),
}

/// Preferences after mapping every token onto the taxonomy
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedPreferences {
    pub genres: Vec<Token<Genre>>,
    pub languages: Vec<Token<Language>>,
    pub moods: Vec<Token<Mood>>,
    pub intensity: Intensity,
    pub genre_mode: GenreMode,
    pub language_mode: LanguageMode,
}

impl NormalizedPreferences {
    pub fn from_preferences(prefs: &PreferenceVector) -> Self {
        let genre_mode = if prefs.genres.is_empty() {
            GenreMode::Any
        } else if prefs.genres.len() == 1 && prefs.genres[0] == BOLLYWOOD_ONLY {
            GenreMode::Exclusive(Genre::Bollywood)
        } else {
            let custom_title = prefs
                .genres
                .iter()
                .any(|g| g == OTHER_GENRE)
                .then(|| prefs.other_genre.as_deref())
                .flatten()
                .map(|text| text.trim().to_lowercase())
                .filter(|text| !text.is_empty());
            GenreMode::Normal { custom_title }
        };

        let language_mode = if prefs.languages.is_empty() {
            LanguageMode::Any
        } else if prefs.languages.iter().any(|l| l == INSTRUMENTAL_ONLY) {
            LanguageMode::Exclusive(Language::Instrumental)
        } else {
            LanguageMode::Normal
        };

        Self {
            genres: prefs.genres.iter().map(|g| Token::parse(g)).collect(),
            languages: prefs.languages.iter().map(|l| Token::parse(l)).collect(),
            moods: prefs.moods.iter().map(|m| Token::parse(m)).collect(),
            intensity: prefs.intensity,
            genre_mode,
            language_mode,
        }
    }

    /// True when no genre, language or mood was selected
    pub fn is_unset(&self) -> bool {
        self.genres.is_empty() && self.languages.is_empty() && self.moods.is_empty()
    }

    pub fn genre_matches(&self, genre: Genre) -> bool {
        self.genres.iter().any(|token| token.matches(genre))
    }

    pub fn language_matches(&self, language: Language) -> bool {
        self.languages.iter().any(|token| token.matches(language))
    }

    pub fn mood_matches(&self, mood: Mood) -> bool {
        self.moods.iter().any(|token| token.matches(mood))
    }

    pub fn energy_compatible(&self, energy: Energy) -> bool {
        self.intensity.permits(energy)
    }
}

/// Maps a free-form mood (e.g. a detected emotion) onto the taxonomy
pub fn normalize_mood(raw: &str) -> Option<Mood> {
    Token::<Mood>::parse(raw).known()
}
