use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Mood bucket a content item is generated for.
///
/// Declaration order is significant: the index feeds into item ids.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Angry,
    Anxious,
    Stressed,
    Excited,
    Calm,
    Neutral,
}

impl Mood {
    pub const ALL: [Mood; 8] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Angry,
        Mood::Anxious,
        Mood::Stressed,
        Mood::Excited,
        Mood::Calm,
        Mood::Neutral,
    ];

    pub fn index(self) -> u64 {
        self as u64
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Angry => "angry",
            Mood::Anxious => "anxious",
            Mood::Stressed => "stressed",
            Mood::Excited => "excited",
            Mood::Calm => "calm",
            Mood::Neutral => "neutral",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Angry => "Angry",
            Mood::Anxious => "Anxious",
            Mood::Stressed => "Stressed",
            Mood::Excited => "Excited",
            Mood::Calm => "Calm",
            Mood::Neutral => "Neutral",
        }
    }

    /// Energy levels an item of this mood may carry, in the cyclic order
    /// used when assigning energy by song index.
    pub fn valid_energy_levels(self) -> &'static [Energy] {
        match self {
            Mood::Happy => &[Energy::Medium, Energy::High],
            Mood::Sad => &[Energy::Low],
            Mood::Angry => &[Energy::Low, Energy::High],
            Mood::Anxious => &[Energy::Low, Energy::Medium],
            Mood::Stressed => &[Energy::Low],
            Mood::Excited => &[Energy::High],
            Mood::Calm => &[Energy::Low],
            Mood::Neutral => &[Energy::Low, Energy::Medium, Energy::High],
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Genre {
    #[serde(rename = "pop")]
    Pop,
    #[serde(rename = "rock")]
    Rock,
    #[serde(rename = "hip-hop")]
    HipHop,
    #[serde(rename = "jazz")]
    Jazz,
    #[serde(rename = "classical")]
    Classical,
    #[serde(rename = "lo-fi")]
    LoFi,
    #[serde(rename = "electronic")]
    Electronic,
    #[serde(rename = "r&b")]
    RnB,
    #[serde(rename = "indie")]
    Indie,
    #[serde(rename = "folk")]
    Folk,
    #[serde(rename = "instrumental")]
    Instrumental,
    #[serde(rename = "bollywood")]
    Bollywood,
    #[serde(rename = "hollywood")]
    Hollywood,
}

impl Genre {
    pub const ALL: [Genre; 13] = [
        Genre::Pop,
        Genre::Rock,
        Genre::HipHop,
        Genre::Jazz,
        Genre::Classical,
        Genre::LoFi,
        Genre::Electronic,
        Genre::RnB,
        Genre::Indie,
        Genre::Folk,
        Genre::Instrumental,
        Genre::Bollywood,
        Genre::Hollywood,
    ];

    pub fn index(self) -> u64 {
        self as u64
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Genre::Pop => "pop",
            Genre::Rock => "rock",
            Genre::HipHop => "hip-hop",
            Genre::Jazz => "jazz",
            Genre::Classical => "classical",
            Genre::LoFi => "lo-fi",
            Genre::Electronic => "electronic",
            Genre::RnB => "r&b",
            Genre::Indie => "indie",
            Genre::Folk => "folk",
            Genre::Instrumental => "instrumental",
            Genre::Bollywood => "bollywood",
            Genre::Hollywood => "hollywood",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Genre::Pop => "Pop",
            Genre::Rock => "Rock",
            Genre::HipHop => "Hip-Hop",
            Genre::Jazz => "Jazz",
            Genre::Classical => "Classical",
            Genre::LoFi => "Lo-Fi",
            Genre::Electronic => "Electronic",
            Genre::RnB => "R&B",
            Genre::Indie => "Indie",
            Genre::Folk => "Folk",
            Genre::Instrumental => "Instrumental",
            Genre::Bollywood => "Bollywood",
            Genre::Hollywood => "Hollywood",
        }
    }

    /// Symbol shown as the item thumbnail
    pub fn thumbnail(self) -> &'static str {
        match self {
            Genre::Pop => "🎤",
            Genre::Rock => "🎸",
            Genre::HipHop => "🎧",
            Genre::Jazz => "🎷",
            Genre::Classical => "🎻",
            Genre::LoFi => "📻",
            Genre::Electronic => "🎛️",
            Genre::RnB => "💿",
            Genre::Indie => "🌿",
            Genre::Folk => "🪕",
            Genre::Instrumental => "🎹",
            Genre::Bollywood => "🎬",
            Genre::Hollywood => "🎞️",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Hindi,
    Spanish,
    Korean,
    Punjabi,
    Tamil,
    Instrumental,
}

impl Language {
    pub const ALL: [Language; 7] = [
        Language::English,
        Language::Hindi,
        Language::Spanish,
        Language::Korean,
        Language::Punjabi,
        Language::Tamil,
        Language::Instrumental,
    ];

    pub fn index(self) -> u64 {
        self as u64
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Hindi => "hindi",
            Language::Spanish => "spanish",
            Language::Korean => "korean",
            Language::Punjabi => "punjabi",
            Language::Tamil => "tamil",
            Language::Instrumental => "instrumental",
        }
    }
}

/// Energy level of a single content item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Energy {
    Low,
    Medium,
    High,
}

impl Energy {
    pub const ALL: [Energy; 3] = [Energy::Low, Energy::Medium, Energy::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Energy::Low => "low",
            Energy::Medium => "medium",
            Energy::High => "high",
        }
    }
}

/// How intense the user wants their music to be
///
/// Compatibility with item energy is monotonic rather than symmetric: a
/// higher intensity widens the accepted energy range downwards, it never
/// excludes calmer items.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    #[default]
    Medium,
    High,
}

impl Intensity {
    pub const ALL: [Intensity; 3] = [Intensity::Low, Intensity::Medium, Intensity::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Intensity::Low => "low",
            Intensity::Medium => "medium",
            Intensity::High => "high",
        }
    }

    /// Highest item energy this intensity accepts
    fn ceiling(self) -> Energy {
        match self {
            Intensity::Low => Energy::Low,
            Intensity::Medium => Energy::Medium,
            Intensity::High => Energy::High,
        }
    }

    pub fn permits(self, energy: Energy) -> bool {
        energy <= self.ceiling()
    }
}

macro_rules! impl_display_as_str {
    ($($ty:ty),*) => {
        $(
            impl Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{}", self.as_str())
                }
            }
        )*
    };
}

impl_display_as_str!(Mood, Genre, Language, Energy, Intensity);
