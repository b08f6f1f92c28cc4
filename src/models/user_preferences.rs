use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::Intensity;

/// User preferences that drive recommendations
///
/// Owned by the user profile; the engine only reads it. Token lists hold the
/// raw strings the user picked, since some override rules look at the literal
/// input before normalization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PreferenceVector {
    #[serde(default, deserialize_with = "lenient_tokens")]
    pub genres: Vec<String>,
    #[serde(default, deserialize_with = "lenient_tokens")]
    pub languages: Vec<String>,
    #[serde(default, deserialize_with = "lenient_tokens")]
    pub moods: Vec<String>,
    #[serde(default, deserialize_with = "lenient_intensity")]
    pub intensity: Intensity,
    /// Free-text genre used together with the "Other" genre option
    #[serde(default, deserialize_with = "lenient_text")]
    pub other_genre: Option<String>,
}

impl PreferenceVector {
    /// Creates empty preferences
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = languages.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_moods<I, S>(mut self, moods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.moods = moods.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_intensity(mut self, intensity: Intensity) -> Self {
        self.intensity = intensity;
        self
    }

    pub fn with_other_genre(mut self, other: impl Into<String>) -> Self {
        self.other_genre = Some(other.into());
        self
    }

    /// True when no genre, language or mood has been selected
    pub fn is_empty(&self) -> bool {
        self.genres.is_empty() && self.languages.is_empty() && self.moods.is_empty()
    }
}

/// Accepts any JSON value; only an array contributes, and only its string
/// elements. Anything else becomes an empty list.
fn lenient_tokens<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let tokens = match value {
        Value::Array(values) => values
            .into_iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };
    Ok(tokens)
}

fn lenient_intensity<'de, D>(deserializer: D) -> Result<Intensity, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let intensity = match value.as_str().map(|s| s.trim().to_lowercase()) {
        Some(s) if s == "low" => Intensity::Low,
        Some(s) if s == "medium" => Intensity::Medium,
        Some(s) if s == "high" => Intensity::High,
        _ => Intensity::default(),
    };
    Ok(intensity)
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        _ => None,
    })
}
