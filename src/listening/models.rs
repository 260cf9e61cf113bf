use serde::{Deserialize, Serialize};
use std::fmt;

/// A single genre label as reported by the upstream listening data.
///
/// Genres are kept as their own type so that a genre value can never be
/// mixed up with an artist or track identifier inside the similarity
/// functions, even though all of them are strings on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenreTag(String);

impl GenreTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GenreTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for GenreTag {
    fn from(tag: &str) -> Self {
        Self(tag.to_string())
    }
}

impl From<String> for GenreTag {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Artist {
    pub id: String,
    pub name: String,
    /// Upstream data may omit the genre list entirely or set it to null;
    /// both read as an empty list.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub genres: Vec<GenreTag>,
    pub popularity: u8,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub artist_name: String,
    pub popularity: u8,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<GenreTag>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let genres: Option<Vec<GenreTag>> = Option::deserialize(deserializer)?;
    Ok(genres.unwrap_or_default())
}
