//! Character card definitions.

mod components;

pub use components::*;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::document::{Document, DocumentKind};
use crate::lenient;

/// Gender as written on a card. The three presets are offered by the editor,
/// but any free text is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Gender {
    #[default]
    Unspecified,
    Female,
    Male,
    Other,
    Custom(String),
}

impl Gender {
    /// The preset values offered for selection.
    pub const PRESETS: [&'static str; 3] = ["female", "male", "other"];

    /// Text form as stored in the document.
    pub fn as_str(&self) -> &str {
        match self {
            Gender::Unspecified => "",
            Gender::Female => "female",
            Gender::Male => "male",
            Gender::Other => "other",
            Gender::Custom(s) => s,
        }
    }
}

impl From<String> for Gender {
    fn from(text: String) -> Self {
        match text.as_str() {
            "" => Gender::Unspecified,
            "female" => Gender::Female,
            "male" => Gender::Male,
            "other" => Gender::Other,
            _ => Gender::Custom(text),
        }
    }
}

impl From<&str> for Gender {
    fn from(text: &str) -> Self {
        Gender::from(text.to_string())
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Gender {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Gender {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        lenient::text(deserializer).map(Gender::from)
    }
}

/// A complete character card.
///
/// Field order here is the key order written to disk.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterCard {
    #[serde(rename = "Chinese_name", deserialize_with = "lenient::text")]
    pub chinese_name: String,
    #[serde(rename = "Japanese_name", deserialize_with = "lenient::text")]
    pub japanese_name: String,
    pub gender: Gender,
    /// Age in years, kept as text the way it was typed.
    #[serde(deserialize_with = "lenient::text")]
    pub age: String,
    #[serde(deserialize_with = "lenient::lines")]
    pub background: Vec<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub identity: String,
    #[serde(deserialize_with = "lenient::record")]
    pub appearance: Appearance,
    #[serde(deserialize_with = "lenient::record")]
    pub attire: Attire,
    #[serde(rename = "MBTI_personality", deserialize_with = "lenient::text")]
    pub personality_type: String,
    /// Trait name -> trait record, in on-screen order.
    #[serde(deserialize_with = "lenient::entries")]
    pub personal_traits: IndexMap<String, PersonalTrait>,
    /// Person name -> relationship record, in on-screen order.
    #[serde(rename = "relationship", deserialize_with = "lenient::entries")]
    pub relationships: IndexMap<String, Relationship>,
    #[serde(deserialize_with = "lenient::lines")]
    pub likes: Vec<String>,
    #[serde(deserialize_with = "lenient::lines")]
    pub dislikes: Vec<String>,
    #[serde(deserialize_with = "lenient::record")]
    pub daily_routine: DailyRoutine,
}

impl CharacterCard {
    /// MBTI presets offered by the editor. Free text is also accepted.
    pub const PERSONALITY_PRESETS: [&'static str; 5] = ["INFP", "INTJ", "ENFJ", "ISTP", "其他类型"];

    /// Create an otherwise empty card with the given Chinese name.
    pub fn new(chinese_name: impl Into<String>) -> Self {
        Self {
            chinese_name: chinese_name.into(),
            ..Default::default()
        }
    }

    /// Add or replace a personal trait.
    pub fn with_trait(mut self, name: impl Into<String>, personal_trait: PersonalTrait) -> Self {
        self.personal_traits.insert(name.into(), personal_trait);
        self
    }

    /// Add or replace a relationship.
    pub fn with_relationship(mut self, name: impl Into<String>, relationship: Relationship) -> Self {
        self.relationships.insert(name.into(), relationship);
        self
    }
}

impl Document for CharacterCard {
    const KIND: DocumentKind = DocumentKind::CharacterCard;
}
