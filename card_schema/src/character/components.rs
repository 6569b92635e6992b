//! Nested records of a character card.

use serde::{Deserialize, Deserializer, Serialize};

use crate::lenient;

/// Eight fixed appearance fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Appearance {
    #[serde(deserialize_with = "lenient::text")]
    pub height: String,
    #[serde(deserialize_with = "lenient::text")]
    pub hair_color: String,
    #[serde(deserialize_with = "lenient::text")]
    pub hairstyle: String,
    #[serde(deserialize_with = "lenient::text")]
    pub eyes: String,
    #[serde(deserialize_with = "lenient::text")]
    pub nose: String,
    #[serde(deserialize_with = "lenient::text")]
    pub lips: String,
    #[serde(deserialize_with = "lenient::text")]
    pub skin: String,
    #[serde(deserialize_with = "lenient::text")]
    pub body: String,
}

/// Attire wrapper. The clothing record sits one level down under `服装`.
///
/// Older cards wrote the record under `clothing`; that key is still read when
/// `服装` is absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Attire {
    #[serde(rename = "服装")]
    pub clothing: Clothing,
}

impl<'de> Deserialize<'de> for Attire {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut fields = lenient::fields(deserializer)?;
        let clothing = lenient::take_aliased(&mut fields, "服装", "clothing")
            .map(lenient::record_from_value)
            .unwrap_or_default();
        Ok(Self { clothing })
    }
}

/// Six fixed clothing fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Clothing {
    #[serde(deserialize_with = "lenient::text")]
    pub tops: String,
    #[serde(deserialize_with = "lenient::text")]
    pub bottoms: String,
    #[serde(deserialize_with = "lenient::text")]
    pub shoes: String,
    #[serde(deserialize_with = "lenient::text")]
    pub socks: String,
    #[serde(deserialize_with = "lenient::text")]
    pub underwears: String,
    #[serde(deserialize_with = "lenient::text")]
    pub accessories: String,
}

/// A named personality trait with examples.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalTrait {
    #[serde(deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(deserialize_with = "lenient::lines")]
    pub dialogue_examples: Vec<String>,
    #[serde(deserialize_with = "lenient::lines")]
    pub behavior_examples: Vec<String>,
}

impl PersonalTrait {
    /// Create a trait with a description and no examples.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Default::default()
        }
    }

    /// Append a dialogue example.
    pub fn with_dialogue(mut self, line: impl Into<String>) -> Self {
        self.dialogue_examples.push(line.into());
        self
    }

    /// Append a behavior example.
    pub fn with_behavior(mut self, line: impl Into<String>) -> Self {
        self.behavior_examples.push(line.into());
        self
    }
}

/// How the character relates to another person.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Relationship {
    #[serde(deserialize_with = "lenient::lines")]
    pub description: Vec<String>,
    /// Notable features of the other person.
    #[serde(deserialize_with = "lenient::lines")]
    pub features: Vec<String>,
}

impl Relationship {
    pub fn with_description(mut self, line: impl Into<String>) -> Self {
        self.description.push(line.into());
        self
    }

    pub fn with_feature(mut self, line: impl Into<String>) -> Self {
        self.features.push(line.into());
        self
    }
}

/// What the character does across six slots of the day.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyRoutine {
    #[serde(deserialize_with = "lenient::text")]
    pub early_morning: String,
    #[serde(deserialize_with = "lenient::text")]
    pub morning: String,
    #[serde(deserialize_with = "lenient::text")]
    pub afternoon: String,
    #[serde(deserialize_with = "lenient::text")]
    pub evening: String,
    #[serde(deserialize_with = "lenient::text")]
    pub night: String,
    #[serde(deserialize_with = "lenient::text")]
    pub late_night: String,
}
