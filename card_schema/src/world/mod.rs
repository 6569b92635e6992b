//! World info definitions: a named space with keywords, landmarks and factions.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::document::{Document, DocumentKind};
use crate::lenient;

/// A world info record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldInfo {
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    /// The space this world belongs to.
    #[serde(deserialize_with = "lenient::text")]
    pub space: String,
    #[serde(deserialize_with = "lenient::lines")]
    pub keywords: Vec<String>,
    /// Introduction, one paragraph per entry.
    #[serde(deserialize_with = "lenient::lines")]
    pub info: Vec<String>,
    #[serde(rename = "landmark", deserialize_with = "lenient::lines")]
    pub landmarks: Vec<String>,
    /// Faction name -> faction record, in on-screen order.
    #[serde(rename = "force", deserialize_with = "lenient::entries")]
    pub factions: IndexMap<String, Faction>,
}

impl WorldInfo {
    /// Create an otherwise empty world with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords.push(keyword.into());
        self
    }

    pub fn with_landmark(mut self, landmark: impl Into<String>) -> Self {
        self.landmarks.push(landmark.into());
        self
    }

    /// Add or replace a faction.
    pub fn with_faction(mut self, name: impl Into<String>, faction: Faction) -> Self {
        self.factions.insert(name.into(), faction);
        self
    }
}

impl Document for WorldInfo {
    const KIND: DocumentKind = DocumentKind::WorldInfo;
}

/// A faction (势力) and its members.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Faction {
    #[serde(rename = "member", deserialize_with = "lenient::lines")]
    pub members: Vec<String>,
    #[serde(deserialize_with = "lenient::record")]
    pub info: FactionInfo,
}

impl Faction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_member(mut self, member: impl Into<String>) -> Self {
        self.members.push(member.into());
        self
    }

    pub fn with_description(mut self, line: impl Into<String>) -> Self {
        self.info.description.push(line.into());
        self
    }

    /// Description lines of the faction.
    pub fn description(&self) -> &[String] {
        &self.info.description
    }
}

/// Faction details. The description sits under a fixed sub-key, with
/// `description` accepted when `势力描述` is absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FactionInfo {
    #[serde(rename = "势力描述")]
    pub description: Vec<String>,
}

impl<'de> Deserialize<'de> for FactionInfo {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut fields = lenient::fields(deserializer)?;
        let description = lenient::take_aliased(&mut fields, "势力描述", "description")
            .map(|value| lenient::lines_from_value(&value))
            .unwrap_or_default();
        Ok(Self { description })
    }
}
