//! Common behavior shared by both document kinds.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// The two kinds of document the editor can open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    CharacterCard,
    WorldInfo,
}

impl DocumentKind {
    /// Human-readable label used in messages.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::CharacterCard => "character card",
            DocumentKind::WorldInfo => "world info",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A top-level document that can be persisted as a single JSON object.
pub trait Document: Serialize + DeserializeOwned + Default {
    const KIND: DocumentKind;
}
