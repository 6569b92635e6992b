//! Error types for the editor.

use std::path::PathBuf;

use card_schema::DocumentKind;
use thiserror::Error;

use crate::persistence::DocumentError;
use crate::sections::{GroupId, SectionKind};

pub type EditorResult<T> = Result<T, EditorError>;

/// Everything that can go wrong while editing, loading or saving.
///
/// None of these are fatal; the shell reports them and carries on.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("failed to read `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse `{}`: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: DocumentError,
    },

    #[error("failed to write `{}`: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize {kind}: {source}")]
    Serialize {
        kind: DocumentKind,
        source: serde_json::Error,
    },

    #[error("unknown field `{0}`")]
    UnknownField(String),

    #[error("{section} has no group at index {index}")]
    GroupNotFound { section: SectionKind, index: usize },

    #[error("{section} has no group with id {id}")]
    UnknownGroup { section: SectionKind, id: GroupId },

    #[error("a {document} has no {section} section")]
    UnsupportedSection {
        section: SectionKind,
        document: DocumentKind,
    },

    #[error("invalid index `{0}`")]
    InvalidIndex(String),

    #[error("failed to read config `{}`: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config `{}`: {source}", path.display())]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to initialize logging: {0}")]
    Logging(String),
}
