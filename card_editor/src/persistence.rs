//! Persistence boundary - reading and writing documents as JSON files.
//!
//! Files are UTF-8, a single top-level object, two-space indented, with
//! non-ASCII characters written as-is. Writes are plain overwrites.

use std::fs;
use std::path::Path;

use card_schema::Document;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::error::{EditorError, EditorResult};

/// Why a file's text could not be turned into a document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error(transparent)]
    Syntax(#[from] serde_json::Error),

    #[error("expected a JSON object at the top level, found {found}")]
    NotAnObject { found: &'static str },
}

/// Decode document text.
///
/// Only the top level must be an object; everything inside is read
/// leniently by the schema.
pub fn decode<D: Document>(text: &str) -> Result<D, DocumentError> {
    let value: Value = serde_json::from_str(text)?;
    if !value.is_object() {
        return Err(DocumentError::NotAnObject {
            found: json_type_name(&value),
        });
    }
    Ok(serde_json::from_value(value)?)
}

/// Encode a document the way it is written to disk.
pub fn to_pretty_json<D: Document>(document: &D) -> EditorResult<String> {
    serde_json::to_string_pretty(document).map_err(|source| EditorError::Serialize {
        kind: D::KIND,
        source,
    })
}

/// Read and decode a document file.
pub fn read_document<D: Document>(path: &Path) -> EditorResult<D> {
    let text = fs::read_to_string(path).map_err(|source| EditorError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    decode(&text).map_err(|source| {
        let kind = D::KIND;
        warn!(%kind, path = %path.display(), error = %source, "document rejected");
        EditorError::Parse {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Encode and write a document file, returning the written text.
pub fn write_document<D: Document>(path: &Path, document: &D) -> EditorResult<String> {
    let text = to_pretty_json(document)?;
    fs::write(path, &text).map_err(|source| EditorError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    let kind = D::KIND;
    debug!(%kind, path = %path.display(), bytes = text.len(), "document written");
    Ok(text)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use card_schema::{CharacterCard, WorldInfo};

    #[test]
    fn test_decode_rejects_non_objects() {
        assert!(matches!(
            decode::<CharacterCard>("[1, 2]"),
            Err(DocumentError::NotAnObject { found: "an array" })
        ));
        assert!(matches!(
            decode::<WorldInfo>("{\"name\": "),
            Err(DocumentError::Syntax(_))
        ));
    }

    #[test]
    fn test_pretty_json_keeps_non_ascii_and_two_space_indent() {
        let card = CharacterCard::new("林月");
        let text = to_pretty_json(&card).unwrap();

        assert!(text.contains("\"Chinese_name\": \"林月\""));
        assert!(text.contains("\n  \"Japanese_name\""));
        assert!(text.contains("\"服装\""));
        assert!(!text.contains("\\u"));
    }

    #[test]
    fn test_key_order_follows_schema() {
        let text = to_pretty_json(&WorldInfo::new("Aster")).unwrap();
        let name = text.find("\"name\"").unwrap();
        let space = text.find("\"space\"").unwrap();
        let force = text.find("\"force\"").unwrap();
        assert!(name < space && space < force);
    }
}
