//! # Card Editor
//!
//! Editing state and file handling for character cards and world info
//! records, built on the `card_schema` document types.
//!
//! ## Core Components
//!
//! - **form**: the Form Model, one per document kind, plus conversion to and from documents
//! - **sections**: the Dynamic Section Manager for repeatable groups
//! - **persistence**: reading and writing document files
//! - **session**: the application state a shell drives
//! - **shell**: a line-oriented terminal front end
//!
//! ## Lifecycle
//!
//! A document starts empty, changes only through form edits, is replaced
//! wholesale on load and written wholesale on save.

pub mod config;
pub mod error;
pub mod form;
pub mod logging;
pub mod persistence;
pub mod sections;
pub mod session;
pub mod shell;

pub use config::EditorConfig;
pub use error::{EditorError, EditorResult};
pub use form::*;
pub use logging::init_logging;
pub use persistence::{decode, read_document, to_pretty_json, write_document, DocumentError};
pub use sections::*;
pub use session::{AboutInfo, EditorSession, View};
pub use shell::Shell;
