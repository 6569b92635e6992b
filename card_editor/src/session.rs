//! Editor session - the application state behind the shell.
//!
//! The session owns both panels and knows which one is showing. Loading is
//! all-or-nothing: the file is read and decoded into a fresh document first,
//! and the panel is only replaced once that succeeded.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use card_schema::DocumentKind;
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::EditorResult;
use crate::form::{CharacterForm, FormModel, Panel, WorldForm};
use crate::persistence;
use crate::sections::DynamicSections;

/// Which panel is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Character,
    World,
}

impl View {
    /// The document kind edited in this view.
    pub fn document_kind(&self) -> DocumentKind {
        match self {
            View::Character => DocumentKind::CharacterCard,
            View::World => DocumentKind::WorldInfo,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            View::Character => "character",
            View::World => "world",
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "character" | "card" | "char" => Ok(View::Character),
            "world" | "worldinfo" => Ok(View::World),
            other => Err(format!("unknown view `{other}` (expected `character` or `world`)")),
        }
    }
}

/// Static application information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutInfo {
    pub title: &'static str,
    pub version: &'static str,
    pub authors: &'static str,
    pub copyright: &'static str,
    pub disclaimer: &'static str,
}

impl std::fmt::Display for AboutInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "version: {}", self.version)?;
        writeln!(f, "authors: {}", self.authors)?;
        writeln!(f, "{}", self.copyright)?;
        write!(f, "{}", self.disclaimer)
    }
}

/// The single in-memory editing state.
#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    character: CharacterForm,
    world: WorldForm,
    view: View,
    character_path: Option<PathBuf>,
    world_path: Option<PathBuf>,
}

impl EditorSession {
    /// Start with two empty documents, showing `view`.
    pub fn new(view: View) -> Self {
        Self {
            view,
            ..Default::default()
        }
    }

    pub fn character(&self) -> &CharacterForm {
        &self.character
    }

    pub fn character_mut(&mut self) -> &mut CharacterForm {
        &mut self.character
    }

    pub fn world(&self) -> &WorldForm {
        &self.world
    }

    pub fn active_view(&self) -> View {
        self.view
    }

    pub fn switch_view(&mut self, view: View) {
        if self.view != view {
            info!(from = %self.view, to = %view, "view switched");
        }
        self.view = view;
    }

    /// The panel currently showing.
    pub fn active_panel(&self) -> &dyn Panel {
        match self.view {
            View::Character => &self.character,
            View::World => &self.world,
        }
    }

    pub fn active_panel_mut(&mut self) -> &mut dyn Panel {
        match self.view {
            View::Character => &mut self.character,
            View::World => &mut self.world,
        }
    }

    /// Path the given document was last loaded from or saved to.
    pub fn current_path(&self, kind: DocumentKind) -> Option<&Path> {
        match kind {
            DocumentKind::CharacterCard => self.character_path.as_deref(),
            DocumentKind::WorldInfo => self.world_path.as_deref(),
        }
    }

    /// Replace the character panel with a card read from `path`.
    pub fn load_character_card(&mut self, path: &Path) -> EditorResult<()> {
        load_into(&mut self.character, path)?;
        self.character_path = Some(path.to_path_buf());
        Ok(())
    }

    /// Save the character panel to `path`, returning the written text.
    pub fn save_character_card(&mut self, path: &Path) -> EditorResult<String> {
        let text = save_from(&self.character, path)?;
        self.character_path = Some(path.to_path_buf());
        Ok(text)
    }

    /// Replace the world panel with world info read from `path`.
    pub fn load_world_info(&mut self, path: &Path) -> EditorResult<()> {
        load_into(&mut self.world, path)?;
        self.world_path = Some(path.to_path_buf());
        Ok(())
    }

    /// Save the world panel to `path`, returning the written text.
    pub fn save_world_info(&mut self, path: &Path) -> EditorResult<String> {
        let text = save_from(&self.world, path)?;
        self.world_path = Some(path.to_path_buf());
        Ok(text)
    }

    /// Load whichever document kind is asked for.
    pub fn load(&mut self, kind: DocumentKind, path: &Path) -> EditorResult<()> {
        match kind {
            DocumentKind::CharacterCard => self.load_character_card(path),
            DocumentKind::WorldInfo => self.load_world_info(path),
        }
    }

    /// Save whichever document kind is asked for.
    pub fn save(&mut self, kind: DocumentKind, path: &Path) -> EditorResult<String> {
        match kind {
            DocumentKind::CharacterCard => self.save_character_card(path),
            DocumentKind::WorldInfo => self.save_world_info(path),
        }
    }

    /// Start the panel for `view` over with an empty document.
    pub fn reset(&mut self, view: View) {
        match view {
            View::Character => {
                self.character = CharacterForm::default();
                self.character_path = None;
            }
            View::World => {
                self.world = WorldForm::default();
                self.world_path = None;
            }
        }
        info!(view = %view, "panel reset");
    }

    pub fn about() -> AboutInfo {
        AboutInfo {
            title: "Character Card & World Info Editor",
            version: env!("CARGO_PKG_VERSION"),
            authors: env!("CARGO_PKG_AUTHORS"),
            copyright: "© 2025 All rights reserved",
            disclaimer: "For learning and exchange only. Redistribution or resale without permission is prohibited.",
        }
    }
}

fn load_into<F>(form: &mut F, path: &Path) -> EditorResult<()>
where
    F: FormModel + DynamicSections,
{
    let kind = form.document_kind();
    info!(%kind, path = %path.display(), "loading document");

    let document = match persistence::read_document::<F::Document>(path) {
        Ok(document) => document,
        Err(err) => {
            warn!(%kind, path = %path.display(), error = %err, "load failed, keeping current state");
            return Err(err);
        }
    };

    form.populate(&document);
    info!(%kind, groups = total_groups(form), "document loaded");
    Ok(())
}

fn save_from<F>(form: &F, path: &Path) -> EditorResult<String>
where
    F: FormModel + DynamicSections,
{
    let kind = form.document_kind();
    let text = persistence::write_document(path, &form.to_document()).inspect_err(|err| {
        warn!(%kind, path = %path.display(), error = %err, "save failed");
    })?;
    info!(%kind, path = %path.display(), groups = total_groups(form), "document saved");
    Ok(text)
}

fn total_groups<F: DynamicSections>(form: &F) -> usize {
    form.section_kinds()
        .iter()
        .filter_map(|&kind| form.group_count(kind).ok())
        .sum()
}
