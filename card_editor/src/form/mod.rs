//! Form Model - the editable in-memory mirror of a document.
//!
//! A form holds exactly what the widgets hold: plain strings for scalar
//! fields, newline-joined text for line lists, and one [`Sections`] list per
//! repeatable category. Converting to and from the schema types is where
//! blank lines and blank-named groups get dropped.
//!
//! Fields are addressed by dotted paths:
//! - fixed fields: `chinese_name`, `appearance.hair_color`, `routine.night`
//! - group fields: `<section>.<index>.<key>`, e.g. `traits.0.description`
//!
//! [`Sections`]: crate::sections::Sections

mod character;
pub mod lines;
mod world;

pub use character::*;
pub use world::*;

use card_schema::Document;

use crate::error::{EditorError, EditorResult};
use crate::persistence;
use crate::sections::{DynamicSections, SectionKind};

/// Conversion between a form and its document.
pub trait FormModel: Default {
    type Document: Document;

    /// Replace the whole form with the contents of `document`.
    ///
    /// Existing groups are discarded, never merged.
    fn populate(&mut self, document: &Self::Document);

    /// Snapshot the current form state as a document.
    fn to_document(&self) -> Self::Document;

    /// Build a fresh form from a document.
    fn from_document(document: &Self::Document) -> Self {
        let mut form = Self::default();
        form.populate(document);
        form
    }
}

/// Access to the fixed (non-repeatable) text fields of a form.
pub trait FieldAccess {
    /// Paths of the fixed fields in display order.
    fn fixed_field_paths(&self) -> &'static [&'static str];

    fn fixed_field(&self, path: &str) -> Option<&String>;

    fn fixed_field_mut(&mut self, path: &str) -> Option<&mut String>;
}

/// A parsed field path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPath<'a> {
    Fixed(&'a str),
    Group {
        section: SectionKind,
        index: usize,
        key: &'a str,
    },
}

impl<'a> FieldPath<'a> {
    /// Parse a dotted path. Anything not starting with a section name is a
    /// fixed field path.
    pub fn parse(path: &'a str) -> EditorResult<Self> {
        let mut parts = path.splitn(3, '.');
        let head = parts.next().unwrap_or_default();

        let Ok(section) = head.parse::<SectionKind>() else {
            return Ok(FieldPath::Fixed(path));
        };

        match (parts.next(), parts.next()) {
            (Some(index), Some(key)) => {
                let index = index
                    .parse()
                    .map_err(|_| EditorError::InvalidIndex(index.to_string()))?;
                Ok(FieldPath::Group {
                    section,
                    index,
                    key,
                })
            }
            _ => Err(EditorError::UnknownField(path.to_string())),
        }
    }
}

/// An editor panel: one form with field paths and dynamic sections.
///
/// Object safe, so the session can hand out whichever panel is active.
pub trait Panel: FieldAccess + DynamicSections {
    /// Serialize the current state as the text that would be saved.
    fn document_json(&self) -> EditorResult<String>;

    /// Read any field by path.
    fn field(&self, path: &str) -> EditorResult<&str> {
        match FieldPath::parse(path)? {
            FieldPath::Fixed(p) => self
                .fixed_field(p)
                .map(String::as_str)
                .ok_or_else(|| EditorError::UnknownField(path.to_string())),
            FieldPath::Group {
                section,
                index,
                key,
            } => {
                let ops = self.section(section).ok_or(EditorError::UnsupportedSection {
                    section,
                    document: self.document_kind(),
                })?;
                if index >= ops.count() {
                    return Err(EditorError::GroupNotFound { section, index });
                }
                ops.field_at(index, key)
                    .map(String::as_str)
                    .ok_or_else(|| EditorError::UnknownField(path.to_string()))
            }
        }
    }

    /// Overwrite any field by path.
    fn set_field(&mut self, path: &str, value: &str) -> EditorResult<()> {
        let slot = match FieldPath::parse(path)? {
            FieldPath::Fixed(p) => self.fixed_field_mut(p),
            FieldPath::Group {
                section,
                index,
                key,
            } => {
                let ops = self.owned_section_mut(section)?;
                if index >= ops.count() {
                    return Err(EditorError::GroupNotFound { section, index });
                }
                ops.field_at_mut(index, key)
            }
        };

        let slot = slot.ok_or_else(|| EditorError::UnknownField(path.to_string()))?;
        *slot = value.to_string();
        Ok(())
    }

    /// Every addressable path, fixed fields first, then each group's fields.
    fn field_paths(&self) -> Vec<String> {
        let mut paths: Vec<String> = self
            .fixed_field_paths()
            .iter()
            .map(|p| p.to_string())
            .collect();

        for &kind in self.section_kinds() {
            if let Some(ops) = self.section(kind) {
                for index in 0..ops.count() {
                    for key in ops.field_keys() {
                        paths.push(format!("{kind}.{index}.{key}"));
                    }
                }
            }
        }
        paths
    }
}

impl<F> Panel for F
where
    F: FormModel + FieldAccess + DynamicSections,
{
    fn document_json(&self) -> EditorResult<String> {
        persistence::to_pretty_json(&self.to_document())
    }
}
