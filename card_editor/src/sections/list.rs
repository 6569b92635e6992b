//! Ordered group lists and the section operations forms expose.

use indexmap::IndexMap;
use tracing::debug;

use super::{Group, GroupFields, GroupId, SectionKind};
use crate::error::{EditorError, EditorResult};
use card_schema::DocumentKind;

/// An ordered list of groups of one kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sections<T> {
    groups: Vec<Group<T>>,
}

impl<T> Default for Sections<T> {
    fn default() -> Self {
        Self { groups: Vec::new() }
    }
}

impl<T: GroupFields> Sections<T> {
    /// Create an empty section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an empty group and return its ID.
    pub fn add_group(&mut self) -> GroupId {
        self.push(T::default())
    }

    /// Append a pre-filled group and return its ID.
    pub fn push(&mut self, fields: T) -> GroupId {
        let group = Group::new(fields);
        let id = group.id;
        self.groups.push(group);
        id
    }

    /// Remove a group by ID.
    pub fn remove_group(&mut self, id: GroupId) -> Option<T> {
        let index = self.position(id)?;
        Some(self.groups.remove(index).fields)
    }

    /// Remove the group at an on-screen position.
    pub fn remove_at(&mut self, index: usize) -> Option<Group<T>> {
        (index < self.groups.len()).then(|| self.groups.remove(index))
    }

    /// Move a group to a new position. Indices past the end clamp to the end.
    pub fn move_group(&mut self, id: GroupId, new_index: usize) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        let group = self.groups.remove(index);
        let target = new_index.min(self.groups.len());
        self.groups.insert(target, group);
        true
    }

    /// Get group fields by ID.
    pub fn get(&self, id: GroupId) -> Option<&T> {
        self.groups.iter().find(|g| g.id == id).map(|g| &g.fields)
    }

    /// Get mutable group fields by ID.
    pub fn get_mut(&mut self, id: GroupId) -> Option<&mut T> {
        self.groups
            .iter_mut()
            .find(|g| g.id == id)
            .map(|g| &mut g.fields)
    }

    /// Get the group at an on-screen position.
    pub fn at(&self, index: usize) -> Option<&Group<T>> {
        self.groups.get(index)
    }

    pub fn at_mut(&mut self, index: usize) -> Option<&mut Group<T>> {
        self.groups.get_mut(index)
    }

    /// On-screen position of a group.
    pub fn position(&self, id: GroupId) -> Option<usize> {
        self.groups.iter().position(|g| g.id == id)
    }

    /// Iterate groups in on-screen order.
    pub fn iter(&self) -> impl Iterator<Item = &Group<T>> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Drop every group.
    pub fn clear(&mut self) {
        self.groups.clear();
    }

    /// Build a name -> record mapping in on-screen order.
    ///
    /// Blank names are skipped. A repeated name keeps the position of its
    /// first occurrence and the record of its last.
    pub fn collect_named<V, F>(&self, mut record: F) -> IndexMap<String, V>
    where
        F: FnMut(&T) -> V,
    {
        let mut out = IndexMap::new();
        for group in self.groups.iter().filter(|g| !g.fields.is_blank()) {
            out.insert(group.fields.name().to_string(), record(&group.fields));
        }
        out
    }
}

impl<T: GroupFields> FromIterator<T> for Sections<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            groups: iter.into_iter().map(Group::new).collect(),
        }
    }
}

/// Type-erased view of a section, so forms can hand out any of theirs.
pub trait SectionOps {
    fn add(&mut self) -> GroupId;
    fn remove(&mut self, id: GroupId) -> bool;
    fn remove_index(&mut self, index: usize) -> Option<GroupId>;
    fn move_to(&mut self, id: GroupId, index: usize) -> bool;
    fn count(&self) -> usize;
    fn id_at(&self, index: usize) -> Option<GroupId>;
    fn field_keys(&self) -> &'static [&'static str];
    fn field_at(&self, index: usize, key: &str) -> Option<&String>;
    fn field_at_mut(&mut self, index: usize, key: &str) -> Option<&mut String>;
}

impl<T: GroupFields> SectionOps for Sections<T> {
    fn add(&mut self) -> GroupId {
        self.add_group()
    }

    fn remove(&mut self, id: GroupId) -> bool {
        self.remove_group(id).is_some()
    }

    fn remove_index(&mut self, index: usize) -> Option<GroupId> {
        self.remove_at(index).map(|g| g.id)
    }

    fn move_to(&mut self, id: GroupId, index: usize) -> bool {
        self.move_group(id, index)
    }

    fn count(&self) -> usize {
        self.len()
    }

    fn id_at(&self, index: usize) -> Option<GroupId> {
        self.at(index).map(|g| g.id)
    }

    fn field_keys(&self) -> &'static [&'static str] {
        T::FIELDS
    }

    fn field_at(&self, index: usize, key: &str) -> Option<&String> {
        self.at(index).and_then(|g| g.fields.field(key))
    }

    fn field_at_mut(&mut self, index: usize, key: &str) -> Option<&mut String> {
        self.at_mut(index).and_then(|g| g.fields.field_mut(key))
    }
}

/// Runtime add/remove/reorder of groups, addressed by section kind.
///
/// Implementors only say which sections they own; every operation on a kind
/// the form does not own fails with [`EditorError::UnsupportedSection`].
pub trait DynamicSections {
    /// Which document this form edits, for error messages.
    fn document_kind(&self) -> DocumentKind;

    fn section(&self, kind: SectionKind) -> Option<&dyn SectionOps>;

    fn section_mut(&mut self, kind: SectionKind) -> Option<&mut dyn SectionOps>;

    /// Section kinds this form owns, in display order.
    fn section_kinds(&self) -> &'static [SectionKind];

    /// Append an empty group to a section.
    fn add_group(&mut self, kind: SectionKind) -> EditorResult<GroupId> {
        let id = self.owned_section_mut(kind)?.add();
        debug!(section = %kind, group = %id, "group added");
        Ok(id)
    }

    /// Remove a group by ID.
    fn remove_group(&mut self, kind: SectionKind, id: GroupId) -> EditorResult<()> {
        if !self.owned_section_mut(kind)?.remove(id) {
            return Err(EditorError::UnknownGroup { section: kind, id });
        }
        debug!(section = %kind, group = %id, "group removed");
        Ok(())
    }

    /// Remove the group at an on-screen position.
    fn remove_group_at(&mut self, kind: SectionKind, index: usize) -> EditorResult<GroupId> {
        let id = self
            .owned_section_mut(kind)?
            .remove_index(index)
            .ok_or(EditorError::GroupNotFound { section: kind, index })?;
        debug!(section = %kind, group = %id, index, "group removed");
        Ok(id)
    }

    /// Move the group at `from` to position `to`.
    fn move_group(&mut self, kind: SectionKind, from: usize, to: usize) -> EditorResult<()> {
        let section = self.owned_section_mut(kind)?;
        let id = section
            .id_at(from)
            .ok_or(EditorError::GroupNotFound { section: kind, index: from })?;
        section.move_to(id, to);
        Ok(())
    }

    /// Number of groups in a section.
    fn group_count(&self, kind: SectionKind) -> EditorResult<usize> {
        self.section(kind)
            .map(|s| s.count())
            .ok_or(EditorError::UnsupportedSection {
                section: kind,
                document: self.document_kind(),
            })
    }

    #[doc(hidden)]
    fn owned_section_mut(&mut self, kind: SectionKind) -> EditorResult<&mut dyn SectionOps> {
        let document = self.document_kind();
        self.section_mut(kind)
            .ok_or(EditorError::UnsupportedSection { section: kind, document })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Clone, PartialEq, Eq)]
    struct Tagged {
        name: String,
        note: String,
    }

    impl Tagged {
        fn new(name: &str, note: &str) -> Self {
            Self {
                name: name.to_string(),
                note: note.to_string(),
            }
        }
    }

    impl GroupFields for Tagged {
        const FIELDS: &'static [&'static str] = &["name", "note"];

        fn name(&self) -> &str {
            &self.name
        }

        fn field(&self, key: &str) -> Option<&String> {
            match key {
                "name" => Some(&self.name),
                "note" => Some(&self.note),
                _ => None,
            }
        }

        fn field_mut(&mut self, key: &str) -> Option<&mut String> {
            match key {
                "name" => Some(&mut self.name),
                "note" => Some(&mut self.note),
                _ => None,
            }
        }
    }

    fn names(sections: &Sections<Tagged>) -> Vec<String> {
        sections.iter().map(|g| g.fields.name.clone()).collect()
    }

    #[test]
    fn test_add_and_remove() {
        let mut sections = Sections::<Tagged>::new();
        let a = sections.add_group();
        let b = sections.push(Tagged::new("b", ""));

        assert_eq!(sections.len(), 2);
        assert_eq!(sections.position(b), Some(1));

        assert!(sections.remove_group(a).is_some());
        assert!(sections.remove_group(a).is_none());
        assert_eq!(sections.position(b), Some(0));
        assert_eq!(sections.get(b).map(|t| t.name.as_str()), Some("b"));
    }

    #[test]
    fn test_remove_at_out_of_range() {
        let mut sections: Sections<Tagged> = vec![Tagged::new("a", "")].into_iter().collect();
        assert!(sections.remove_at(3).is_none());
        assert_eq!(sections.len(), 1);
    }

    #[test]
    fn test_move_group() {
        let mut sections: Sections<Tagged> = ["a", "b", "c"]
            .into_iter()
            .map(|n| Tagged::new(n, ""))
            .collect();

        let c = sections.at(2).unwrap().id;
        assert!(sections.move_group(c, 0));
        assert_eq!(names(&sections), vec!["c", "a", "b"]);

        assert!(sections.move_group(c, 99));
        assert_eq!(names(&sections), vec!["a", "b", "c"]);

        assert!(!sections.move_group(GroupId::nil(), 0));
    }

    #[test]
    fn test_collect_named_skips_blank_and_last_wins() {
        let sections: Sections<Tagged> = vec![
            Tagged::new("Empire", "first"),
            Tagged::new("", "ignored"),
            Tagged::new("   ", "spaces"),
            Tagged::new("Guild", "guild"),
            Tagged::new("Empire", "second"),
        ]
        .into_iter()
        .collect();

        let out = sections.collect_named(|t| t.note.clone());
        let keys: Vec<_> = out.keys().cloned().collect();
        assert_eq!(keys, vec!["Empire", "   ", "Guild"]);
        assert_eq!(out["Empire"], "second");
    }

    #[test]
    fn test_section_ops_field_access() {
        let mut sections: Sections<Tagged> = vec![Tagged::new("a", "x")].into_iter().collect();
        let ops: &mut dyn SectionOps = &mut sections;

        assert_eq!(ops.field_keys(), &["name", "note"]);
        *ops.field_at_mut(0, "note").unwrap() = "y".to_string();
        assert_eq!(ops.field_at(0, "note").map(String::as_str), Some("y"));
        assert!(ops.field_at(0, "missing").is_none());
        assert!(ops.field_at(1, "name").is_none());
    }
}
