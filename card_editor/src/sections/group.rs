//! Group identity and the field contract every group type fulfils.

use std::str::FromStr;

use uuid::Uuid;

/// Unique identifier for a group while it lives in a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(pub Uuid);

impl GroupId {
    /// Create a new random group ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a nil group ID (useful in tests and placeholders).
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for GroupId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Categories of repeatable groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Traits,
    Relationships,
    Landmarks,
    Factions,
}

impl SectionKind {
    pub const ALL: [SectionKind; 4] = [
        SectionKind::Traits,
        SectionKind::Relationships,
        SectionKind::Landmarks,
        SectionKind::Factions,
    ];

    /// Name used in field paths, e.g. `traits.0.name`.
    pub fn label(&self) -> &'static str {
        match self {
            SectionKind::Traits => "traits",
            SectionKind::Relationships => "relationships",
            SectionKind::Landmarks => "landmarks",
            SectionKind::Factions => "factions",
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Error returned when a section name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section `{0}`")]
pub struct UnknownSection(pub String);

impl FromStr for SectionKind {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "traits" | "trait" => Ok(SectionKind::Traits),
            "relationships" | "relationship" => Ok(SectionKind::Relationships),
            "landmarks" | "landmark" => Ok(SectionKind::Landmarks),
            "factions" | "faction" | "force" => Ok(SectionKind::Factions),
            _ => Err(UnknownSection(s.to_string())),
        }
    }
}

/// The editable text fields of one group.
///
/// Every group has a name field; it becomes the key (or list entry) in the
/// saved document and a blank name means the group is not saved at all.
pub trait GroupFields: Default {
    /// Field keys in display order. The first one is always `name`.
    const FIELDS: &'static [&'static str];

    /// The name field.
    fn name(&self) -> &str;

    fn field(&self, key: &str) -> Option<&String>;

    fn field_mut(&mut self, key: &str) -> Option<&mut String>;

    /// Whether the group would be dropped on save. Only an empty name counts;
    /// whitespace is a name like any other.
    fn is_blank(&self) -> bool {
        self.name().is_empty()
    }
}

/// One group in a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<T> {
    pub id: GroupId,
    pub fields: T,
}

impl<T> Group<T> {
    pub fn new(fields: T) -> Self {
        Self {
            id: GroupId::new(),
            fields,
        }
    }
}
