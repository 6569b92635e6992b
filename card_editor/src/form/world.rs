//! World info form.

use card_schema::{DocumentKind, Faction, FactionInfo, WorldInfo};

use super::lines::{join_lines, split_lines};
use super::{FieldAccess, FormModel};
use crate::sections::{DynamicSections, GroupFields, SectionKind, SectionOps, Sections};

/// A landmark entry: just a name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LandmarkFields {
    pub name: String,
}

impl GroupFields for LandmarkFields {
    const FIELDS: &'static [&'static str] = &["name"];

    fn name(&self) -> &str {
        &self.name
    }

    fn field(&self, key: &str) -> Option<&String> {
        (key == "name").then_some(&self.name)
    }

    fn field_mut(&mut self, key: &str) -> Option<&mut String> {
        (key == "name").then_some(&mut self.name)
    }
}

/// Editable fields of one faction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FactionFields {
    pub name: String,
    pub members: String,
    pub description: String,
}

impl GroupFields for FactionFields {
    const FIELDS: &'static [&'static str] = &["name", "members", "description"];

    fn name(&self) -> &str {
        &self.name
    }

    fn field(&self, key: &str) -> Option<&String> {
        match key {
            "name" => Some(&self.name),
            "members" => Some(&self.members),
            "description" => Some(&self.description),
            _ => None,
        }
    }

    fn field_mut(&mut self, key: &str) -> Option<&mut String> {
        match key {
            "name" => Some(&mut self.name),
            "members" => Some(&mut self.members),
            "description" => Some(&mut self.description),
            _ => None,
        }
    }
}

/// The world info editor's form state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WorldForm {
    pub name: String,
    pub space: String,
    pub keywords: String,
    pub info: String,
    pub landmarks: Sections<LandmarkFields>,
    pub factions: Sections<FactionFields>,
}

const FIXED_FIELDS: &[&str] = &["name", "space", "keywords", "info"];

const SECTIONS: &[SectionKind] = &[SectionKind::Landmarks, SectionKind::Factions];

impl WorldForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Landmark names as saved: trimmed, blanks dropped, first occurrence kept.
    fn landmark_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for group in self.landmarks.iter() {
            let name = &group.fields.name;
            if !name.is_empty() && !names.contains(name) {
                names.push(name.clone());
            }
        }
        names
    }
}

impl FormModel for WorldForm {
    type Document = WorldInfo;

    fn populate(&mut self, world: &WorldInfo) {
        *self = WorldForm {
            name: world.name.clone(),
            space: world.space.clone(),
            keywords: join_lines(&world.keywords),
            info: join_lines(&world.info),
            landmarks: world
                .landmarks
                .iter()
                .map(|name| LandmarkFields { name: name.clone() })
                .collect(),
            factions: world
                .factions
                .iter()
                .map(|(name, f)| FactionFields {
                    name: name.clone(),
                    members: join_lines(&f.members),
                    description: join_lines(&f.info.description),
                })
                .collect(),
        };
    }

    fn to_document(&self) -> WorldInfo {
        WorldInfo {
            name: self.name.clone(),
            space: self.space.clone(),
            keywords: split_lines(&self.keywords),
            info: split_lines(&self.info),
            landmarks: self.landmark_names(),
            factions: self.factions.collect_named(|f| Faction {
                members: split_lines(&f.members),
                info: FactionInfo {
                    description: split_lines(&f.description),
                },
            }),
        }
    }
}

impl FieldAccess for WorldForm {
    fn fixed_field_paths(&self) -> &'static [&'static str] {
        FIXED_FIELDS
    }

    fn fixed_field(&self, path: &str) -> Option<&String> {
        match path {
            "name" => Some(&self.name),
            "space" => Some(&self.space),
            "keywords" => Some(&self.keywords),
            "info" => Some(&self.info),
            _ => None,
        }
    }

    fn fixed_field_mut(&mut self, path: &str) -> Option<&mut String> {
        match path {
            "name" => Some(&mut self.name),
            "space" => Some(&mut self.space),
            "keywords" => Some(&mut self.keywords),
            "info" => Some(&mut self.info),
            _ => None,
        }
    }
}

impl DynamicSections for WorldForm {
    fn document_kind(&self) -> DocumentKind {
        DocumentKind::WorldInfo
    }

    fn section(&self, kind: SectionKind) -> Option<&dyn SectionOps> {
        match kind {
            SectionKind::Landmarks => Some(&self.landmarks),
            SectionKind::Factions => Some(&self.factions),
            _ => None,
        }
    }

    fn section_mut(&mut self, kind: SectionKind) -> Option<&mut dyn SectionOps> {
        match kind {
            SectionKind::Landmarks => Some(&mut self.landmarks),
            SectionKind::Factions => Some(&mut self.factions),
            _ => None,
        }
    }

    fn section_kinds(&self) -> &'static [SectionKind] {
        SECTIONS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Panel;

    fn sample_world() -> WorldInfo {
        WorldInfo::new("Aster")
            .with_keyword("sky")
            .with_keyword("islands")
            .with_landmark("Old Bridge")
            .with_landmark("Sky Tower")
            .with_faction(
                "Empire",
                Faction::new()
                    .with_member("Emperor")
                    .with_member("Chancellor")
                    .with_description("Rules the north"),
            )
            .with_faction("Guild", Faction::new().with_member("Merchant"))
    }

    fn add_faction(form: &mut WorldForm, name: &str, members: &str) {
        let id = form.add_group(SectionKind::Factions).unwrap();
        let index = form.factions.position(id).unwrap();
        form.set_field(&format!("factions.{index}.name"), name).unwrap();
        form.set_field(&format!("factions.{index}.members"), members).unwrap();
    }

    #[test]
    fn test_round_trip_without_edits() {
        let world = sample_world();
        let form = WorldForm::from_document(&world);

        assert_eq!(form.landmarks.len(), 2);
        assert_eq!(form.factions.len(), 2);
        assert_eq!(form.to_document(), world);
    }

    #[test]
    fn test_landmarks_drop_blanks_and_duplicates() {
        let mut form = WorldForm::new();
        for name in ["Tower", "", "Bridge", "Tower", " Bridge "] {
            let id = form.landmarks.add_group();
            form.landmarks.get_mut(id).unwrap().name = name.to_string();
        }

        assert_eq!(form.to_document().landmarks, vec!["Tower", "Bridge", " Bridge "]);
    }

    #[test]
    fn test_padded_names_survive_round_trip() {
        let world: WorldInfo =
            serde_json::from_str(r#"{"landmark": [" Old Bridge ", "  "], "force": {" ": {}}}"#)
                .unwrap();

        let saved = WorldForm::from_document(&world).to_document();
        assert_eq!(saved.landmarks, vec![" Old Bridge ", "  "]);
        let factions: Vec<_> = saved.factions.keys().map(String::as_str).collect();
        assert_eq!(factions, vec![" "]);
        assert_eq!(saved, world);
    }

    #[test]
    fn test_duplicate_faction_names_collapse_to_later() {
        let mut form = WorldForm::new();
        add_faction(&mut form, "Empire", "Old Guard");
        add_faction(&mut form, "Rebels", "Leader");
        add_faction(&mut form, "Empire", "New Guard\nRecruit");

        let world = form.to_document();
        assert_eq!(world.factions.len(), 2);
        assert_eq!(world.factions["Empire"].members, vec!["New Guard", "Recruit"]);
    }

    #[test]
    fn test_blank_faction_dropped() {
        let mut form = WorldForm::new();
        add_faction(&mut form, "", "Nobody");
        assert!(form.to_document().factions.is_empty());
    }

    #[test]
    fn test_faction_edits_after_creation_are_saved() {
        let mut form = WorldForm::from_document(&sample_world());
        form.set_field("factions.1.description", "Trades\n\nsilk").unwrap();

        let world = form.to_document();
        assert_eq!(world.factions["Guild"].description().to_vec(), vec!["Trades", "silk"]);
    }

    #[test]
    fn test_remove_landmark() {
        let mut form = WorldForm::from_document(&sample_world());
        form.remove_group_at(SectionKind::Landmarks, 0).unwrap();

        assert_eq!(form.to_document().landmarks, vec!["Sky Tower"]);
        assert!(form.remove_group_at(SectionKind::Landmarks, 5).is_err());
    }

    #[test]
    fn test_character_sections_are_rejected() {
        let form = WorldForm::new();
        assert!(form.group_count(SectionKind::Traits).is_err());
        assert_eq!(form.group_count(SectionKind::Landmarks).unwrap(), 0);
    }
}
