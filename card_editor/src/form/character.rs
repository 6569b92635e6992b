//! Character card form.

use card_schema::{
    Appearance, Attire, CharacterCard, Clothing, DailyRoutine, DocumentKind, Gender,
    PersonalTrait, Relationship,
};

use super::lines::{join_lines, split_lines};
use super::{FieldAccess, FormModel};
use crate::sections::{DynamicSections, GroupFields, SectionKind, SectionOps, Sections};

/// Editable fields of one personality trait.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TraitFields {
    pub name: String,
    pub description: String,
    pub dialogue_examples: String,
    pub behavior_examples: String,
}

impl GroupFields for TraitFields {
    const FIELDS: &'static [&'static str] =
        &["name", "description", "dialogue_examples", "behavior_examples"];

    fn name(&self) -> &str {
        &self.name
    }

    fn field(&self, key: &str) -> Option<&String> {
        match key {
            "name" => Some(&self.name),
            "description" => Some(&self.description),
            "dialogue_examples" => Some(&self.dialogue_examples),
            "behavior_examples" => Some(&self.behavior_examples),
            _ => None,
        }
    }

    fn field_mut(&mut self, key: &str) -> Option<&mut String> {
        match key {
            "name" => Some(&mut self.name),
            "description" => Some(&mut self.description),
            "dialogue_examples" => Some(&mut self.dialogue_examples),
            "behavior_examples" => Some(&mut self.behavior_examples),
            _ => None,
        }
    }
}

/// Editable fields of one relationship.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RelationshipFields {
    pub name: String,
    pub description: String,
    pub features: String,
}

impl GroupFields for RelationshipFields {
    const FIELDS: &'static [&'static str] = &["name", "description", "features"];

    fn name(&self) -> &str {
        &self.name
    }

    fn field(&self, key: &str) -> Option<&String> {
        match key {
            "name" => Some(&self.name),
            "description" => Some(&self.description),
            "features" => Some(&self.features),
            _ => None,
        }
    }

    fn field_mut(&mut self, key: &str) -> Option<&mut String> {
        match key {
            "name" => Some(&mut self.name),
            "description" => Some(&mut self.description),
            "features" => Some(&mut self.features),
            _ => None,
        }
    }
}

/// The character card editor's form state.
///
/// Appearance, clothing and routine records are plain string records in the
/// schema already, so the form reuses them as-is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CharacterForm {
    pub chinese_name: String,
    pub japanese_name: String,
    pub gender: String,
    pub age: String,
    pub identity: String,
    pub background: String,
    pub appearance: Appearance,
    pub clothing: Clothing,
    pub personality_type: String,
    pub traits: Sections<TraitFields>,
    pub relationships: Sections<RelationshipFields>,
    pub likes: String,
    pub dislikes: String,
    pub routine: DailyRoutine,
}

const FIXED_FIELDS: &[&str] = &[
    "chinese_name",
    "japanese_name",
    "gender",
    "age",
    "identity",
    "background",
    "appearance.height",
    "appearance.hair_color",
    "appearance.hairstyle",
    "appearance.eyes",
    "appearance.nose",
    "appearance.lips",
    "appearance.skin",
    "appearance.body",
    "attire.tops",
    "attire.bottoms",
    "attire.shoes",
    "attire.socks",
    "attire.underwears",
    "attire.accessories",
    "personality_type",
    "likes",
    "dislikes",
    "routine.early_morning",
    "routine.morning",
    "routine.afternoon",
    "routine.evening",
    "routine.night",
    "routine.late_night",
];

const SECTIONS: &[SectionKind] = &[SectionKind::Traits, SectionKind::Relationships];

impl CharacterForm {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FormModel for CharacterForm {
    type Document = CharacterCard;

    fn populate(&mut self, card: &CharacterCard) {
        *self = CharacterForm {
            chinese_name: card.chinese_name.clone(),
            japanese_name: card.japanese_name.clone(),
            gender: card.gender.as_str().to_string(),
            age: card.age.clone(),
            identity: card.identity.clone(),
            background: join_lines(&card.background),
            appearance: card.appearance.clone(),
            clothing: card.attire.clothing.clone(),
            personality_type: card.personality_type.clone(),
            traits: card
                .personal_traits
                .iter()
                .map(|(name, t)| TraitFields {
                    name: name.clone(),
                    description: t.description.clone(),
                    dialogue_examples: join_lines(&t.dialogue_examples),
                    behavior_examples: join_lines(&t.behavior_examples),
                })
                .collect(),
            relationships: card
                .relationships
                .iter()
                .map(|(name, r)| RelationshipFields {
                    name: name.clone(),
                    description: join_lines(&r.description),
                    features: join_lines(&r.features),
                })
                .collect(),
            likes: join_lines(&card.likes),
            dislikes: join_lines(&card.dislikes),
            routine: card.daily_routine.clone(),
        };
    }

    fn to_document(&self) -> CharacterCard {
        CharacterCard {
            chinese_name: self.chinese_name.clone(),
            japanese_name: self.japanese_name.clone(),
            gender: Gender::from(self.gender.as_str()),
            age: self.age.clone(),
            background: split_lines(&self.background),
            identity: self.identity.clone(),
            appearance: self.appearance.clone(),
            attire: Attire {
                clothing: self.clothing.clone(),
            },
            personality_type: self.personality_type.clone(),
            personal_traits: self.traits.collect_named(|t| PersonalTrait {
                description: t.description.trim().to_string(),
                dialogue_examples: split_lines(&t.dialogue_examples),
                behavior_examples: split_lines(&t.behavior_examples),
            }),
            relationships: self.relationships.collect_named(|r| Relationship {
                description: split_lines(&r.description),
                features: split_lines(&r.features),
            }),
            likes: split_lines(&self.likes),
            dislikes: split_lines(&self.dislikes),
            daily_routine: self.routine.clone(),
        }
    }
}

impl FieldAccess for CharacterForm {
    fn fixed_field_paths(&self) -> &'static [&'static str] {
        FIXED_FIELDS
    }

    fn fixed_field(&self, path: &str) -> Option<&String> {
        let field = match path {
            "chinese_name" => &self.chinese_name,
            "japanese_name" => &self.japanese_name,
            "gender" => &self.gender,
            "age" => &self.age,
            "identity" => &self.identity,
            "background" => &self.background,
            "appearance.height" => &self.appearance.height,
            "appearance.hair_color" => &self.appearance.hair_color,
            "appearance.hairstyle" => &self.appearance.hairstyle,
            "appearance.eyes" => &self.appearance.eyes,
            "appearance.nose" => &self.appearance.nose,
            "appearance.lips" => &self.appearance.lips,
            "appearance.skin" => &self.appearance.skin,
            "appearance.body" => &self.appearance.body,
            "attire.tops" => &self.clothing.tops,
            "attire.bottoms" => &self.clothing.bottoms,
            "attire.shoes" => &self.clothing.shoes,
            "attire.socks" => &self.clothing.socks,
            "attire.underwears" => &self.clothing.underwears,
            "attire.accessories" => &self.clothing.accessories,
            "personality_type" => &self.personality_type,
            "likes" => &self.likes,
            "dislikes" => &self.dislikes,
            "routine.early_morning" => &self.routine.early_morning,
            "routine.morning" => &self.routine.morning,
            "routine.afternoon" => &self.routine.afternoon,
            "routine.evening" => &self.routine.evening,
            "routine.night" => &self.routine.night,
            "routine.late_night" => &self.routine.late_night,
            _ => return None,
        };
        Some(field)
    }

    fn fixed_field_mut(&mut self, path: &str) -> Option<&mut String> {
        let field = match path {
            "chinese_name" => &mut self.chinese_name,
            "japanese_name" => &mut self.japanese_name,
            "gender" => &mut self.gender,
            "age" => &mut self.age,
            "identity" => &mut self.identity,
            "background" => &mut self.background,
            "appearance.height" => &mut self.appearance.height,
            "appearance.hair_color" => &mut self.appearance.hair_color,
            "appearance.hairstyle" => &mut self.appearance.hairstyle,
            "appearance.eyes" => &mut self.appearance.eyes,
            "appearance.nose" => &mut self.appearance.nose,
            "appearance.lips" => &mut self.appearance.lips,
            "appearance.skin" => &mut self.appearance.skin,
            "appearance.body" => &mut self.appearance.body,
            "attire.tops" => &mut self.clothing.tops,
            "attire.bottoms" => &mut self.clothing.bottoms,
            "attire.shoes" => &mut self.clothing.shoes,
            "attire.socks" => &mut self.clothing.socks,
            "attire.underwears" => &mut self.clothing.underwears,
            "attire.accessories" => &mut self.clothing.accessories,
            "personality_type" => &mut self.personality_type,
            "likes" => &mut self.likes,
            "dislikes" => &mut self.dislikes,
            "routine.early_morning" => &mut self.routine.early_morning,
            "routine.morning" => &mut self.routine.morning,
            "routine.afternoon" => &mut self.routine.afternoon,
            "routine.evening" => &mut self.routine.evening,
            "routine.night" => &mut self.routine.night,
            "routine.late_night" => &mut self.routine.late_night,
            _ => return None,
        };
        Some(field)
    }
}

impl DynamicSections for CharacterForm {
    fn document_kind(&self) -> DocumentKind {
        DocumentKind::CharacterCard
    }

    fn section(&self, kind: SectionKind) -> Option<&dyn SectionOps> {
        match kind {
            SectionKind::Traits => Some(&self.traits),
            SectionKind::Relationships => Some(&self.relationships),
            _ => None,
        }
    }

    fn section_mut(&mut self, kind: SectionKind) -> Option<&mut dyn SectionOps> {
        match kind {
            SectionKind::Traits => Some(&mut self.traits),
            SectionKind::Relationships => Some(&mut self.relationships),
            _ => None,
        }
    }

    fn section_kinds(&self) -> &'static [SectionKind] {
        SECTIONS
    }
}
