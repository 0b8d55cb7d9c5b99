//! The five shipped foundation variants and their presentation metadata.

use islands::coords::ChunkDirection;
use islands::registry::{IslandGroupId, IslandId};

/// Notch directions per variant, indexed 1..=5 in registration order.
pub const FOUNDATION_TYPES: &[&[ChunkDirection]] = &[
    &[],
    &[ChunkDirection::North],
    &[ChunkDirection::North, ChunkDirection::West],
    &[ChunkDirection::North, ChunkDirection::South],
    &[
        ChunkDirection::North,
        ChunkDirection::West,
        ChunkDirection::South,
    ],
];

/// All variants share one icon; the notch shape is conveyed by the title.
pub const ICON_FILE: &str = "Foundation_4x4.png";

/// Description key shared by every variant.
pub const DESCRIPTION_KEY: &str = "island-layout.generic-platform.description";

fn suffix(index: usize) -> String {
    format!("var_{index}")
}

pub fn island_id(index: usize) -> IslandId {
    IslandId::new(format!("foundation_{}", suffix(index)))
}

pub fn group_id(index: usize) -> IslandGroupId {
    IslandGroupId::new(format!("foundation_group_{}", suffix(index)))
}

pub fn title_key(index: usize) -> String {
    format!("foundation_{}.title", suffix(index))
}

/// English strings installed at registration.
pub const STRINGS_EN: &str = r#"{
    "foundation_var_1.title": "Foundation",
    "foundation_var_2.title": "Foundation, notched",
    "foundation_var_3.title": "Foundation, corner notches",
    "foundation_var_4.title": "Foundation, pass-through",
    "foundation_var_5.title": "Foundation, triple notch",
    "island-layout.generic-platform.description": "A buildable platform. Notched edges leave room for space belt and train connections."
}"#;

/// German strings; keys absent here fall back to English.
pub const STRINGS_DE: &str = r#"{
    "foundation_var_1.title": "Fundament",
    "foundation_var_2.title": "Fundament, gekerbt",
    "foundation_var_3.title": "Fundament, Eckkerben",
    "foundation_var_4.title": "Fundament, Durchfahrt",
    "foundation_var_5.title": "Fundament, Dreifachkerbe"
}"#;
