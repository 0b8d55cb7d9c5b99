//! The island registry and the configuration structs packs register into it.
//!
//! Island and group definitions are plain structs with named fields and a
//! single validating registration step; there is no builder chain. A pack
//! fills in a definition, calls [`IslandRegistry::register`], and either
//! both the island and its group are registered or nothing is.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::PathBuf;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::connectors::IslandConnectorData;
use crate::layout::ChunkLayout;
use crate::research::MilestoneSelector;

/// Cost charged per chunk when a default-cost island is placed.
pub const DEFAULT_CHUNK_COST: u32 = 1;

// ---------------------------------------------------------------------------
// Identifiers
// ---------------------------------------------------------------------------

#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct IslandId(String);

impl IslandId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IslandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct IslandGroupId(String);

impl IslandGroupId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IslandGroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Definition building blocks
// ---------------------------------------------------------------------------

/// How the placement tool drags this island out on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlacementMode {
    /// Rectangular drag fills an area with copies.
    #[default]
    Area,
    /// Linear drag places a run of copies.
    Line,
    /// One island per click.
    Single,
}

/// Player-interaction capabilities of a placed island.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionFlags {
    pub flippable: bool,
    pub can_hold_buildings: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkCost {
    pub per_chunk: u32,
}

impl Default for ChunkCost {
    fn default() -> Self {
        Self {
            per_chunk: DEFAULT_CHUNK_COST,
        }
    }
}

/// Which chunk features the renderer draws for this island.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChunkDrawing {
    /// Frame, surface, and decorations.
    #[default]
    All,
    /// Outline frame only.
    FrameOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RenderingOptions {
    pub drawing: ChunkDrawing,
    /// Whether the buildable playing field is drawn on top of the platform.
    pub draw_playing_field: bool,
}

/// Whether the island runs factory simulation once placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SimulationMode {
    /// Static platform, no per-tick behavior.
    #[default]
    None,
    /// Participates in the factory tick.
    Factory,
}

/// Whether extension modules can attach to the island.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ModuleSlots {
    #[default]
    None,
    Attachable { count: u8 },
}

// ---------------------------------------------------------------------------
// Definitions
// ---------------------------------------------------------------------------

/// Presentation grouping for one or more islands in the build menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IslandGroup {
    pub id: IslandGroupId,
    /// Localization key for the display title.
    pub title_key: String,
    /// Localization key for the description text.
    pub description_key: String,
    /// Icon resource path, resolved through the mod resource locator.
    pub icon: PathBuf,
    /// Whether placed islands of this group can be picked up and moved.
    pub transportable: bool,
    pub preferred_placement: PlacementMode,
}

/// A placeable island definition.
///
/// Registered once at mod load; the registry owns it afterward and the
/// host handles instantiation and persistence per save.
#[derive(Debug, Clone)]
pub struct IslandDefinition {
    pub id: IslandId,
    pub group: IslandGroupId,
    pub layout: ChunkLayout,
    pub connectors: IslandConnectorData,
    pub interaction: InteractionFlags,
    pub chunk_cost: ChunkCost,
    pub rendering: RenderingOptions,
    pub unlock: MilestoneSelector,
    pub simulation: SimulationMode,
    pub modules: ModuleSlots,
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// All island and group definitions registered by content packs.
#[derive(Resource, Debug, Default)]
pub struct IslandRegistry {
    islands: BTreeMap<IslandId, IslandDefinition>,
    groups: BTreeMap<IslandGroupId, IslandGroup>,
}

impl IslandRegistry {
    /// Validates and registers an island together with its group.
    ///
    /// On error nothing is inserted. Checks: non-empty ids, unique ids,
    /// the island references the given group, the layout has exactly one
    /// primary chunk, and the connector position list matches the layout's
    /// chunk positions.
    pub fn register(
        &mut self,
        island: IslandDefinition,
        group: IslandGroup,
    ) -> Result<(), RegistryError> {
        if island.id.as_str().is_empty() || group.id.as_str().is_empty() {
            return Err(RegistryError::EmptyId);
        }
        if island.group != group.id {
            return Err(RegistryError::GroupMismatch {
                island: island.id,
                group: group.id,
            });
        }
        if self.islands.contains_key(&island.id) {
            return Err(RegistryError::DuplicateIsland(island.id));
        }
        if self.groups.contains_key(&group.id) {
            return Err(RegistryError::DuplicateGroup(group.id));
        }
        if island.layout.primary().is_none() {
            return Err(RegistryError::NoPrimaryChunk(island.id));
        }
        let layout_positions: BTreeSet<_> = island.layout.positions().collect();
        let connector_positions: BTreeSet<_> =
            island.connectors.positions.iter().copied().collect();
        if layout_positions != connector_positions {
            return Err(RegistryError::ConnectorPositionsMismatch(island.id));
        }

        self.groups.insert(group.id.clone(), group);
        self.islands.insert(island.id.clone(), island);
        Ok(())
    }

    pub fn island(&self, id: &IslandId) -> Option<&IslandDefinition> {
        self.islands.get(id)
    }

    pub fn group(&self, id: &IslandGroupId) -> Option<&IslandGroup> {
        self.groups.get(id)
    }

    /// All registered islands, in id order.
    pub fn islands(&self) -> impl Iterator<Item = &IslandDefinition> {
        self.islands.values()
    }

    pub fn len(&self) -> usize {
        self.islands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.islands.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors raised during island registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    EmptyId,
    DuplicateIsland(IslandId),
    DuplicateGroup(IslandGroupId),
    /// The island's group id does not match the group registered with it.
    GroupMismatch {
        island: IslandId,
        group: IslandGroupId,
    },
    /// The layout has zero or several primary chunks.
    NoPrimaryChunk(IslandId),
    /// Connector positions do not mirror the layout's chunk positions.
    ConnectorPositionsMismatch(IslandId),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::EmptyId => write!(f, "island or group id is empty"),
            RegistryError::DuplicateIsland(id) => {
                write!(f, "island '{id}' is already registered")
            }
            RegistryError::DuplicateGroup(id) => {
                write!(f, "island group '{id}' is already registered")
            }
            RegistryError::GroupMismatch { island, group } => write!(
                f,
                "island '{island}' references a different group than '{group}'"
            ),
            RegistryError::NoPrimaryChunk(id) => {
                write!(f, "island '{id}' layout needs exactly one primary chunk")
            }
            RegistryError::ConnectorPositionsMismatch(id) => write!(
                f,
                "island '{id}' connector positions do not match its layout"
            ),
        }
    }
}

impl std::error::Error for RegistryError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::ChunkVector;
    use crate::layout::IslandChunkData;
    use crate::research::{MilestoneId, MilestoneSelector};

    fn single_chunk_layout() -> ChunkLayout {
        let mut layout = ChunkLayout::new();
        layout.insert(
            IslandChunkData::build(ChunkVector::ZERO, &[], Vec::new(), true, false).unwrap(),
        );
        layout
    }

    fn test_island(id: &str, group: &str) -> (IslandDefinition, IslandGroup) {
        let layout = single_chunk_layout();
        let connectors = IslandConnectorData::from_positions(layout.positions().collect());
        let island = IslandDefinition {
            id: IslandId::new(id),
            group: IslandGroupId::new(group),
            layout,
            connectors,
            interaction: InteractionFlags {
                flippable: false,
                can_hold_buildings: true,
            },
            chunk_cost: ChunkCost::default(),
            rendering: RenderingOptions {
                drawing: ChunkDrawing::All,
                draw_playing_field: true,
            },
            unlock: MilestoneSelector::Fixed(MilestoneId::new("RNInitial")),
            simulation: SimulationMode::None,
            modules: ModuleSlots::None,
        };
        let group = IslandGroup {
            id: IslandGroupId::new(group),
            title_key: format!("{id}.title"),
            description_key: "island-layout.generic-platform.description".to_string(),
            icon: PathBuf::from("icons/test.png"),
            transportable: false,
            preferred_placement: PlacementMode::Area,
        };
        (island, group)
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = IslandRegistry::default();
        let (island, group) = test_island("platform_a", "group_a");
        registry.register(island, group).unwrap();
        assert_eq!(registry.len(), 1);
        assert!(registry.island(&IslandId::new("platform_a")).is_some());
        assert!(registry.group(&IslandGroupId::new("group_a")).is_some());
    }

    #[test]
    fn test_duplicate_island_rejected() {
        let mut registry = IslandRegistry::default();
        let (island, group) = test_island("platform_a", "group_a");
        registry.register(island, group).unwrap();
        let (island, group) = test_island("platform_a", "group_b");
        assert_eq!(
            registry.register(island, group),
            Err(RegistryError::DuplicateIsland(IslandId::new("platform_a")))
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_group_mismatch_rejected() {
        let mut registry = IslandRegistry::default();
        let (island, _) = test_island("platform_a", "group_a");
        let (_, other_group) = test_island("platform_b", "group_b");
        assert!(matches!(
            registry.register(island, other_group),
            Err(RegistryError::GroupMismatch { .. })
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_connector_mismatch_rejected() {
        let mut registry = IslandRegistry::default();
        let (mut island, group) = test_island("platform_a", "group_a");
        island.connectors = IslandConnectorData::from_positions(vec![ChunkVector::new(
            5, 5, 0,
        )]);
        assert_eq!(
            registry.register(island, group),
            Err(RegistryError::ConnectorPositionsMismatch(IslandId::new(
                "platform_a"
            )))
        );
    }

    #[test]
    fn test_no_primary_rejected() {
        let mut registry = IslandRegistry::default();
        let (mut island, group) = test_island("platform_a", "group_a");
        let mut layout = ChunkLayout::new();
        layout.insert(
            IslandChunkData::build(ChunkVector::ZERO, &[], Vec::new(), false, false).unwrap(),
        );
        island.connectors = IslandConnectorData::from_positions(layout.positions().collect());
        island.layout = layout;
        assert_eq!(
            registry.register(island, group),
            Err(RegistryError::NoPrimaryChunk(IslandId::new("platform_a")))
        );
    }
}
