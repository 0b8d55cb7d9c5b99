//! One-shot registration of the foundation variants.
//!
//! Runs once at startup, after the host surfaces exist. The pass is
//! order-independent across variants; the first error aborts the whole
//! load, so the registry never ends up with a partial pack.

use std::fmt;

use bevy::prelude::*;

use islands::layout::LayoutError;
use islands::localization::LocalizationState;
use islands::registry::{
    ChunkCost, ChunkDrawing, InteractionFlags, IslandDefinition, IslandGroup,
    IslandRegistry, ModuleSlots, PlacementMode, RegistryError, RenderingOptions,
    SimulationMode,
};
use islands::research::{MilestoneId, MilestoneSelector};
use islands::resources::ModResourceLocator;
use islands::toolbar::{
    InsertLocation, ToolbarError, ToolbarLocator, ToolbarNode, ToolbarTree,
};

use crate::layout::{foundation_connectors, foundation_layout};
use crate::variants;

/// Root child 5 is the platforms category; its child 4 is the line
/// foundations group new entries append to.
const TOOLBAR_PLATFORMS: usize = 5;
const TOOLBAR_LINE_FOUNDATIONS: usize = 4;

pub struct FoundationsPlugin;

impl Plugin for FoundationsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, register_foundations);
    }
}

/// Milestone gating per scenario: converter scenarios hold foundations
/// back until the first onboarding tier, everything else has them from
/// the start.
fn milestone_for_scenario(scenario_name: &str) -> MilestoneId {
    if scenario_name.to_lowercase().contains("converter-scenario") {
        MilestoneId::new("RNTier1_Onboarding")
    } else {
        MilestoneId::new("RNInitial")
    }
}

/// Startup system driving the registration pass. A failed pass is an
/// unrecoverable mod-load error, so it panics and takes the load down
/// rather than leaving half a pack registered.
fn register_foundations(
    mut registry: ResMut<IslandRegistry>,
    mut toolbar: ResMut<ToolbarTree>,
    mut strings: ResMut<LocalizationState>,
) {
    info!(
        "registering {} foundation platform variants",
        variants::FOUNDATION_TYPES.len()
    );
    if let Err(err) = install(&mut registry, &mut toolbar, &mut strings) {
        panic!("foundation platform registration failed: {err}");
    }
}

fn install(
    registry: &mut IslandRegistry,
    toolbar: &mut ToolbarTree,
    strings: &mut LocalizationState,
) -> Result<(), PackError> {
    strings.merge_json("en", variants::STRINGS_EN)?;
    strings.merge_json("de", variants::STRINGS_DE)?;
    for (i, notches) in variants::FOUNDATION_TYPES.iter().enumerate() {
        add_foundation(registry, toolbar, strings, i + 1, notches)?;
    }
    Ok(())
}

fn add_foundation(
    registry: &mut IslandRegistry,
    toolbar: &mut ToolbarTree,
    strings: &LocalizationState,
    index: usize,
    notches: &[islands::coords::ChunkDirection],
) -> Result<(), PackError> {
    let layout = foundation_layout(notches)?;
    let connectors = foundation_connectors(&layout);

    let icons = ModResourceLocator::for_mod("foundations").sub_dir("icons");
    let title_key = variants::title_key(index);

    let group = IslandGroup {
        id: variants::group_id(index),
        title_key: title_key.clone(),
        description_key: variants::DESCRIPTION_KEY.to_string(),
        icon: icons.path(variants::ICON_FILE),
        transportable: false,
        preferred_placement: PlacementMode::Area,
    };

    let island = IslandDefinition {
        id: variants::island_id(index),
        group: group.id.clone(),
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
        unlock: MilestoneSelector::PerScenario(milestone_for_scenario),
        simulation: SimulationMode::None,
        modules: ModuleSlots::None,
    };

    let entry = ToolbarNode::entry(strings.t(&title_key), island.id.clone());
    registry.register(island, group)?;

    let line_foundations = ToolbarLocator::root()
        .child_at(TOOLBAR_PLATFORMS)
        .child_at(TOOLBAR_LINE_FOUNDATIONS);
    toolbar.insert(&line_foundations, InsertLocation::AfterLastChild, entry)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Any failure during the registration pass.
#[derive(Debug)]
enum PackError {
    Layout(LayoutError),
    Registry(RegistryError),
    Toolbar(ToolbarError),
    Strings(serde_json::Error),
}

impl fmt::Display for PackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackError::Layout(e) => write!(f, "layout generation: {e}"),
            PackError::Registry(e) => write!(f, "island registration: {e}"),
            PackError::Toolbar(e) => write!(f, "toolbar insertion: {e}"),
            PackError::Strings(e) => write!(f, "localization strings: {e}"),
        }
    }
}

impl std::error::Error for PackError {}

impl From<LayoutError> for PackError {
    fn from(e: LayoutError) -> Self {
        PackError::Layout(e)
    }
}

impl From<RegistryError> for PackError {
    fn from(e: RegistryError) -> Self {
        PackError::Registry(e)
    }
}

impl From<ToolbarError> for PackError {
    fn from(e: ToolbarError) -> Self {
        PackError::Toolbar(e)
    }
}

impl From<serde_json::Error> for PackError {
    fn from(e: serde_json::Error) -> Self {
        PackError::Strings(e)
    }
}
