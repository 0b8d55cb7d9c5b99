//! Host-side content surfaces for chunk-island building packs.
//!
//! This crate models the parts of the game that content packs register
//! into: chunk coordinates and layouts, the island registry, connector
//! data, research milestone selection, the build-menu toolbar tree,
//! localization string tables, and mod resource paths. Content packs
//! (e.g. the `foundations` crate) only ever touch these surfaces during
//! their one-shot `Startup` registration pass.

use bevy::prelude::*;

pub mod connectors;
pub mod coords;
pub mod layout;
pub mod localization;
pub mod registry;
pub mod research;
pub mod resources;
pub mod toolbar;

/// Initializes the host content surfaces.
///
/// Content-pack plugins must be added after this one so their `Startup`
/// registration systems find the resources in place.
pub struct IslandsPlugin;

impl Plugin for IslandsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<registry::IslandRegistry>()
            .init_resource::<toolbar::ToolbarTree>()
            .init_resource::<research::ActiveScenario>()
            .init_resource::<localization::LocalizationState>();
    }
}
