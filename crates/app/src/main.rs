//! Headless mod-load driver.
//!
//! Stands in for the game's mod-loading sequence: sets up the host
//! surfaces, runs one update so the content pack's startup registration
//! executes, then reports what got registered.

use bevy::log::LogPlugin;
use bevy::prelude::*;

use islands::registry::IslandRegistry;
use islands::research::ActiveScenario;
use islands::toolbar::ToolbarTree;

fn main() {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()))
        .add_plugins((islands::IslandsPlugin, foundations::FoundationsPlugin));

    // One mod-load pass; startup systems run on the first update.
    app.update();

    let world = app.world();
    let registry = world.resource::<IslandRegistry>();
    let toolbar = world.resource::<ToolbarTree>();
    let scenario = world.resource::<ActiveScenario>();

    info!(
        "{} islands registered under scenario '{}'",
        registry.len(),
        scenario.name
    );
    for island in registry.islands() {
        let in_toolbar = toolbar.find_island(&island.id).is_some();
        info!(
            "  {} ({} chunk{}) unlocks at {}, toolbar entry: {}",
            island.id,
            island.layout.len(),
            if island.layout.len() == 1 { "" } else { "s" },
            island.unlock.resolve(&scenario.name),
            in_toolbar
        );
    }
}
