//! Foundation platforms content pack.
//!
//! Registers five pre-shaped single-chunk foundation islands, differing in
//! which compass edges of their 3x3 footprint are notched open for
//! connectors. All heavy lifting (island construction, connector opening
//! derivation, unlock resolution, toolbar rendering) happens on the host
//! surfaces in the `islands` crate; this crate contributes the layout
//! generation and the declarative registration pass.

pub mod layout;
pub mod plugin;
pub mod variants;

pub use plugin::FoundationsPlugin;
