use serde::{Deserialize, Serialize};

use crate::coords::{ChunkDirection, ChunkVector};

/// An explicit connector slot on an island edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IslandConnector {
    /// Chunk the connector is anchored to.
    pub chunk: ChunkVector,
    /// Edge of that chunk the connector opens toward.
    pub direction: ChunkDirection,
}

/// Connector description handed to island construction.
///
/// Islands may declare connectors explicitly, or leave the list empty and
/// let the host derive openings from each chunk's notch directions. The
/// position list always mirrors the layout's chunk positions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IslandConnectorData {
    pub connectors: Vec<IslandConnector>,
    pub positions: Vec<ChunkVector>,
}

impl IslandConnectorData {
    /// Connector data with no explicit connectors, host-derived openings only.
    pub fn from_positions(positions: Vec<ChunkVector>) -> Self {
        Self {
            connectors: Vec::new(),
            positions,
        }
    }
}
