//! Chunk layouts and the island chunk-data factory.
//!
//! A [`ChunkLayout`] is a lookup from chunk position to per-chunk metadata.
//! Chunk metadata is only constructed through [`IslandChunkData::build`],
//! which enforces the host invariants that island construction relies on;
//! a pack that produces inconsistent context data fails here rather than
//! deep inside island instantiation.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::coords::{ChunkDirection, ChunkVector};

// ---------------------------------------------------------------------------
// Per-chunk metadata
// ---------------------------------------------------------------------------

/// Metadata for a single chunk of an island layout.
///
/// `other_chunks` is the surrounding-cell context used to derive connector
/// openings: cells that are present are solid neighbors, cells that are
/// absent (relative to the full neighborhood) are open edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IslandChunkData {
    pub position: ChunkVector,
    pub notches: Vec<ChunkDirection>,
    pub other_chunks: Vec<ChunkVector>,
    pub is_primary: bool,
    pub is_secondary: bool,
}

impl IslandChunkData {
    /// Builds validated chunk metadata.
    ///
    /// Invariants checked:
    /// - the chunk's own position must not appear in its context list;
    /// - a notch is an opening, so the neighbor cell behind each notch
    ///   direction must be absent from the context list;
    /// - a chunk is primary or secondary, never both.
    pub fn build(
        position: ChunkVector,
        notches: &[ChunkDirection],
        other_chunks: Vec<ChunkVector>,
        is_primary: bool,
        is_secondary: bool,
    ) -> Result<IslandChunkData, LayoutError> {
        if other_chunks.contains(&position) {
            return Err(LayoutError::SelfInContext(position));
        }
        for &dir in notches {
            let neighbor = position + dir;
            if other_chunks.contains(&neighbor) {
                return Err(LayoutError::NotchNeighborPresent {
                    position: neighbor,
                    direction: dir,
                });
            }
        }
        if is_primary && is_secondary {
            return Err(LayoutError::PrimaryAndSecondary(position));
        }
        Ok(IslandChunkData {
            position,
            notches: notches.to_vec(),
            other_chunks,
            is_primary,
            is_secondary,
        })
    }
}

// ---------------------------------------------------------------------------
// Layout lookup
// ---------------------------------------------------------------------------

/// Lookup from chunk position to chunk metadata. Keys are unique; insertion
/// order is irrelevant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkLayout {
    chunks: BTreeMap<ChunkVector, IslandChunkData>,
}

impl ChunkLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts chunk metadata keyed by its position, returning any metadata
    /// previously stored at that position.
    pub fn insert(&mut self, data: IslandChunkData) -> Option<IslandChunkData> {
        self.chunks.insert(data.position, data)
    }

    pub fn get(&self, position: ChunkVector) -> Option<&IslandChunkData> {
        self.chunks.get(&position)
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// All chunk positions, in deterministic key order.
    pub fn positions(&self) -> impl Iterator<Item = ChunkVector> + '_ {
        self.chunks.keys().copied()
    }

    pub fn iter(&self) -> btree_map::Values<'_, ChunkVector, IslandChunkData> {
        self.chunks.values()
    }

    /// The primary chunk, if exactly one chunk is marked primary.
    pub fn primary(&self) -> Option<&IslandChunkData> {
        let mut primaries = self.chunks.values().filter(|c| c.is_primary);
        let first = primaries.next()?;
        if primaries.next().is_some() {
            return None;
        }
        Some(first)
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors raised by the chunk-data factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A chunk listed itself in its own surrounding-cell context.
    SelfInContext(ChunkVector),
    /// A notch direction points at a cell that is present in the context;
    /// an opening cannot face a solid neighbor.
    NotchNeighborPresent {
        position: ChunkVector,
        direction: ChunkDirection,
    },
    /// A chunk was flagged both primary and secondary.
    PrimaryAndSecondary(ChunkVector),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::SelfInContext(pos) => {
                write!(f, "chunk at {pos:?} lists itself as a neighboring chunk")
            }
            LayoutError::NotchNeighborPresent {
                position,
                direction,
            } => write!(
                f,
                "notch facing {direction:?} collides with solid neighbor at {position:?}"
            ),
            LayoutError::PrimaryAndSecondary(pos) => {
                write!(f, "chunk at {pos:?} is marked both primary and secondary")
            }
        }
    }
}

impl std::error::Error for LayoutError {}
