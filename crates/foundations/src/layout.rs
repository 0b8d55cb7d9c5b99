//! Foundation layout generation.
//!
//! A foundation is a single-chunk island whose connector openings are
//! derived from the 3x3 neighborhood around its one chunk: the chunk-data
//! factory receives the surrounding cells that are solid, and every cell
//! missing from that context (the notch directions) becomes an opening.

use islands::connectors::IslandConnectorData;
use islands::coords::{ChunkDirection, ChunkVector};
use islands::layout::{ChunkLayout, IslandChunkData, LayoutError};

/// Computes the chunk layout for a foundation with the given notch
/// directions.
///
/// Enumerates the 3x3 grid of cells around the origin in row-major order
/// (x outer, y inner) and collects every peripheral cell that is not
/// behind a notch as solid-neighbor context. Duplicate notch directions
/// are accepted; a repeated direction re-checks the same cell and changes
/// nothing. The returned layout holds exactly one entry, keyed at the
/// origin.
pub fn foundation_layout(
    notches: &[ChunkDirection],
) -> Result<ChunkLayout, LayoutError> {
    let this_chunk = ChunkVector::ZERO;
    let mut other_chunks = Vec::with_capacity(8);
    for x in -1..=1 {
        for y in -1..=1 {
            if x == this_chunk.x && y == this_chunk.y {
                continue;
            }
            let notched = notches.iter().any(|&dir| {
                let neighbor = this_chunk + dir;
                neighbor.x == x && neighbor.y == y
            });
            if notched {
                continue;
            }
            other_chunks.push(ChunkVector::new(x, y, 0));
        }
    }

    let mut layout = ChunkLayout::new();
    layout.insert(IslandChunkData::build(
        this_chunk,
        notches,
        other_chunks,
        true,
        false,
    )?);
    Ok(layout)
}

/// Derives connector data for a foundation layout: no explicit connectors,
/// positions taken straight from the layout's keys.
pub fn foundation_connectors(layout: &ChunkLayout) -> IslandConnectorData {
    IslandConnectorData::from_positions(layout.positions().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    use islands::coords::ChunkDirection::{East, North, South, West};

    fn context_of(notches: &[ChunkDirection]) -> Vec<ChunkVector> {
        let layout = foundation_layout(notches).unwrap();
        layout.get(ChunkVector::ZERO).unwrap().other_chunks.clone()
    }

    #[test]
    fn test_single_entry_keyed_at_origin_for_all_notch_sets() {
        let sets: &[&[ChunkDirection]] = &[
            &[],
            &[North],
            &[South],
            &[East, West],
            &[North, East, South],
            &[North, East, South, West],
        ];
        for notches in sets {
            let layout = foundation_layout(notches).unwrap();
            assert_eq!(layout.len(), 1);
            assert_eq!(layout.iter().filter(|c| c.is_primary).count(), 1);
            let chunk = layout.get(ChunkVector::ZERO).unwrap();
            assert_eq!(chunk.position, ChunkVector::ZERO);
            assert!(chunk.is_primary);
            assert!(!chunk.is_secondary);
        }
    }

    #[test]
    fn test_no_notches_keeps_all_eight_peripheral_cells() {
        let context = context_of(&[]);
        assert_eq!(context.len(), 8);
        assert!(!context.contains(&ChunkVector::ZERO));
    }

    #[test]
    fn test_single_notch_excludes_its_neighbor() {
        let context = context_of(&[North]);
        assert_eq!(context.len(), 7);
        assert!(!context.contains(&(ChunkVector::ZERO + North)));
    }

    #[test]
    fn test_two_notches_exclude_two_distinct_cells() {
        let context = context_of(&[North, West]);
        assert_eq!(context.len(), 6);
        assert!(!context.contains(&(ChunkVector::ZERO + North)));
        assert!(!context.contains(&(ChunkVector::ZERO + West)));
    }

    #[test]
    fn test_opposite_notches_exclude_opposite_cells() {
        let context = context_of(&[North, South]);
        assert_eq!(context.len(), 6);
        let north = ChunkVector::ZERO + North;
        let south = ChunkVector::ZERO + North.opposite();
        assert!(!context.contains(&north));
        assert!(!context.contains(&south));
    }

    #[test]
    fn test_duplicate_notches_have_no_effect() {
        assert_eq!(context_of(&[North, North, North]), context_of(&[North]));
    }

    #[test]
    fn test_layout_is_idempotent() {
        let first = foundation_layout(&[North, West, South]).unwrap();
        let second = foundation_layout(&[North, West, South]).unwrap();
        let first_keys: Vec<_> = first.positions().collect();
        let second_keys: Vec<_> = second.positions().collect();
        assert_eq!(first_keys, second_keys);

        let first_context: BTreeSet<_> = first
            .get(ChunkVector::ZERO)
            .unwrap()
            .other_chunks
            .iter()
            .copied()
            .collect();
        let second_context: BTreeSet<_> = second
            .get(ChunkVector::ZERO)
            .unwrap()
            .other_chunks
            .iter()
            .copied()
            .collect();
        assert_eq!(first_context, second_context);
    }

    #[test]
    fn test_context_is_row_major_ordered() {
        let context = context_of(&[]);
        let mut sorted = context.clone();
        sorted.sort_by_key(|v| (v.x, v.y));
        assert_eq!(context, sorted);
    }

    #[test]
    fn test_connectors_mirror_layout_positions() {
        let layout = foundation_layout(&[North, West]).unwrap();
        let connectors = foundation_connectors(&layout);
        assert!(connectors.connectors.is_empty());
        assert_eq!(
            connectors.positions,
            layout.positions().collect::<Vec<_>>()
        );
    }
}
