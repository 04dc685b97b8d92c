//! One generation of B3/S23 over a sparse live-cell set.
//!
//! Every function here only reads the current snapshot and builds a fresh set,
//! so the order in which cells are visited never affects the result.

use crate::{get_config, Cell, CellSet};
use rayon::prelude::*;

/// A live cell survives with 2 or 3 live neighbors.
#[inline]
fn survives(cell: Cell, cells: &CellSet) -> bool {
    matches!(cell.live_neighbors(cells), 2 | 3)
}

/// A dead cell is born with exactly 3 live neighbors.
#[inline]
fn is_born(cell: Cell, cells: &CellSet) -> bool {
    cell.live_neighbors(cells) == 3
}

/// Computes the next generation, choosing the strategy by population size.
pub fn next_generation(cells: &CellSet) -> CellSet {
    if cells.len() >= get_config().parallel_threshold {
        next_generation_parallel(cells)
    } else {
        next_generation_sequential(cells)
    }
}

/// Single-threaded strategy.
pub fn next_generation_sequential(cells: &CellSet) -> CellSet {
    let mut next = CellSet::with_capacity_and_hasher(cells.len(), Default::default());
    // dead cells bordering at least one live cell, each evaluated once
    let mut candidates = CellSet::default();
    for &cell in cells {
        if survives(cell, cells) {
            next.insert(cell);
        }
        candidates.extend(cell.dead_neighbors(cells));
    }
    next.extend(candidates.into_iter().filter(|&c| is_born(c, cells)));
    next
}

/// Map/collect over the rayon pool.
///
/// Survivors come from live cells and newborns from dead ones, so the union
/// needs no deduplication between the two halves.
pub fn next_generation_parallel(cells: &CellSet) -> CellSet {
    let candidates: CellSet = cells
        .par_iter()
        .flat_map_iter(|&cell| cell.dead_neighbors(cells))
        .collect();
    let survivors = cells.par_iter().copied().filter(|&c| survives(c, cells));
    let newborns = candidates.into_par_iter().filter(|&c| is_born(c, cells));
    survivors.chain(newborns).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(cells: &[(i32, i32)]) -> CellSet {
        cells.iter().copied().map(Cell::from).collect()
    }

    fn both(cells: &CellSet) -> CellSet {
        let sequential = next_generation_sequential(cells);
        let parallel = next_generation_parallel(cells);
        assert_eq!(sequential, parallel);
        sequential
    }

    #[test]
    fn test_empty() {
        assert!(both(&CellSet::default()).is_empty());
    }

    #[test]
    fn test_rules_on_center_cell() {
        // center (0, 0) plus `k` of its neighbors
        let ring = Cell::new(0, 0).neighbors().collect::<Vec<_>>();
        for k in 0..=8 {
            let mut cells = ring[..k].iter().copied().collect::<CellSet>();
            cells.insert(Cell::new(0, 0));
            let next = both(&cells);
            assert_eq!(
                next.contains(&Cell::new(0, 0)),
                k == 2 || k == 3,
                "live center with {} neighbors",
                k
            );

            cells.remove(&Cell::new(0, 0));
            let next = both(&cells);
            assert_eq!(
                next.contains(&Cell::new(0, 0)),
                k == 3,
                "dead center with {} neighbors",
                k
            );
        }
    }

    #[test]
    fn test_blinker() {
        let horizontal = set(&[(-1, 0), (0, 0), (1, 0)]);
        let vertical = set(&[(0, -1), (0, 0), (0, 1)]);
        assert_eq!(both(&horizontal), vertical);
        assert_eq!(both(&vertical), horizontal);
    }

    #[test]
    fn test_does_not_mutate_input() {
        let cells = set(&[(0, 0), (1, 0), (2, 0)]);
        let copy = cells.clone();
        both(&cells);
        assert_eq!(cells, copy);
    }
}
