use std::collections::HashSet;

/// Set of live cells. Membership means alive, absence means dead.
pub type CellSet = HashSet<Cell, ahash::RandomState>;

/// Offsets of the Moore neighborhood (3x3 block without its center).
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A point of the unbounded plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The 8 cells at Chebyshev distance 1.
    ///
    /// Coordinates wrap at the `i32` bounds instead of overflowing.
    pub fn neighbors(self) -> impl Iterator<Item = Cell> {
        NEIGHBOR_OFFSETS
            .into_iter()
            .map(move |(dx, dy)| Cell::new(self.x.wrapping_add(dx), self.y.wrapping_add(dy)))
    }

    /// Number of neighbors present in `cells`, in `0..=8`.
    pub fn live_neighbors(self, cells: &CellSet) -> usize {
        self.neighbors().filter(|n| cells.contains(n)).count()
    }

    /// Neighbors absent from `cells`.
    pub fn dead_neighbors(self, cells: &CellSet) -> impl Iterator<Item = Cell> + '_ {
        self.neighbors().filter(move |n| !cells.contains(n))
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Cell> for (i32, i32) {
    fn from(cell: Cell) -> Self {
        (cell.x, cell.y)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(cells: &[(i32, i32)]) -> CellSet {
        cells.iter().copied().map(Cell::from).collect()
    }

    #[test]
    fn test_neighbors_are_moore_neighborhood() {
        let center = Cell::new(3, -7);
        let neighbors = center.neighbors().collect::<Vec<_>>();
        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&center));
        for n in &neighbors {
            assert_eq!((n.x - center.x).abs().max((n.y - center.y).abs()), 1);
        }
        let unique = neighbors.iter().collect::<std::collections::HashSet<_>>();
        assert_eq!(unique.len(), 8);
    }

    #[test]
    fn test_live_and_dead_neighbors() {
        let cells = set(&[(0, 0), (1, 0), (5, 5), (-1, -1)]);
        let center = Cell::new(0, 0);
        assert_eq!(center.live_neighbors(&cells), 2);
        assert_eq!(center.dead_neighbors(&cells).count(), 6);
        assert_eq!(Cell::new(10, 10).live_neighbors(&cells), 0);
    }

    #[test]
    fn test_neighbors_wrap_at_bounds() {
        let corner = Cell::new(i32::MAX, i32::MIN);
        let neighbors = corner.neighbors().collect::<Vec<_>>();
        assert!(neighbors.contains(&Cell::new(i32::MIN, i32::MIN)));
        assert!(neighbors.contains(&Cell::new(i32::MAX, i32::MAX)));
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(Cell::new(-2, 4), Cell::from((-2, 4)));
        assert_eq!(<(i32, i32)>::from(Cell::new(-2, 4)), (-2, 4));
        assert_eq!(Cell::new(-2, 4).to_string(), "(-2, 4)");
        assert_eq!(set(&[(1, 1), (1, 1)]).len(), 1);
    }
}
