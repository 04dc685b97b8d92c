use crate::Cell;

/// Finite rectangle `0 <= x < columns, 0 <= y < rows` sampled by random seeding.
///
/// A side is at most [`Region::MAX_SIDE`], so every cell of the region has `i32` coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Region {
    columns: u32,
    rows: u32,
}

impl Region {
    pub const MAX_SIDE: u32 = i32::MAX as u32;

    /// Sides above [`Region::MAX_SIDE`] saturate to it.
    pub const fn new(columns: u32, rows: u32) -> Self {
        Self {
            columns: if columns > Self::MAX_SIDE { Self::MAX_SIDE } else { columns },
            rows: if rows > Self::MAX_SIDE { Self::MAX_SIDE } else { rows },
        }
    }

    pub const fn columns(&self) -> u32 {
        self.columns
    }

    pub const fn rows(&self) -> u32 {
        self.rows
    }

    pub fn area(&self) -> u64 {
        self.columns as u64 * self.rows as u64
    }

    /// All cells of the region, row by row.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        let (columns, rows) = (self.columns as i32, self.rows as i32);
        (0..rows).flat_map(move |y| (0..columns).map(move |x| Cell::new(x, y)))
    }
}

/// Where cell `(0, 0)` lands inside the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// `(0, 0)` is the top-left corner of the window.
    #[default]
    TopLeft,
    /// `(0, 0)` is the middle of the window.
    Centered,
}

/// Window used by renderers to pick the live cells to draw.
///
/// It never bounds or clips the simulation: cells outside are simply not shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Viewport {
    pub columns: u32,
    pub rows: u32,
    pub anchor: Anchor,
}

impl Viewport {
    pub const fn new(columns: u32, rows: u32) -> Self {
        Self {
            columns,
            rows,
            anchor: Anchor::TopLeft,
        }
    }

    pub const fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// The same rectangle as a sampling region.
    pub const fn region(&self) -> Region {
        Region::new(self.columns, self.rows)
    }

    /// Window-local `(column, row)` of `cell`, or `None` if it is not visible.
    pub fn locate(&self, cell: Cell) -> Option<(u32, u32)> {
        let (dx, dy) = match self.anchor {
            Anchor::TopLeft => (0, 0),
            Anchor::Centered => (self.columns as i64 / 2, self.rows as i64 / 2),
        };
        let column = cell.x as i64 + dx;
        let row = cell.y as i64 + dy;
        if (0..self.columns as i64).contains(&column) && (0..self.rows as i64).contains(&row) {
            Some((column as u32, row as u32))
        } else {
            None
        }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.locate(cell).is_some()
    }
}
