mod step;

pub use step::{next_generation, next_generation_parallel, next_generation_sequential};

use crate::{parse_rle, Cell, CellSet, Density, NiceInt, Region, Result, Viewport};
use tracing::{debug, trace};

/// Game of Life on an unbounded plane.
///
/// Holds the live-cell set, the generation counter and an advisory viewport.
/// The viewport is only read by renderers; it never clips the simulation.
#[derive(Clone, Debug, Default)]
pub struct SparseLifeEngine {
    cells: CellSet,
    generation: u64,
    viewport: Viewport,
}

impl SparseLifeEngine {
    /// Creates an engine with no live cells at generation 0.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            cells: CellSet::default(),
            generation: 0,
            viewport,
        }
    }

    /// Replaces the live cells with a random fill of `region`.
    ///
    /// Every cell of the region is alive with probability `density`.
    /// `seed` - random seed (if `None`, then random seed is generated)
    ///
    /// The generation counter is not touched.
    pub fn seed_random(&mut self, density: Density, region: Region, seed: Option<u64>) {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        let p = density.get();
        self.cells = region.cells().filter(|_| rng.gen_bool(p)).collect();
        debug!(
            %density,
            columns = region.columns(),
            rows = region.rows(),
            population = self.cells.len(),
            "seeded randomly"
        );
    }

    /// Same as [`Self::seed_random`] over the current viewport rectangle.
    pub fn seed_random_in_viewport(&mut self, density: Density, seed: Option<u64>) {
        self.seed_random(density, self.viewport.region(), seed);
    }

    /// Replaces the live cells with `cells`. Any coordinates are accepted.
    ///
    /// The generation counter is not touched.
    pub fn seed_cells(&mut self, cells: impl IntoIterator<Item = Cell>) {
        self.cells = cells.into_iter().collect();
        debug!(population = self.cells.len(), "seeded with explicit cells");
    }

    /// Replaces the live cells with a pattern in RLE format.
    ///
    /// On error the current state is left as it was.
    pub fn seed_rle(&mut self, data: &[u8]) -> Result<()> {
        let cells = parse_rle(data)?;
        self.seed_cells(cells);
        Ok(())
    }

    /// Advances the simulation by one generation.
    pub fn advance(&mut self) {
        self.cells = next_generation(&self.cells);
        self.generation += 1;
        trace!(
            generation = self.generation,
            population = self.cells.len(),
            "advanced"
        );
    }

    /// Advances the simulation by `generations` generations.
    pub fn update(&mut self, generations: u64) {
        for _ in 0..generations {
            self.advance();
        }
    }

    pub fn live_cells(&self) -> &CellSet {
        &self.cells
    }

    pub fn is_alive(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    pub fn population(&self) -> usize {
        self.cells.len()
    }

    /// Number of generations advanced since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn set_viewport_size(&mut self, columns: u32, rows: u32) {
        self.viewport.columns = columns;
        self.viewport.rows = rows;
    }

    /// Window-local `(column, row)` of every live cell inside the viewport.
    pub fn visible_cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.cells
            .iter()
            .filter_map(|&cell| self.viewport.locate(cell))
    }

    /// Returns multiline string reporting engine stats.
    pub fn stats(&self) -> String {
        format!(
            "Generation: {}\nLive cells: {}\n",
            NiceInt::from(self.generation),
            NiceInt::from_usize(self.cells.len())
        )
    }
}
