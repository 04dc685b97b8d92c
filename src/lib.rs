mod cell;
mod engine;
pub mod patterns;
mod utils;

pub use cell::{Cell, CellSet};
pub use engine::{
    next_generation, next_generation_parallel, next_generation_sequential, SparseLifeEngine,
};
pub use utils::{
    get_config, parse_rle, set_parallel_threshold, Anchor, ConfigSnapshot, Density, Error,
    NiceInt, Region, Result, Viewport,
};
