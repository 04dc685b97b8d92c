mod config;
mod density;
mod error;
mod format_int;
mod parse_rle;
mod region;

pub use config::{get_config, set_parallel_threshold, ConfigSnapshot};
pub use density::Density;
pub use error::{Error, Result};
pub use format_int::NiceInt;
pub use parse_rle::parse_rle;
pub use region::{Anchor, Region, Viewport};
