use thiserror::Error;

/// Input validation errors. Simulation itself never fails.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Density is NaN or outside of `[0, 1]`.
    #[error("density {0} is outside of [0, 1]")]
    InvalidDensity(f64),

    /// RLE data has no `x = ..., y = ...` header line.
    #[error("RLE: missing header line")]
    RleMissingHeader,

    #[error("RLE: unexpected symbol {symbol:?} at byte {position}")]
    RleUnexpectedSymbol { symbol: char, position: usize },

    /// A run count or a coordinate does not fit into `i32`.
    #[error("RLE: run count overflows at byte {0}")]
    RleCountOverflow(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
