//! Well-known patterns in RLE format, ready for [`crate::parse_rle`].

/// Still life.
pub const BLOCK: &[u8] = b"#N Block\nx = 2, y = 2, rule = B3/S23\n2o$2o!\n";

/// Period 2 oscillator, horizontal phase.
pub const BLINKER: &[u8] = b"#N Blinker\nx = 3, y = 1, rule = B3/S23\n3o!\n";

/// Moves by `(1, 1)` every 4 generations.
pub const GLIDER: &[u8] = b"#N Glider\nx = 3, y = 3, rule = B3/S23\nbob$2bo$3o!\n";

/// Methuselah, stabilizes at generation 1103.
pub const R_PENTOMINO: &[u8] = b"#N R-pentomino\nx = 3, y = 3, rule = B3/S23\nb2o$2ob$bo!\n";

/// Methuselah, stabilizes at generation 5206.
pub const ACORN: &[u8] = b"#N Acorn\nx = 7, y = 3, rule = B3/S23\nbo5b$3bo3b$2o2b3o!\n";
