use super::{Error, Result};
use crate::{Cell, CellSet};

/// Parses a pattern in RLE format.
///
/// Column `x` of row `y` of the pattern becomes `Cell { x, y }`.
pub fn parse_rle(data: &[u8]) -> Result<CellSet> {
    let mut i = 0;
    // skipping comment and blank lines
    loop {
        while i < data.len() && data[i].is_ascii_whitespace() {
            i += 1;
        }
        match data.get(i) {
            Some(b'#') => {
                while i < data.len() && data[i] != b'\n' {
                    i += 1;
                }
            }
            Some(b'x') => break,
            _ => return Err(Error::RleMissingHeader),
        }
    }
    // the header only describes the bounding box, which the sparse set does not need
    while i < data.len() && data[i] != b'\n' {
        i += 1;
    }

    let mut cells = CellSet::default();
    let (mut x, mut y) = (0i32, 0i32);
    let mut count: Option<u32> = None;
    while i < data.len() {
        let symbol = data[i];
        match symbol {
            b'0'..=b'9' => {
                let digit = u32::from(symbol - b'0');
                count = Some(
                    count
                        .unwrap_or(0)
                        .checked_mul(10)
                        .and_then(|c| c.checked_add(digit))
                        .ok_or(Error::RleCountOverflow(i))?,
                );
            }
            b'o' | b'b' | b'$' => {
                let run = i32::try_from(count.take().unwrap_or(1))
                    .map_err(|_| Error::RleCountOverflow(i))?;
                match symbol {
                    b'o' => {
                        let end = x.checked_add(run).ok_or(Error::RleCountOverflow(i))?;
                        cells.extend((x..end).map(|cx| Cell::new(cx, y)));
                        x = end;
                    }
                    b'b' => x = x.checked_add(run).ok_or(Error::RleCountOverflow(i))?,
                    _ => {
                        x = 0;
                        y = y.checked_add(run).ok_or(Error::RleCountOverflow(i))?;
                    }
                }
            }
            b'!' => break,
            c if c.is_ascii_whitespace() => {}
            c => {
                return Err(Error::RleUnexpectedSymbol {
                    symbol: c as char,
                    position: i,
                })
            }
        }
        i += 1;
    }
    Ok(cells)
}
