//! Formatting helpers shared by the board types.

use crate::{EDGE_LENGTH, NUM_SPACES};
use std::fmt::{self, Formatter, Write};

const COLUMN_LABELS: &str = "ABCDEFGH";

/// Write one character per cell as a labelled grid, columns A-H across the top
/// and rows 1-8 down the side. `cells` must yield exactly [`NUM_SPACES`] items
/// in row-major order.
pub fn format_grid<I: IntoIterator<Item = char>>(cells: I, f: &mut Formatter) -> fmt::Result {
    let mut cells = cells.into_iter();

    f.write_str("  ")?;
    for label in COLUMN_LABELS.chars() {
        write!(f, " {}", label)?;
    }

    for (index, cell) in cells.by_ref().take(NUM_SPACES).enumerate() {
        if index % EDGE_LENGTH == 0 {
            write!(f, "\n{} ", index / EDGE_LENGTH + 1)?;
        }
        f.write_char(' ')?;
        f.write_char(cell)?;
    }

    match cells.next() {
        None => Ok(()),
        Some(_) => Err(fmt::Error),
    }
}
