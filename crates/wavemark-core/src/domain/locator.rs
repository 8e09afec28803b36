use std::fmt;
use std::str::FromStr;

use crate::error::WatermarkError;

/// Which detail subbands carry slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BandSelection {
    /// HL only
    #[default]
    Hl,
    /// HL first, then LH
    HlLh,
}

impl FromStr for BandSelection {
    type Err = WatermarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "HL" => Ok(Self::Hl),
            "HL+LH" => Ok(Self::HlLh),
            _ => Err(WatermarkError::Configuration(format!(
                "unknown band selection `{s}`, expected `HL` or `HL+LH`"
            ))),
        }
    }
}

impl fmt::Display for BandSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hl => write!(f, "HL"),
            Self::HlLh => write!(f, "HL+LH"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Hl,
    Lh,
}

/// Rows and columns of addressable units in one band, coefficients or blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub rows: usize,
    pub cols: usize,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub band: Band,
    pub row: usize,
    pub col: usize,
}

/// Maps slot indices to band coordinates.
///
/// Slots are row-major over the HL grid, with two bands the LH grid follows
/// right after the last HL slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locator {
    selection: BandSelection,
    hl: Grid,
    lh: Grid,
}

impl Locator {
    pub fn new(selection: BandSelection, hl: Grid, lh: Grid) -> Self {
        Self { selection, hl, lh }
    }

    pub fn capacity(&self) -> usize {
        match self.selection {
            BandSelection::Hl => self.hl.len(),
            BandSelection::HlLh => self.hl.len() + self.lh.len(),
        }
    }

    /// `None` for slots that do not land inside the real grid
    pub fn locate(&self, slot: usize) -> Option<Location> {
        let (band, grid, index) = match self.selection {
            BandSelection::HlLh if slot >= self.hl.len() => {
                (Band::Lh, self.lh, slot - self.hl.len())
            }
            _ => (Band::Hl, self.hl, slot),
        };

        if grid.cols == 0 {
            return None;
        }
        let (row, col) = (index / grid.cols, index % grid.cols);

        (row < grid.rows).then_some(Location { band, row, col })
    }
}
