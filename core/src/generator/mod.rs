use serde::{Deserialize, Serialize};

use crate::*;
pub use random::*;

mod random;

pub trait LayoutGenerator {
    fn generate(self, size: Coord2, mines: CellCount) -> Result<MineLayout>;
}

/// Which cells around the first click are kept free of mines.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SafeZone {
    /// A cell may hold a mine only when it is more than one step away from the
    /// first click on both axes, so whole rows and columns through the click
    /// stay clear.
    #[default]
    Legacy,
    /// Only the 3x3 square around the first click stays clear.
    Square,
}

impl SafeZone {
    pub const fn allows_mine(self, coords: Coord2, start: Coord2) -> bool {
        match self {
            Self::Legacy => coords.0.abs_diff(start.0) > 1 && coords.1.abs_diff(start.1) > 1,
            Self::Square => !is_adjacent(coords, start),
        }
    }
}
