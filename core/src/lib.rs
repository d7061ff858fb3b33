use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::ops::Index;

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use geometry::*;
pub use render::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod geometry;
mod render;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub size: Coord2,
    /// Defaults to a tenth of the cells when unset.
    pub mines: Option<CellCount>,
    /// Space kept free along the longer side of the drawing surface.
    pub padding: f64,
    pub safe_zone: SafeZone,
    pub reveal_mode: RevealMode,
    pub reset_key: char,
}

impl BoardConfig {
    pub const DEFAULT_SIZE: Coord2 = (20, 15);
    pub const DEFAULT_PADDING: f64 = 20.0;
    pub const DEFAULT_RESET_KEY: char = 'r';
    /// Cells around the first click that the mine count must leave room for.
    pub const SAFE_ZONE_CELLS: CellCount = 9;

    pub fn new(size: Coord2) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    pub fn with_mines(self, mines: CellCount) -> Self {
        Self {
            mines: Some(mines),
            ..self
        }
    }

    pub fn with_padding(self, padding: f64) -> Self {
        Self { padding, ..self }
    }

    pub fn with_safe_zone(self, safe_zone: SafeZone) -> Self {
        Self { safe_zone, ..self }
    }

    pub fn with_reveal_mode(self, reveal_mode: RevealMode) -> Self {
        Self {
            reveal_mode,
            ..self
        }
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mines.unwrap_or(self.total_cells() / 10)
    }

    pub fn validate(&self) -> Result<()> {
        if self.size.0 == 0 || self.size.1 == 0 {
            return Err(GameError::InvalidSize);
        }

        let mut placeable = self.total_cells().saturating_sub(Self::SAFE_ZONE_CELLS);
        if self.safe_zone == SafeZone::Legacy {
            // an interior first click clears three whole rows and three whole columns
            let (size_x, size_y) = self.size;
            placeable = placeable.min(mult(size_x.saturating_sub(3), size_y.saturating_sub(3)));
        }
        if self.mine_count() > placeable {
            return Err(GameError::TooManyMines);
        }

        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
            mines: None,
            padding: Self::DEFAULT_PADDING,
            safe_zone: SafeZone::default(),
            reveal_mode: RevealMode::default(),
            reset_key: Self::DEFAULT_RESET_KEY,
        }
    }
}

/// Where the mines of one game are.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let mine_count = mine_mask
            .iter()
            .filter(|&&is_mine| is_mine)
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX);
        Self {
            mine_mask,
            mine_count,
        }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    pub fn size(&self) -> Coord2 {
        let (dim_x, dim_y) = self.mine_mask.dim();
        (
            dim_x.try_into().unwrap_or(Coord::MAX),
            dim_y.try_into().unwrap_or(Coord::MAX),
        )
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn mine_coords(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.mine_mask
            .indexed_iter()
            .filter(|&(_, &is_mine)| is_mine)
            .map(|((x, y), _)| (x as Coord, y as Coord))
    }

    /// Mines in the block around `coords`; a mine at `coords` itself is not counted.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.mine_mask
            .iter_block(coords)
            .filter(|&pos| pos != coords && self[pos])
            .count()
            .try_into()
            .unwrap_or(u8::MAX)
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, (x, y): Coord2) -> &Self::Output {
        &self.mine_mask[(x as usize, y as usize)]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

/// Terminal result of a game, delivered to the host's notification sink.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    Won,
    Lost,
}

impl GameOutcome {
    pub const fn message(self) -> &'static str {
        match self {
            Self::Won => "You won!",
            Self::Lost => "You lost!",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    Ignored,
    Updated,
    Won,
    Lost,
}

impl ClickOutcome {
    pub const fn has_update(self) -> bool {
        use ClickOutcome::*;
        match self {
            Ignored => false,
            Updated => true,
            Won => true,
            Lost => true,
        }
    }

    pub const fn notification(self) -> Option<GameOutcome> {
        match self {
            Self::Won => Some(GameOutcome::Won),
            Self::Lost => Some(GameOutcome::Lost),
            Self::Ignored | Self::Updated => None,
        }
    }
}

impl From<GameOutcome> for ClickOutcome {
    fn from(outcome: GameOutcome) -> Self {
        match outcome {
            GameOutcome::Won => Self::Won,
            GameOutcome::Lost => Self::Lost,
        }
    }
}
