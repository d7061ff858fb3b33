use serde::{Deserialize, Serialize};

use crate::{Coord2, MarkOutcome};

/// What the player currently sees of a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    Hidden,
    Flagged,
    Revealed,
}

/// What a cell holds. Assigned once by board setup and never changed afterwards.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    /// Placeholder used before mines are placed.
    #[default]
    Blank,
    Mine,
    /// Safe cell carrying the number of mines around it.
    Indicator(u8),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    position: Coord2,
    kind: CellKind,
    state: Visibility,
}

impl Cell {
    pub const fn blank(position: Coord2) -> Self {
        Self::with_kind(position, CellKind::Blank)
    }

    pub const fn mine(position: Coord2) -> Self {
        Self::with_kind(position, CellKind::Mine)
    }

    pub const fn indicator(position: Coord2, nearby_mines: u8) -> Self {
        Self::with_kind(position, CellKind::Indicator(nearby_mines))
    }

    const fn with_kind(position: Coord2, kind: CellKind) -> Self {
        Self {
            position,
            kind,
            state: Visibility::Hidden,
        }
    }

    pub const fn position(&self) -> Coord2 {
        self.position
    }

    pub const fn kind(&self) -> CellKind {
        self.kind
    }

    pub const fn state(&self) -> Visibility {
        self.state
    }

    pub const fn is_mine(&self) -> bool {
        matches!(self.kind, CellKind::Mine)
    }

    pub const fn is_hidden(&self) -> bool {
        matches!(self.state, Visibility::Hidden)
    }

    pub const fn nearby_mines(&self) -> Option<u8> {
        match self.kind {
            CellKind::Indicator(count) => Some(count),
            _ => None,
        }
    }

    /// An indicator with no mines around it, the seed of a flood reveal.
    pub const fn is_zero(&self) -> bool {
        matches!(self.kind, CellKind::Indicator(0))
    }

    pub fn reveal(&mut self) {
        self.state = Visibility::Revealed;
    }

    pub fn toggle_flag(&mut self) -> MarkOutcome {
        use Visibility::*;

        match self.state {
            Hidden => {
                self.state = Flagged;
                MarkOutcome::Changed
            }
            Flagged => {
                self.state = Hidden;
                MarkOutcome::Changed
            }
            Revealed => MarkOutcome::NoChange,
        }
    }
}
