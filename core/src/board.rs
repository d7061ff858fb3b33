use std::collections::VecDeque;

use ndarray::Array2;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Waiting -> Playing (first left click)
/// - Playing -> Won
/// - Playing -> Lost
/// - any -> Waiting (reset)
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    Waiting,
    Playing,
    Lost,
    Won,
}

impl GameState {
    pub const fn is_waiting(self) -> bool {
        matches!(self, Self::Waiting)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// How the neighbours of zero cells found during a flood reveal are opened.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealMode {
    /// The whole region opens before the click returns.
    #[default]
    Immediate,
    /// Each zero cell queues its zero neighbours; the host opens one wave per
    /// [`Board::advance`] call, usually on a short timer.
    Deferred,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Button {
    /// Reveals a cell, and places the mines on the first click.
    Primary,
    /// Toggles a flag.
    Secondary,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEvent {
    PointerDown { point: Point, button: Button },
    KeyPress(char),
}

/// A game from the first click to its end. Owns every cell exclusively.
#[derive(Clone, Debug)]
pub struct Board {
    config: BoardConfig,
    geometry: Geometry,
    cells: Array2<Cell>,
    mines: CellCount,
    state: GameState,
    pending: VecDeque<Coord2>,
    rng: SmallRng,
}

impl Board {
    pub fn new(config: BoardConfig, viewport: Viewport, seed: u64) -> Result<Self> {
        config.validate()?;
        let geometry = Geometry::new(viewport, config.size, config.padding)?;
        log::debug!(
            "new board {:?} with {} mines, cell size {}",
            config.size,
            config.mine_count(),
            geometry.cell_size()
        );

        Ok(Self {
            cells: blank_cells(config.size),
            mines: config.mine_count(),
            config,
            geometry,
            state: GameState::default(),
            pending: VecDeque::new(),
            rng: SmallRng::seed_from_u64(seed),
        })
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn mine_count(&self) -> CellCount {
        self.mines
    }

    pub fn cell_size(&self) -> f64 {
        self.geometry.cell_size()
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<&Cell> {
        self.cells.get(coords.to_nd_index())
    }

    /// Every cell, `x` outer and `y` inner.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn flag_count(&self) -> CellCount {
        let flags = self
            .cells
            .iter()
            .filter(|cell| cell.state() == Visibility::Flagged)
            .count();
        CellCount::try_from(flags).unwrap_or(CellCount::MAX)
    }

    /// Whether a deferred flood still has waves to open.
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// The existing positions of the 3x3 block centered on `coords`, center
    /// included. The center itself must be on the board.
    pub fn neighbors(&self, coords: Coord2) -> Result<BlockIter> {
        let coords = self.validate_coords(coords)?;
        Ok(self.cells.iter_block(coords))
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (size_x, size_y) = self.size();
        if coords.0 < size_x && coords.1 < size_y {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// Places the mines for a fresh game, keeping the safe zone around
    /// `initial` clear, and starts play.
    pub fn setup(&mut self, initial: Coord2) -> Result<()> {
        let initial = self.validate_coords(initial)?;
        self.check_waiting()?;

        let size = self.size();
        let mines = self.mines;
        let layout = RandomLayoutGenerator::new(&mut self.rng, initial, self.config.safe_zone)
            .generate(size, mines)?;
        log::debug!("placed {} mines, first click at {:?}", mines, initial);

        self.arm(&layout);
        Ok(())
    }

    /// Starts play on a fixed layout instead of a random one.
    pub fn setup_with_layout(&mut self, layout: &MineLayout) -> Result<()> {
        self.check_waiting()?;
        if layout.size() != self.size() {
            return Err(GameError::InvalidBoardShape);
        }

        self.arm(layout);
        Ok(())
    }

    fn arm(&mut self, layout: &MineLayout) {
        self.cells = Array2::from_shape_fn(self.size().to_nd_index(), |(x, y)| {
            let coords = (x as Coord, y as Coord);
            if layout.contains_mine(coords) {
                Cell::mine(coords)
            } else {
                Cell::indicator(coords, layout.adjacent_mine_count(coords))
            }
        });
        self.mines = layout.mine_count();
        self.pending.clear();
        self.state = GameState::Playing;
        log::debug!("game started");
    }

    /// Reveals a cell. Zero cells open their non-mine neighbours and queue their
    /// zero neighbours, which are opened according to the reveal mode.
    pub fn reveal(&mut self, coords: Coord2) -> Result<()> {
        let coords = self.validate_coords(coords)?;
        self.reveal_cell(coords);
        if self.config.reveal_mode == RevealMode::Immediate {
            self.drain_pending();
        }
        Ok(())
    }

    fn reveal_cell(&mut self, coords: Coord2) {
        let cell = &mut self.cells[coords.to_nd_index()];
        cell.reveal();
        if !cell.is_zero() {
            return;
        }

        log::trace!("flood from {:?}", coords);
        for pos in self.cells.iter_block(coords) {
            let neighbor = &mut self.cells[pos.to_nd_index()];
            if neighbor.is_zero() && neighbor.is_hidden() {
                self.pending.push_back(pos);
            }
            if !neighbor.is_mine() {
                neighbor.reveal();
            }
        }
    }

    fn drain_pending(&mut self) {
        while let Some(coords) = self.pending.pop_front() {
            self.reveal_cell(coords);
        }
    }

    /// Opens one wave of a deferred flood: every reveal queued before this call.
    /// Once the flood is exhausted the board is checked for a finished game.
    pub fn advance(&mut self) -> ClickOutcome {
        if self.pending.is_empty() {
            return ClickOutcome::Ignored;
        }
        if self.state != GameState::Playing {
            self.pending.clear();
            return ClickOutcome::Ignored;
        }

        let wave: Vec<_> = self.pending.drain(..).collect();
        log::trace!("flood wave of {} cells", wave.len());
        for coords in wave {
            self.reveal_cell(coords);
        }

        if self.pending.is_empty() {
            self.finish_move()
        } else {
            ClickOutcome::Updated
        }
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.validate_coords(coords)?;
        Ok(self.cells[coords.to_nd_index()].toggle_flag())
    }

    /// Handles a pointer press at surface position `point`. Presses off the
    /// board or after the game ended are ignored.
    pub fn click_cell(
        &mut self,
        viewport: Viewport,
        point: Point,
        button: Button,
    ) -> Result<ClickOutcome> {
        if self.state.is_finished() {
            return Ok(ClickOutcome::Ignored);
        }

        match self.geometry.cell_at_point(viewport, point) {
            Some(coords) => self.click_at(coords, button),
            None => {
                log::trace!("click outside the board at {:?}", point);
                Ok(ClickOutcome::Ignored)
            }
        }
    }

    /// Grid-level click dispatch used by [`Board::click_cell`].
    pub fn click_at(&mut self, coords: Coord2, button: Button) -> Result<ClickOutcome> {
        let coords = self.validate_coords(coords)?;
        if self.state.is_finished() {
            return Ok(ClickOutcome::Ignored);
        }

        match button {
            Button::Primary => {
                if self.state.is_waiting() {
                    self.setup(coords)?;
                }
                if !self.cells[coords.to_nd_index()].is_hidden() {
                    return Ok(ClickOutcome::Ignored);
                }
                log::debug!("reveal {:?}", coords);
                self.reveal(coords)?;
            }
            Button::Secondary => {
                if self.state.is_waiting() {
                    return Ok(ClickOutcome::Ignored);
                }
                if !self.toggle_flag(coords)?.has_update() {
                    return Ok(ClickOutcome::Ignored);
                }
                log::debug!("toggled flag {:?}", coords);
            }
        }

        Ok(self.finish_move())
    }

    pub fn handle(&mut self, viewport: Viewport, event: InputEvent) -> Result<ClickOutcome> {
        match event {
            InputEvent::PointerDown { point, button } => self.click_cell(viewport, point, button),
            InputEvent::KeyPress(key) if key == self.config.reset_key => {
                self.reset();
                Ok(ClickOutcome::Updated)
            }
            InputEvent::KeyPress(_) => Ok(ClickOutcome::Ignored),
        }
    }

    fn finish_move(&mut self) -> ClickOutcome {
        match self.evaluate() {
            Some(outcome) => outcome.into(),
            None => ClickOutcome::Updated,
        }
    }

    /// Checks the whole board for a finished game. A revealed mine loses
    /// regardless of the other cells; otherwise the game is won once every
    /// indicator is revealed and every mine is flagged or revealed.
    pub fn evaluate(&mut self) -> Option<GameOutcome> {
        if self.state != GameState::Playing {
            return None;
        }

        if self
            .cells
            .iter()
            .any(|cell| cell.is_mine() && cell.state() == Visibility::Revealed)
        {
            self.lose();
            return Some(GameOutcome::Lost);
        }

        for cell in self.cells.iter() {
            match (cell.kind(), cell.state()) {
                (CellKind::Indicator(_), Visibility::Flagged | Visibility::Hidden) => return None,
                (CellKind::Mine, Visibility::Hidden) => return None,
                _ => {}
            }
        }

        self.win();
        Some(GameOutcome::Won)
    }

    fn win(&mut self) {
        self.state = GameState::Won;
        self.pending.clear();
        log::debug!("game won");
    }

    fn lose(&mut self) {
        self.state = GameState::Lost;
        self.pending.clear();
        self.cells.iter_mut().for_each(Cell::reveal);
        log::debug!("game lost");
    }

    /// Back to a fresh, unplaced board. Pending flood waves are dropped.
    pub fn reset(&mut self) {
        self.cells = blank_cells(self.size());
        self.mines = self.config.mine_count();
        self.pending.clear();
        self.state = GameState::Waiting;
        log::debug!("board reset");
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        let origin = self.geometry.origin(surface.viewport());
        let cell_size = self.geometry.cell_size();
        for cell in self.cells.iter() {
            let at = self.geometry.cell_origin(origin, cell.position());
            cell.draw(surface, at, cell_size);
        }
    }

    fn check_waiting(&self) -> Result<()> {
        if self.state.is_waiting() {
            Ok(())
        } else {
            Err(GameError::AlreadyStarted)
        }
    }
}

fn blank_cells(size: Coord2) -> Array2<Cell> {
    Array2::from_shape_fn(size.to_nd_index(), |(x, y)| {
        Cell::blank((x as Coord, y as Coord))
    })
}
