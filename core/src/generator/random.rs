use ndarray::Array2;
use rand::Rng;

use super::*;

/// Purely random placement outside the safe zone of the first click.
#[derive(Debug)]
pub struct RandomLayoutGenerator<'a, R> {
    rng: &'a mut R,
    start: Coord2,
    safe_zone: SafeZone,
}

impl<'a, R: Rng> RandomLayoutGenerator<'a, R> {
    pub fn new(rng: &'a mut R, start: Coord2, safe_zone: SafeZone) -> Self {
        Self {
            rng,
            start,
            safe_zone,
        }
    }
}

impl<R: Rng> LayoutGenerator for RandomLayoutGenerator<'_, R> {
    fn generate(self, size: Coord2, mines: CellCount) -> Result<MineLayout> {
        let (size_x, size_y) = size;
        let Self {
            rng,
            start,
            safe_zone,
        } = self;

        let mut candidates: Vec<Coord2> = (0..size_x)
            .flat_map(|x| (0..size_y).map(move |y| (x, y)))
            .filter(|&coords| safe_zone.allows_mine(coords, start))
            .collect();

        let available = CellCount::try_from(candidates.len()).unwrap_or(CellCount::MAX);
        if mines > available {
            log::warn!(
                "Cannot place {} mines around {:?}, only {} candidates",
                mines,
                start,
                available
            );
            return Err(GameError::NoRoomForMines {
                requested: mines,
                available,
            });
        }

        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());
        for _ in 0..mines {
            let choice = rng.random_range(0..candidates.len());
            let coords = candidates.remove(choice);
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(MineLayout::from_mine_mask(mine_mask))
    }
}
