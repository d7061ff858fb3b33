use serde::{Deserialize, Serialize};

use crate::*;

/// Current size of the drawing surface, in surface units.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Maps grid coordinates to surface positions and back. The board is centered
/// on the surface; the cell size is fixed when the board is created.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    size: Coord2,
    cell_size: f64,
}

impl Geometry {
    /// Fits the longer board side into the matching surface side minus `padding`.
    pub fn new(viewport: Viewport, size: Coord2, padding: f64) -> Result<Self> {
        let (size_x, size_y) = size;
        if size_x == 0 || size_y == 0 {
            return Err(GameError::InvalidSize);
        }

        let cell_size = if size_x >= size_y {
            (viewport.width - padding) / f64::from(size_x)
        } else {
            (viewport.height - padding) / f64::from(size_y)
        };

        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(GameError::InvalidSize);
        }

        Ok(Self { size, cell_size })
    }

    pub const fn size(&self) -> Coord2 {
        self.size
    }

    pub const fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Top-left corner of the board on a surface of the given size.
    pub fn origin(&self, viewport: Viewport) -> Point {
        Point {
            x: viewport.width / 2.0 - self.cell_size * f64::from(self.size.0) / 2.0,
            y: viewport.height / 2.0 - self.cell_size * f64::from(self.size.1) / 2.0,
        }
    }

    pub fn cell_origin(&self, origin: Point, (x, y): Coord2) -> Point {
        Point {
            x: origin.x + self.cell_size * f64::from(x),
            y: origin.y + self.cell_size * f64::from(y),
        }
    }

    /// Grid cell under `point`, or `None` when the point is off the board.
    pub fn cell_at_point(&self, viewport: Viewport, point: Point) -> Option<Coord2> {
        let origin = self.origin(viewport);
        let grid_x = ((point.x - origin.x) / self.cell_size).floor();
        let grid_y = ((point.y - origin.y) / self.cell_size).floor();

        let in_bounds = |value: f64, len: Coord| value >= 0.0 && value < f64::from(len);
        if in_bounds(grid_x, self.size.0) && in_bounds(grid_y, self.size.1) {
            Some((grid_x as Coord, grid_y as Coord))
        } else {
            None
        }
    }
}
