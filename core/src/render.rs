use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    White,
    Grey,
    Orange,
    Red,
}

impl Color {
    pub const fn css(self) -> &'static str {
        use Color::*;
        match self {
            White => "white",
            Grey => "grey",
            Orange => "orange",
            Red => "red",
        }
    }
}

/// Drawing primitives provided by the host. Shapes use the most recent `fill`.
pub trait Surface {
    fn viewport(&self) -> Viewport;
    fn fill(&mut self, color: Color);
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn circle(&mut self, center_x: f64, center_y: f64, diameter: f64);
    /// Text horizontally centered on `x`, with its baseline at `y`.
    fn text(&mut self, text: &str, x: f64, y: f64);
}

impl Visibility {
    pub const fn color(self) -> Color {
        match self {
            Self::Hidden => Color::White,
            Self::Revealed => Color::Grey,
            Self::Flagged => Color::Orange,
        }
    }
}

impl Cell {
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, at: Point, size: f64) {
        surface.fill(self.state().color());
        surface.rect(at.x, at.y, size, size);

        if self.state() != Visibility::Revealed {
            return;
        }

        match self.kind() {
            CellKind::Indicator(count) if count > 0 => {
                surface.fill(Color::White);
                surface.text(&count.to_string(), at.x + size / 2.0, at.y + size / 3.0 * 2.0);
            }
            CellKind::Mine => {
                surface.fill(Color::Red);
                surface.circle(at.x + size / 2.0, at.y + size / 2.0, size / 4.0 * 3.0);
            }
            CellKind::Indicator(_) | CellKind::Blank => {}
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    pub(crate) enum Op {
        Fill(Color),
        Rect(f64, f64, f64),
        Circle(f64, f64, f64),
        Text(String, f64, f64),
    }

    #[derive(Debug)]
    pub(crate) struct RecordingSurface {
        pub viewport: Viewport,
        pub ops: Vec<Op>,
    }

    impl RecordingSurface {
        pub(crate) fn new(width: f64, height: f64) -> Self {
            Self {
                viewport: Viewport::new(width, height),
                ops: Vec::new(),
            }
        }
    }

    impl Surface for RecordingSurface {
        fn viewport(&self) -> Viewport {
            self.viewport
        }

        fn fill(&mut self, color: Color) {
            self.ops.push(Op::Fill(color));
        }

        fn rect(&mut self, x: f64, y: f64, width: f64, _height: f64) {
            self.ops.push(Op::Rect(x, y, width));
        }

        fn circle(&mut self, center_x: f64, center_y: f64, diameter: f64) {
            self.ops.push(Op::Circle(center_x, center_y, diameter));
        }

        fn text(&mut self, text: &str, x: f64, y: f64) {
            self.ops.push(Op::Text(text.to_string(), x, y));
        }
    }

    fn draw(cell: Cell) -> Vec<Op> {
        let mut surface = RecordingSurface::new(100.0, 100.0);
        cell.draw(&mut surface, Point::new(10.0, 20.0), 12.0);
        surface.ops
    }

    #[test]
    fn hidden_and_flagged_cells_are_plain_squares() {
        let mut cell = Cell::mine((0, 0));
        assert_eq!(
            draw(cell),
            vec![Op::Fill(Color::White), Op::Rect(10.0, 20.0, 12.0)]
        );

        cell.toggle_flag();
        assert_eq!(
            draw(cell),
            vec![Op::Fill(Color::Orange), Op::Rect(10.0, 20.0, 12.0)]
        );
    }

    #[test]
    fn revealed_indicator_shows_its_count() {
        let mut cell = Cell::indicator((0, 0), 3);
        cell.reveal();

        assert_eq!(
            draw(cell),
            vec![
                Op::Fill(Color::Grey),
                Op::Rect(10.0, 20.0, 12.0),
                Op::Fill(Color::White),
                Op::Text("3".to_string(), 16.0, 28.0),
            ]
        );
    }

    #[test]
    fn revealed_zero_has_no_label() {
        let mut cell = Cell::indicator((0, 0), 0);
        cell.reveal();

        assert_eq!(
            draw(cell),
            vec![Op::Fill(Color::Grey), Op::Rect(10.0, 20.0, 12.0)]
        );
    }

    #[test]
    fn revealed_mine_is_a_red_circle() {
        let mut cell = Cell::mine((0, 0));
        cell.reveal();

        assert_eq!(
            draw(cell),
            vec![
                Op::Fill(Color::Grey),
                Op::Rect(10.0, 20.0, 12.0),
                Op::Fill(Color::Red),
                Op::Circle(16.0, 26.0, 9.0),
            ]
        );
    }
}
