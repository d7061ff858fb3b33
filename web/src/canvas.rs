use std::f64::consts::TAU;

use minesweep_core::{Color, Surface, Viewport};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const BACKGROUND: &str = "rgb(200, 200, 200)";
const OUTLINE: &str = "black";
const FONT: &str = "12px sans-serif";

/// [`Surface`] backed by a 2d canvas context.
pub(crate) struct CanvasSurface {
    context: CanvasRenderingContext2d,
    viewport: Viewport,
}

impl CanvasSurface {
    pub(crate) fn from_canvas(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        context.set_stroke_style_str(OUTLINE);
        context.set_line_width(1.0);
        context.set_font(FONT);
        context.set_text_align("center");

        let viewport = Viewport::new(f64::from(canvas.width()), f64::from(canvas.height()));
        Ok(Self { context, viewport })
    }

    /// Paints the whole canvas with the background color.
    pub(crate) fn clear(&mut self) {
        self.context.set_fill_style_str(BACKGROUND);
        self.context
            .fill_rect(0.0, 0.0, self.viewport.width, self.viewport.height);
    }
}

impl Surface for CanvasSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn fill(&mut self, color: Color) {
        self.context.set_fill_style_str(color.css());
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.context.fill_rect(x, y, width, height);
        self.context.stroke_rect(x, y, width, height);
    }

    fn circle(&mut self, center_x: f64, center_y: f64, diameter: f64) {
        self.context.begin_path();
        if let Err(err) = self.context.arc(center_x, center_y, diameter / 2.0, 0.0, TAU) {
            log::warn!("arc failed: {:?}", err);
            return;
        }
        self.context.fill();
        self.context.stroke();
    }

    fn text(&mut self, text: &str, x: f64, y: f64) {
        self.context.fill_text(text, x, y).ok();
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use minesweep_core::{Board, BoardConfig, Button, MineLayout};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn canvas(width: u32, height: u32) -> HtmlCanvasElement {
        let canvas = gloo::utils::document()
            .create_element("canvas")
            .unwrap()
            .dyn_into::<HtmlCanvasElement>()
            .unwrap();
        canvas.set_width(width);
        canvas.set_height(height);
        canvas
    }

    #[wasm_bindgen_test]
    fn surface_takes_viewport_from_canvas() {
        let surface = CanvasSurface::from_canvas(&canvas(300, 200)).unwrap();

        assert_eq!(surface.viewport(), Viewport::new(300.0, 200.0));
    }

    #[wasm_bindgen_test]
    fn lost_board_draws_every_shape() {
        let canvas = canvas(600, 600);
        let mut surface = CanvasSurface::from_canvas(&canvas).unwrap();
        let viewport = surface.viewport();
        let mut board = Board::new(BoardConfig::new((3, 3)), viewport, 0).unwrap();
        board
            .setup_with_layout(&MineLayout::from_mine_coords((3, 3), &[(2, 2)]).unwrap())
            .unwrap();
        board.click_at((1, 1), Button::Primary).unwrap();
        board.click_at((2, 2), Button::Primary).unwrap();

        surface.clear();
        board.draw(&mut surface);

        assert!(board.state().is_finished());
    }
}
