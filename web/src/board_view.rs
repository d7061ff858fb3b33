use gloo::timers::callback::Timeout;
use minesweep_core as game;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::canvas::CanvasSurface;
use crate::utils::{board_button, js_random_seed, key_char};

/// Side of the square canvas, in pixels.
const CANVAS_SIZE: u32 = 600;
/// Delay before the next flood wave and before the end-of-game alert, in milliseconds.
const STEP_DELAY: u32 = 10;

#[derive(Properties, Clone, Debug, PartialEq)]
pub(crate) struct BoardProps {
    pub config: game::BoardConfig,
    #[prop_or_default]
    pub seed: Option<u64>,
}

#[derive(Clone, Debug)]
pub(crate) enum Msg {
    Pointer { x: f64, y: f64, button: i16 },
    Key(String),
    Advance,
}

pub(crate) struct BoardView {
    board: game::Result<game::Board>,
    canvas: NodeRef,
    flood_timer: Option<Timeout>,
}

fn viewport() -> game::Viewport {
    let side = f64::from(CANVAS_SIZE);
    game::Viewport::new(side, side)
}

fn notify(outcome: game::GameOutcome) {
    log::info!("{}", outcome.message());
    Timeout::new(STEP_DELAY, move || gloo::dialogs::alert(outcome.message())).forget();
}

impl BoardView {
    fn draw(&self) {
        let (Ok(board), Some(canvas)) = (&self.board, self.canvas.cast::<HtmlCanvasElement>())
        else {
            return;
        };

        match CanvasSurface::from_canvas(&canvas) {
            Ok(mut surface) => {
                surface.clear();
                board.draw(&mut surface);
            }
            Err(err) => log::error!("cannot draw board: {:?}", err),
        }
    }
}

impl Component for BoardView {
    type Message = Msg;
    type Properties = BoardProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let seed = props.seed.unwrap_or_else(js_random_seed);
        log::debug!("seed: {}", seed);

        let board = game::Board::new(props.config, viewport(), seed);
        if let Err(err) = &board {
            log::error!("cannot create board: {}", err);
        }

        Self {
            board,
            canvas: NodeRef::default(),
            flood_timer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        let Ok(board) = &mut self.board else {
            return false;
        };

        let outcome = match msg {
            Pointer { x, y, button } => {
                let Some(button) = board_button(button) else {
                    return false;
                };
                let point = game::Point::new(x, y);
                board.handle(viewport(), game::InputEvent::PointerDown { point, button })
            }
            Key(key) => {
                let Some(key) = key_char(&key) else {
                    return false;
                };
                board.handle(viewport(), game::InputEvent::KeyPress(key))
            }
            Advance => {
                self.flood_timer = None;
                Ok(board.advance())
            }
        };

        let outcome = match outcome {
            Ok(outcome) => outcome,
            Err(err) => {
                log::warn!("move rejected: {}", err);
                return false;
            }
        };

        if board.has_pending() && self.flood_timer.is_none() {
            let link = ctx.link().clone();
            self.flood_timer = Some(Timeout::new(STEP_DELAY, move || {
                link.send_message(Advance)
            }));
        }
        if let Some(result) = outcome.notification() {
            notify(result);
        }

        outcome.has_update()
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if let Err(err) = &self.board {
            return html! {
                <p class="error">{ err.to_string() }</p>
            };
        }

        let onmousedown = ctx.link().callback(|e: MouseEvent| Msg::Pointer {
            x: f64::from(e.offset_x()),
            y: f64::from(e.offset_y()),
            button: e.button(),
        });
        let onkeydown = ctx.link().callback(|e: KeyboardEvent| Msg::Key(e.key()));

        html! {
            <canvas
                ref={self.canvas.clone()}
                width={CANVAS_SIZE.to_string()}
                height={CANVAS_SIZE.to_string()}
                tabindex="0"
                {onmousedown}
                {onkeydown}
                oncontextmenu={Callback::from(move |e: MouseEvent| e.prevent_default())}
            />
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            if let Some(canvas) = self.canvas.cast::<HtmlCanvasElement>() {
                canvas.focus().ok();
            }
        }
        self.draw();
    }
}
