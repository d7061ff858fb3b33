use clap::Parser;
use minesweep_core as game;
use wasm_bindgen::prelude::*;

mod board_view;
mod canvas;
mod utils;

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Board width in cells
    #[arg(long, default_value_t = game::BoardConfig::DEFAULT_SIZE.0)]
    width: game::Coord,

    /// Board height in cells
    #[arg(long, default_value_t = game::BoardConfig::DEFAULT_SIZE.1)]
    height: game::Coord,

    /// Number of mines, a tenth of the cells when not given
    #[arg(short, long)]
    mines: Option<game::CellCount>,

    /// Space left around the board on the canvas
    #[arg(long, default_value_t = game::BoardConfig::DEFAULT_PADDING)]
    padding: f64,

    /// Only keep the 3x3 square around the first click free of mines
    #[arg(long)]
    square_safe_zone: bool,

    /// Open flooded regions at once instead of wave by wave
    #[arg(long)]
    instant: bool,
}

impl Args {
    fn from_location_hash(hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(hash.split(['#', '&']))
    }

    fn board_config(&self) -> game::BoardConfig {
        let mut config = game::BoardConfig::new((self.width, self.height))
            .with_padding(self.padding)
            .with_reveal_mode(if self.instant {
                game::RevealMode::Immediate
            } else {
                game::RevealMode::Deferred
            })
            .with_safe_zone(if self.square_safe_zone {
                game::SafeZone::Square
            } else {
                game::SafeZone::Legacy
            });
        config.mines = self.mines;
        config
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window().location().hash().unwrap_or_default();
    let parsed = Args::from_location_hash(&location_hash);
    let args = match &parsed {
        Ok(args) => args.clone(),
        Err(_) => Args::parse_from([""]),
    };

    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    if let Err(err) = parsed {
        log::error!("ignoring location arguments: {}", err);
    }
    log::debug!("args: {:?}", args);

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    let props = board_view::BoardProps {
        config: args.board_config(),
        seed: args.seed,
    };
    log::debug!("App started");
    yew::Renderer::<board_view::BoardView>::with_root_and_props(root, props).render();
}
