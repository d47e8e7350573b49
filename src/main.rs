#[macro_use]
extern crate derive_more;

use env_logger::Env;
use ggez::event::run;
use ggez::ContextBuilder;
use log::{error, info};

use crate::app::{App, Prefs};
use crate::error::{Error, ErrorConversion, Result};

mod app;
mod basic;
mod color;
mod error;
mod game;
mod rendering;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(e) = start() {
        error!("failed to start\n{}", e);
        std::process::exit(1);
    }
}

fn start() -> Result {
    let prefs = Prefs::default();
    prefs.validate().with_trace_step("start")?;
    let app = App::new(prefs);

    let (ctx, event_loop) = ContextBuilder::new("classic_snake", "gorilskij")
        .window_mode(app.wm())
        .window_setup(app.ws())
        .build()
        .map_err(Error::from)
        .with_trace_step("start")?;

    info!("window ready, starting game loop");
    run(ctx, event_loop, app)
}
