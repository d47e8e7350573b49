use ggez::conf::{WindowMode, WindowSetup};
use ggez::event::{ErrorOrigin, EventHandler};
use ggez::graphics::{Canvas, DrawParam, Mesh};
use ggez::Context;
use log::error;

use crate::error::{Error, ErrorConversion, Result};
use crate::game::{Game, Input};
use crate::rendering;

pub use palette::Palette;
pub use prefs::Prefs;

mod keyboard;
mod message;
mod palette;
mod prefs;

pub struct App {
    game: Game,
    prefs: Prefs,
    palette: Palette,

    /// Edges seen since the last simulation frame, delivered to the next one
    pending_input: Input,

    /// Only calculated once, the board has a fixed size
    grid_mesh: Option<Mesh>,
}

impl App {
    pub fn new(prefs: Prefs) -> Self {
        Self {
            game: Game::new(prefs.clone()),
            prefs,
            palette: Palette::default(),
            pending_input: Input::default(),
            grid_mesh: None,
        }
    }

    pub fn wm(&self) -> WindowMode {
        WindowMode::default()
            .dimensions(self.prefs.window_width, self.prefs.window_height)
            .resizable(false)
    }

    pub fn ws(&self) -> WindowSetup {
        WindowSetup::default().title(&self.prefs.title).vsync(true)
    }

    fn draw_board(&mut self, canvas: &mut Canvas, ctx: &Context) -> Result {
        let board = *self.game.board();

        if self.prefs.draw_grid {
            if self.grid_mesh.is_none() {
                self.grid_mesh = Some(rendering::grid_mesh(
                    &board,
                    &self.palette,
                    self.prefs.grid_thickness,
                    ctx,
                )?);
            }
            if let Some(grid_mesh) = &self.grid_mesh {
                canvas.draw(grid_mesh, DrawParam::default());
            }
        }

        let snake_mesh = rendering::snake_mesh(self.game.segments(), &board, &self.palette, ctx)?;
        canvas.draw(&snake_mesh, DrawParam::default());

        if let Some(food) = self.game.food() {
            let food_mesh = rendering::food_mesh(food, &board, &self.palette, ctx)?;
            canvas.draw(&food_mesh, DrawParam::default());
        }

        Ok(())
    }
}

impl EventHandler<Error> for App {
    fn update(&mut self, ctx: &mut Context) -> Result {
        self.pending_input = self.pending_input.latch(keyboard::poll_input(ctx));
        while ctx.time.check_update_time(self.prefs.frame_rate) {
            self.game.update(self.pending_input);
            self.pending_input = self.pending_input.without_edges();
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> Result {
        let mut canvas = Canvas::from_frame(ctx, self.palette.background_color.0);

        // only the banner is left on screen after a game over
        if !self.game.is_game_over() {
            self.draw_board(&mut canvas, ctx).with_trace_step("App::draw")?;
        }

        if let Some(text) = message::status_text(&self.game) {
            message::Message::top_left(text, self.prefs.font_size, self.palette.text_color)
                .draw(&mut canvas);
        }

        canvas
            .finish(ctx)
            .map_err(Error::from)
            .with_trace_step("App::draw")
    }

    fn on_error(&mut self, _ctx: &mut Context, origin: ErrorOrigin, e: Error) -> bool {
        error!("{:?} failed, shutting down\n{}", origin, e);
        true
    }
}
