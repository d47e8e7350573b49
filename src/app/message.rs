use ggez::graphics::{Canvas, DrawParam, PxScale, Text};

use crate::basic::Point;
use crate::color::Color;
use crate::game::Game;

pub struct Message {
    pub text: String,

    pub h_margin: f32,
    pub v_margin: f32,
    pub font_size: f32,
    pub color: Color,
}

impl Message {
    pub const DEFAULT_MARGIN: f32 = 4.;

    /// Placed in the top-left corner of the window
    pub fn top_left(text: String, font_size: f32, color: Color) -> Self {
        Self {
            text,
            h_margin: Self::DEFAULT_MARGIN,
            v_margin: Self::DEFAULT_MARGIN,
            font_size,
            color,
        }
    }

    pub fn draw(&self, canvas: &mut Canvas) {
        let mut text = Text::new(self.text.as_str());
        text.set_scale(PxScale::from(self.font_size));

        let dest = Point { x: self.h_margin, y: self.v_margin };
        canvas.draw(&text, DrawParam::default().dest(dest).color(self.color));
    }
}

/// Banner text for the current state of the game, `None` while playing
pub fn status_text(game: &Game) -> Option<String> {
    if game.is_game_over() {
        Some(format!(
            "GAME OVER\n\nSCORE: {}\n\nPRESS [ENTER] TO PLAY AGAIN",
            game.score()
        ))
    } else if game.is_paused() {
        Some("GAME PAUSED".to_string())
    } else {
        None
    }
}
