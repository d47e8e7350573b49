use static_assertions::const_assert;
use std::cmp::max;

use crate::basic::{Dir, Point};
use crate::error::{Error, Result};

const WINDOW_WIDTH: u32 = 800;
const WINDOW_HEIGHT: u32 = 450;
const CELL_SIDE: u32 = 31;
const SNAKE_CAPACITY: usize = 256;
const TICK_MODULUS: usize = 5;

// a full-length snake must still leave room for food
const_assert!(SNAKE_CAPACITY < ((WINDOW_WIDTH / CELL_SIDE) * (WINDOW_HEIGHT / CELL_SIDE)) as usize);
const_assert!(TICK_MODULUS > 0);

#[derive(Clone, Debug)]
pub struct Prefs {
    pub title: String,
    pub window_width: f32,
    pub window_height: f32,
    /// Side length of a square cell in pixels
    pub cell_side: f32,

    /// Simulation frames per second
    pub frame_rate: u32,
    /// The snake moves once every `tick_modulus` simulation frames
    pub tick_modulus: usize,
    pub snake_capacity: usize,
    pub start_dir: Option<Dir>,
    /// Random placements tried before falling back to
    /// enumerating free cells
    pub spawn_attempts: usize,

    pub draw_grid: bool,
    pub grid_thickness: f32,
    pub font_size: f32,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            title: "classic game: snake".to_string(),
            window_width: WINDOW_WIDTH as f32,
            window_height: WINDOW_HEIGHT as f32,
            cell_side: CELL_SIDE as f32,

            frame_rate: 60,
            tick_modulus: TICK_MODULUS,
            snake_capacity: SNAKE_CAPACITY,
            start_dir: Some(Dir::R),
            spawn_attempts: 64,

            draw_grid: true,
            grid_thickness: 1.,
            font_size: 16.,
        }
    }
}

impl Prefs {
    pub fn window_dim(&self) -> Point {
        Point {
            x: self.window_width,
            y: self.window_height,
        }
    }

    /// Reject preferences that can't produce a playable board
    pub fn validate(&self) -> Result {
        if !(self.cell_side > 0.) {
            return Err(Error::invalid_prefs(format!(
                "cell side must be positive, got {}",
                self.cell_side
            )));
        }
        if self.window_width < self.cell_side || self.window_height < self.cell_side {
            return Err(Error::invalid_prefs(format!(
                "a {}x{} window can't fit a single {}px cell",
                self.window_width, self.window_height, self.cell_side
            )));
        }
        if self.frame_rate == 0 || self.tick_modulus == 0 || self.snake_capacity == 0 {
            return Err(Error::invalid_prefs(
                "frame rate, tick modulus and snake capacity must be non-zero",
            ));
        }
        Ok(())
    }
}

// builder
#[allow(dead_code)]
impl Prefs {
    pub fn window(mut self, width: f32, height: f32) -> Self {
        self.window_width = width;
        self.window_height = height;
        self
    }

    pub fn tick_modulus(mut self, tick_modulus: usize) -> Self {
        self.tick_modulus = max(1, tick_modulus);
        self
    }

    pub fn snake_capacity(mut self, snake_capacity: usize) -> Self {
        self.snake_capacity = max(1, snake_capacity);
        self
    }

    pub fn start_dir(mut self, start_dir: Option<Dir>) -> Self {
        self.start_dir = start_dir;
        self
    }

    pub fn spawn_attempts(mut self, spawn_attempts: usize) -> Self {
        self.spawn_attempts = spawn_attempts;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prefs_are_valid() {
        assert!(Prefs::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_prefs() {
        let mut no_cell = Prefs::default();
        no_cell.cell_side = 0.;
        let tiny_window = Prefs::default().window(30., 450.);
        let mut no_frames = Prefs::default();
        no_frames.frame_rate = 0;

        for prefs in [no_cell, tiny_window, no_frames] {
            let err = prefs.validate().unwrap_err();
            assert!(err.to_string().starts_with("invalid preferences"), "{}", err);
        }
    }

    #[test]
    fn test_builder_never_zeroes_counts() {
        let prefs = Prefs::default().tick_modulus(0).snake_capacity(0);
        assert_eq!(prefs.tick_modulus, 1);
        assert_eq!(prefs.snake_capacity, 1);
        assert!(prefs.validate().is_ok());
    }
}
