//! Simulation of a single game of snake, free of any windowing or drawing.
//!
//! [`Game::update`] is called once per simulation frame with the keyboard
//! state of that frame, the snake itself only moves every
//! `Prefs::tick_modulus` frames.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::app::Prefs;
use crate::basic::{Board, Dir, GridPoint};

pub use food::Food;
pub use input::Input;
pub use snake::{Segment, SegmentKind, Snake};

mod food;
mod input;
mod snake;

pub struct Game {
    prefs: Prefs,
    board: Board,

    frames: usize,
    game_over: bool,
    paused: bool,

    snake: Snake,
    /// Positions of the live segments before the current frame's move
    snapshot: Box<[GridPoint]>,
    food: Food,

    /// Set after every tick and cleared by a direction change,
    /// this limits the snake to one turn per tick
    allow_move: bool,

    rng: StdRng,
}

impl Game {
    pub fn new(prefs: Prefs) -> Self {
        Self::with_rng(prefs, StdRng::from_entropy())
    }

    pub fn with_rng(prefs: Prefs, rng: StdRng) -> Self {
        let board = Board::fit(prefs.window_dim(), prefs.cell_side);
        let capacity = prefs.snake_capacity;
        Self {
            snake: Snake::new(capacity, GridPoint::ZERO, prefs.start_dir),
            snapshot: vec![GridPoint::ZERO; capacity].into_boxed_slice(),
            food: Food::inactive(),

            frames: 0,
            game_over: false,
            paused: false,
            allow_move: false,

            prefs,
            board,
            rng,
        }
    }

    /// Return every piece of state to how it was right after construction
    fn restart(&mut self) {
        self.snake = Snake::new(self.prefs.snake_capacity, GridPoint::ZERO, self.prefs.start_dir);
        self.snapshot.fill(GridPoint::ZERO);
        self.food = Food::inactive();

        self.frames = 0;
        self.game_over = false;
        self.paused = false;
        self.allow_move = false;
    }

    pub fn update(&mut self, input: Input) {
        if self.game_over {
            if input.restart {
                info!("restarting");
                self.restart();
            }
            return;
        }

        if input.pause {
            self.paused = !self.paused;
            debug!("paused: {}", self.paused);
        }
        if self.paused {
            return;
        }

        self.steer(input);

        self.snake.snapshot(&mut self.snapshot);
        if self.frames % self.prefs.tick_modulus == 0 {
            self.snake.advance(&self.snapshot);
            self.allow_move = true;
        }

        if self.crashed() {
            self.game_over = true;
            info!("game over, score: {}", self.score());
            return;
        }

        if !self.food.active {
            self.spawn_food();
        }
        self.eat();

        self.frames += 1;
    }

    /// Accept at most one perpendicular turn, keys are checked in
    /// the order right, left, up, down
    fn steer(&mut self, input: Input) {
        let requests = [
            (input.right, Dir::R),
            (input.left, Dir::L),
            (input.up, Dir::U),
            (input.down, Dir::D),
        ];
        for (pressed, dir) in requests {
            if pressed && self.allow_move && dir.can_turn_from(self.snake.dir()) {
                self.snake.set_dir(dir);
                self.allow_move = false;
            }
        }
    }

    fn crashed(&self) -> bool {
        !self.board.dim.contains(self.snake.head().pos) || self.snake.bites_itself()
    }

    fn spawn_food(&mut self) {
        let spawned = food::spawn_position(
            &self.snake,
            self.board.dim,
            self.prefs.spawn_attempts,
            &mut self.rng,
        );
        match spawned {
            Some(pos) => {
                self.food.pos = pos;
                self.food.active = true;
                debug!("food spawned at {:?}", pos);
            }
            None => debug!("no free cell for food"),
        }
    }

    fn eat(&mut self) {
        if !self.food.active || !self.snake.head().rect().overlaps(self.food.rect()) {
            return;
        }

        // the new tail appears where the old tail was before moving
        let tail = self.snapshot[self.snake.len() - 1];
        if self.snake.grow(tail) {
            debug!("snake grew to {}", self.snake.len());
        } else {
            debug!("snake is at full capacity ({})", self.snake.capacity());
        }
        self.food.active = false;
    }
}

// observers for drawing
impl Game {
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Live segments, head first
    pub fn segments(&self) -> &[Segment] {
        self.snake.segments()
    }

    pub fn food(&self) -> Option<&Food> {
        Some(&self.food).filter(|food| food.active)
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> usize {
        self.snake.len() - 1
    }
}
