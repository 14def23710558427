//! Frame-driven game session
//!
//! `Game::frame` is called once per rendered frame. Input is applied every
//! frame; the snake only moves once every `tick_frames` frames.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::GameConfig;
use crate::direction::Direction;
use crate::food::Food;
use crate::grid::Grid;
use crate::snake::Snake;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    /// Head ran into the body
    GameOver,
    /// Player asked to leave
    Quit,
}

/// Input gathered for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub direction: Option<Direction>,
    pub quit: bool,
}

/// What happened during a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Tick threshold not reached yet
    Waiting,
    /// Snake moved one cell
    Moved,
    /// Snake moved onto the food and grew
    Ate { score: u32 },
    GameOver { score: u32 },
    Quit { score: u32 },
}

impl FrameOutcome {
    pub fn is_terminal(&self) -> bool {
        matches!(self, FrameOutcome::GameOver { .. } | FrameOutcome::Quit { .. })
    }
}

pub struct Game {
    snake: Snake,
    food: Food,
    rng: Pcg32,
    grid: Grid,
    score: u32,
    phase: Phase,
    frame_count: u32,
    tick_frames: u32,
    ticks: u64,
}

impl Game {
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        let grid = config.grid();
        let mut rng = Pcg32::seed_from_u64(seed);
        let snake = Snake::new(config.initial_length, grid);
        let food = Food::spawn(&mut rng, grid);
        Self::from_parts(snake, food, rng, config.tick_frames)
    }

    /// Assemble a session from prepared pieces. The grid is taken from the snake.
    pub fn from_parts(snake: Snake, food: Food, rng: Pcg32, tick_frames: u32) -> Self {
        Self {
            grid: snake.grid(),
            snake,
            food,
            rng,
            score: 0,
            phase: Phase::Playing,
            frame_count: 0,
            tick_frames: tick_frames.max(1),
            ticks: 0,
        }
    }

    /// Run one rendering frame's worth of game logic.
    pub fn frame(&mut self, input: FrameInput) -> FrameOutcome {
        if self.phase == Phase::Playing && input.quit {
            self.phase = Phase::Quit;
            log::info!("Quit requested at score {}", self.score);
        }
        if let Some(outcome) = self.finished() {
            return outcome;
        }

        if let Some(direction) = input.direction {
            self.snake.set_direction(direction);
        }

        self.frame_count += 1;
        if self.frame_count < self.tick_frames {
            return FrameOutcome::Waiting;
        }
        self.frame_count = 0;
        self.tick()
    }

    /// One game tick: move, then eat or check for a bite.
    pub fn tick(&mut self) -> FrameOutcome {
        if let Some(outcome) = self.finished() {
            return outcome;
        }
        self.ticks += 1;
        self.snake.advance_tick();

        if self.snake.head_collides_with(self.food.position()) {
            self.food.relocate(&mut self.rng, self.grid);
            self.snake.grow();
            self.score += 1;
            log::debug!(
                "Ate food (score {}, length {}), next food at {:?}",
                self.score,
                self.snake.len(),
                self.food.position()
            );
            FrameOutcome::Ate { score: self.score }
        } else if self.snake.head_collides_with_self() {
            self.phase = Phase::GameOver;
            log::info!(
                "Game over after {} ticks: head hit body at {:?}",
                self.ticks,
                self.snake.head().position
            );
            FrameOutcome::GameOver { score: self.score }
        } else {
            FrameOutcome::Moved
        }
    }

    fn finished(&self) -> Option<FrameOutcome> {
        match self.phase {
            Phase::Playing => None,
            Phase::GameOver => Some(FrameOutcome::GameOver { score: self.score }),
            Phase::Quit => Some(FrameOutcome::Quit { score: self.score }),
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
