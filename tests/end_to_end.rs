use macroquad::color::Color;
use macroquad::math::Rect;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use wrap_snake::consts::{FOOD, SNAKE};
use wrap_snake::render::{Surface, draw_frame};
use wrap_snake::{
    Direction, Food, FrameInput, FrameOutcome, Game, GameConfig, Grid, Phase, Position, Snake,
};

#[derive(Default)]
struct CountingSurface {
    fills: Vec<(Rect, Color)>,
}

impl Surface for CountingSurface {
    fn clear(&mut self, _color: Color) {
        self.fills.clear();
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.fills.push((rect, color));
    }

    fn line(&mut self, _from: (f32, f32), _to: (f32, f32), _color: Color) {}
}

#[test]
fn eat_then_grow_then_miss() {
    let grid = Grid::default();
    let mut rng = Pcg32::seed_from_u64(5);
    let mut snake = Snake::new(5, grid);
    let mut food = Food::at(snake.head().position);

    assert!(snake.head_collides_with(food.position()));
    snake.grow();
    assert_eq!(snake.len(), 6);

    // Move the food until it lands somewhere other than the head
    while food.position() == snake.head().position {
        food.relocate(&mut rng, grid);
    }
    assert!(!snake.head_collides_with(food.position()));
}

#[test]
fn session_eats_food_in_its_path_and_renders_growth() {
    let grid = Grid::default();
    let food = Food::at(Position::new(8, 0));
    let mut game = Game::from_parts(Snake::new(5, grid), food, Pcg32::seed_from_u64(9), 2);
    let mut surface = CountingSurface::default();

    let mut ate = None;
    for _ in 0..8 {
        let outcome = game.frame(FrameInput::default());
        draw_frame(&mut surface, &game);
        if let FrameOutcome::Ate { score } = outcome {
            ate = Some(score);
        }
    }

    // Head starts at x = 4 and needs four ticks (eight frames) to reach x = 8
    assert_eq!(ate, Some(1));
    assert_eq!(game.snake().len(), 6);
    let snake_fills = surface.fills.iter().filter(|(_, c)| *c == SNAKE).count();
    let food_fills = surface.fills.iter().filter(|(_, c)| *c == FOOD).count();
    assert_eq!(snake_fills, 6);
    assert_eq!(food_fills, 1);
}

#[test]
fn session_ends_on_self_bite_and_stays_over() {
    let config = GameConfig {
        tick_frames: 1,
        seed: Some(11),
        ..GameConfig::default()
    };
    let grid = config.grid();
    // Food far away from the loop the snake is about to make
    let mut game = Game::from_parts(
        Snake::new(config.initial_length, grid),
        Food::at(Position::new(20, 20)),
        Pcg32::seed_from_u64(11),
        config.tick_frames,
    );

    let mut outcomes = Vec::new();
    for dir in [Direction::Down, Direction::Left, Direction::Up] {
        outcomes.push(game.frame(FrameInput {
            direction: Some(dir),
            quit: false,
        }));
    }
    assert_eq!(
        outcomes,
        vec![
            FrameOutcome::Moved,
            FrameOutcome::Moved,
            FrameOutcome::GameOver { score: 0 }
        ]
    );
    assert_eq!(game.phase(), Phase::GameOver);
    assert!(game.frame(FrameInput::default()).is_terminal());
}

#[test]
fn wrap_around_full_lap_returns_to_start() {
    let config = GameConfig {
        tick_frames: 1,
        ..GameConfig::default()
    };
    let grid = config.grid();
    let mut game = Game::from_parts(
        Snake::new(5, grid),
        Food::at(Position::new(0, 10)),
        Pcg32::seed_from_u64(1),
        1,
    );
    let start = game.snake().head().position;
    for _ in 0..grid.width {
        assert_eq!(game.frame(FrameInput::default()), FrameOutcome::Moved);
        for segment in game.snake().segments() {
            assert!(grid.contains(segment.position));
        }
    }
    assert_eq!(game.snake().head().position, start);
}
