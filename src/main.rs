//! Wrap Snake entry point
//!
//! Resolves the startup configuration, opens the window and runs the frame loop.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use macroquad::window::{Conf, next_frame};

use wrap_snake::consts::WINDOW_TITLE;
use wrap_snake::render::{MacroquadSurface, draw_frame};
use wrap_snake::{FrameOutcome, Game, GameConfig, input};

#[derive(Debug, Parser)]
#[command(name = "wrap_snake", version, about = "Grid snake with wrap-around edges")]
struct Cli {
    /// JSON file overriding the built-in defaults
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,
    /// Number of segments the snake starts with
    #[arg(long, value_name = "SEGMENTS")]
    initial_length: Option<usize>,
    /// Rendering frames per snake step. Larger is slower.
    #[arg(long, value_name = "FRAMES")]
    tick_frames: Option<u32>,
}

impl Cli {
    /// Defaults, then the config file, then command-line flags.
    fn resolve_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(len) = self.initial_length {
            config.initial_length = len;
        }
        if let Some(frames) = self.tick_frames {
            config.tick_frames = frames;
        }
        config.validate()?;
        Ok(config)
    }
}

fn window_conf(config: &GameConfig) -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_owned(),
        window_width: config.screen_width,
        window_height: config.screen_height,
        window_resizable: false,
        ..Default::default()
    }
}

async fn run(config: GameConfig, seed: u64) {
    let mut game = Game::new(&config, seed);
    let mut surface = MacroquadSurface;

    loop {
        let outcome = game.frame(input::poll());
        draw_frame(&mut surface, &game);

        match outcome {
            FrameOutcome::GameOver { score } => {
                // Present the frame with the bite before closing
                next_frame().await;
                println!("Game Over! Score: {score}");
                break;
            }
            FrameOutcome::Quit { score } => {
                next_frame().await;
                println!("Quit. Score: {score}");
                break;
            }
            _ => {}
        }

        next_frame().await;
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = cli.resolve_config()?;
    let seed = config.seed.unwrap_or_else(rand::random);
    let grid = config.grid();
    log::info!(
        "Starting {}x{} grid, {} segments, tick every {} frames, seed {}",
        grid.width,
        grid.height,
        config.initial_length,
        config.tick_frames,
        seed
    );

    macroquad::Window::from_config(window_conf(&config), run(config, seed));
    Ok(())
}
