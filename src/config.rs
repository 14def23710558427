//! Startup configuration
//!
//! Defaults live in `consts`; an optional JSON file overrides them and any
//! field left out of the file keeps its default.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::grid::Grid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Window width in pixels
    pub screen_width: i32,
    /// Window height in pixels
    pub screen_height: i32,
    /// Edge length of one grid cell in pixels
    pub cell_size: i32,
    /// Segments the snake starts with
    pub initial_length: usize,
    /// Rendering frames per game tick
    pub tick_frames: u32,
    /// Food RNG seed; random when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            cell_size: CELL_SIZE,
            initial_length: INITIAL_LENGTH,
            tick_frames: TICK_FRAMES,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Read a JSON config file. Not validated: later overrides may still
    /// replace its values, so call `validate` once everything is merged.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config = Self::parse(&text)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parse and validate in one step.
    pub fn from_json(text: &str) -> Result<Self> {
        let config = Self::parse(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.cell_size <= 0 {
            bail!("cell_size must be positive, got {}", self.cell_size);
        }
        let grid = self.grid();
        if grid.width < 1 || grid.height < 1 {
            bail!(
                "{}x{} px with {} px cells leaves no playable grid",
                self.screen_width,
                self.screen_height,
                self.cell_size
            );
        }
        if self.tick_frames == 0 {
            bail!("tick_frames must be at least 1");
        }
        if self.initial_length == 0 {
            bail!("initial_length must be at least 1");
        }
        if self.initial_length > grid.width as usize {
            bail!(
                "initial_length {} does not fit in a row of {} cells",
                self.initial_length,
                grid.width
            );
        }
        Ok(())
    }

    pub fn grid(&self) -> Grid {
        Grid::from_resolution(self.screen_width, self.screen_height, self.cell_size)
    }
}
