//! Simulation tuning.
//!
//! Every constant the simulation reads lives in [`SimConfig`]. The defaults
//! reproduce the classic tuning; a JSON file can override any subset of
//! fields for experimentation.

use super::constants::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Tuning values for one game process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub gravity: f64,
    pub jump_force: f64,
    pub pipe_speed: f64,
    pub gap_size: f64,
    pub floor_y: f64,
    pub ceiling_y: f64,
    pub start_y: f64,
    pub bird_x: f64,
    pub bird_size: f64,
    pub pipe_width: f64,
    pub pipe_spawn_x: f64,
    pub pipe_prune_x: f64,
    pub gap_top_min: f64,
    pub gap_top_limit: f64,
    pub tilt_step: f64,
    pub max_tilt: f64,
    pub flap_tilt: f64,
    pub physics_interval_ms: u64,
    pub collision_interval_ms: u64,
    pub spawn_interval_ms: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_force: JUMP_FORCE,
            pipe_speed: PIPE_SPEED,
            gap_size: GAP_SIZE,
            floor_y: FLOOR_Y,
            ceiling_y: CEILING_Y,
            start_y: START_Y,
            bird_x: BIRD_X,
            bird_size: BIRD_SIZE,
            pipe_width: PIPE_WIDTH,
            pipe_spawn_x: PIPE_SPAWN_X,
            pipe_prune_x: PIPE_PRUNE_X,
            gap_top_min: GAP_TOP_MIN,
            gap_top_limit: GAP_TOP_LIMIT,
            tilt_step: TILT_STEP,
            max_tilt: MAX_TILT,
            flap_tilt: FLAP_TILT,
            physics_interval_ms: PHYSICS_INTERVAL_MS,
            collision_interval_ms: COLLISION_INTERVAL_MS,
            spawn_interval_ms: PIPE_SPAWN_INTERVAL_MS,
        }
    }
}

impl SimConfig {
    /// Exclusive upper bound for a spawned pipe's gap top.
    pub fn gap_top_max(&self) -> f64 {
        self.gap_top_limit - self.gap_size
    }

    /// Reject tunings the simulation cannot run with.
    pub fn validate(&self) -> Result<(), String> {
        if self.physics_interval_ms == 0
            || self.collision_interval_ms == 0
            || self.spawn_interval_ms == 0
        {
            return Err("timer intervals must be greater than zero".to_string());
        }
        if self.floor_y <= self.ceiling_y {
            return Err(format!(
                "floor_y ({}) must be below ceiling_y ({})",
                self.floor_y, self.ceiling_y
            ));
        }
        if !(self.ceiling_y..=self.floor_y).contains(&self.start_y) {
            return Err(format!(
                "start_y ({}) must lie within [{}, {}]",
                self.start_y, self.ceiling_y, self.floor_y
            ));
        }
        if self.pipe_speed <= 0.0 {
            return Err(format!("pipe_speed ({}) must be positive", self.pipe_speed));
        }
        if self.pipe_spawn_x <= self.pipe_prune_x {
            return Err(format!(
                "pipe_spawn_x ({}) must be right of pipe_prune_x ({})",
                self.pipe_spawn_x, self.pipe_prune_x
            ));
        }
        if self.gap_size <= 0.0 || self.bird_size <= 0.0 || self.pipe_width <= 0.0 {
            return Err("gap_size, bird_size and pipe_width must be positive".to_string());
        }
        if self.gap_top_max() <= self.gap_top_min {
            return Err(format!(
                "gap range is empty: gap_top_min {} >= gap_top_limit - gap_size {}",
                self.gap_top_min,
                self.gap_top_max()
            ));
        }
        if self.gap_top_min < self.ceiling_y || self.gap_top_limit > self.floor_y {
            return Err("pipe gaps must fit between ceiling_y and floor_y".to_string());
        }
        if self.max_tilt < self.flap_tilt {
            return Err("max_tilt must not be below flap_tilt".to_string());
        }
        Ok(())
    }

    /// Parse and validate a JSON tuning document. Missing fields fall back
    /// to their defaults.
    pub fn from_json(json: &str) -> io::Result<Self> {
        let config: SimConfig = serde_json::from_str(json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        config
            .validate()
            .map_err(|msg| io::Error::new(io::ErrorKind::InvalidData, msg))?;
        Ok(config)
    }

    /// Load a tuning file from an explicit path.
    pub fn load(path: &Path) -> io::Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Resolve the tuning for this process: an explicit path must exist;
    /// otherwise `~/.flappy/config.json` is used when present, else defaults.
    pub fn resolve(explicit: Option<&Path>) -> io::Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match default_config_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }
}

/// `~/.flappy/config.json`, if a home directory can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
