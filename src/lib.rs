//! Flappy - Terminal Arcade Game Library
//!
//! The simulation (`game`), its timers and owning loop (`core`), and the
//! terminal front end (`ui`, `input`) are exposed for the binary and for
//! integration tests.

pub mod build_info;
pub mod core;
pub mod game;
pub mod input;
pub mod ui;
pub mod utils;

pub use crate::core::clock::{Clock, ManualClock, SystemClock};
pub use crate::core::config::SimConfig;
pub use crate::core::game_loop::{Command, GameLoop};
pub use crate::core::scheduler::TimerKind;
pub use game::{GameEvent, Obstacle, Phase, SimulationState};
