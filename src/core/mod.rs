//! Tuning, time, and the game loop that owns the simulation.

pub mod clock;
pub mod config;
pub mod constants;
pub mod game_loop;
pub mod scheduler;

pub use clock::*;
pub use config::*;
pub use constants::*;
pub use game_loop::*;
pub use scheduler::*;
