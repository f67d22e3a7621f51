//! Flappy simulation.
//!
//! A bird falls under constant gravity while pipe pairs scroll in from the
//! right. Each timer callback (physics, collision, spawn) is a free function
//! over [`SimulationState`]; none of them know about clocks or terminals.

pub mod collision;
pub mod logic;
pub mod obstacles;
pub mod physics;
pub mod types;

pub use collision::*;
pub use logic::*;
pub use obstacles::*;
pub use physics::*;
pub use types::*;
