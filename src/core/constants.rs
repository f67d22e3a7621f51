// World geometry (units are pixels of the 500-unit-tall play field)
pub const FLOOR_Y: f64 = 500.0;
pub const CEILING_Y: f64 = 0.0;

// Bird
pub const START_Y: f64 = 250.0;
pub const BIRD_X: f64 = 50.0;
pub const BIRD_SIZE: f64 = 32.0;
pub const GRAVITY: f64 = 0.5;
pub const JUMP_FORCE: f64 = -10.0;

// Tilt (degrees, positive = nose down)
pub const TILT_STEP: f64 = 3.0;
pub const MAX_TILT: f64 = 90.0;
pub const FLAP_TILT: f64 = -30.0;

// Pipes
pub const PIPE_WIDTH: f64 = 64.0;
pub const PIPE_SPEED: f64 = 3.0;
pub const GAP_SIZE: f64 = 150.0;
pub const PIPE_SPAWN_X: f64 = 800.0;
pub const PIPE_PRUNE_X: f64 = -100.0;
pub const GAP_TOP_MIN: f64 = 50.0;
pub const GAP_TOP_LIMIT: f64 = 400.0;

// Timers
pub const PHYSICS_INTERVAL_MS: u64 = 20;
pub const COLLISION_INTERVAL_MS: u64 = 20;
pub const PIPE_SPAWN_INTERVAL_MS: u64 = 1500;

// Upper bound on timer firings replayed in one poll after a stall
pub const MAX_CATCH_UP_FIRINGS: u32 = 50;

// Terminal front end
pub const INPUT_POLL_MS: u64 = 8;
pub const CONFIG_DIR_NAME: &str = ".flappy";
pub const CONFIG_FILE_NAME: &str = "config.json";
