use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::build_info;
use flappy::core::constants::INPUT_POLL_MS;
use flappy::input::{map_event, InputAction};
use flappy::ui::draw_ui;
use flappy::utils::cli::{parse_args, CliCommand, RunOptions, USAGE};
use flappy::utils::logging::init_file_logger;
use flappy::{GameEvent, GameLoop, SimConfig, SystemClock};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let options = match parse_args(&args) {
        Ok(CliCommand::Run(options)) => options,
        Ok(CliCommand::Help) => {
            println!("{}", USAGE);
            std::process::exit(0);
        }
        Ok(CliCommand::Version) => {
            println!("{}", build_info::version_line());
            std::process::exit(0);
        }
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'flappy --help' for usage.");
            std::process::exit(1);
        }
    };

    if let Some(path) = &options.log_file {
        init_file_logger(path)?;
    }

    // Load tuning before touching the terminal so errors print normally
    let config = SimConfig::resolve(options.config.as_deref())?;
    let mut game = GameLoop::new(config, seeded_rng(&options))?;
    log::info!("starting, seed {:?}", options.seed);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let result = run(&mut terminal, &mut game);

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;

    println!("Best score: {}", game.state().best_score);
    Ok(())
}

fn seeded_rng(options: &RunOptions) -> StdRng {
    match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Input, simulate, draw, until the player quits.
fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    game: &mut GameLoop<StdRng>,
) -> io::Result<()> {
    let clock = SystemClock::new();

    loop {
        // Drain everything that is waiting before advancing the simulation
        let mut timeout = Duration::from_millis(INPUT_POLL_MS);
        while event::poll(timeout)? {
            match map_event(&event::read()?) {
                InputAction::Game(command) => game.post(command),
                InputAction::Quit => return Ok(()),
                InputAction::Ignore => {}
            }
            timeout = Duration::ZERO;
        }

        for event in game.pump(&clock) {
            if let GameEvent::Crashed { new_best: true, score, .. } = event {
                log::info!("new best score {}", score);
            }
        }

        terminal.draw(|frame| draw_ui(frame, game.state(), game.config()))?;
    }
}
