//! Terminal blockfall runner (default binary).
//!
//! Reads keys with crossterm, drives the session's gravity from its own tick
//! interval and renders through the framebuffer renderer.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, info, warn};

use blockfall::core::{GameState, SessionConfig};
use blockfall::input::handle_key_event;
use blockfall::logging::{init_log, parse_level};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{GameAction, ScoringProfile};

/// How long to wait for input when no tick is scheduled (paused or game over).
const IDLE_POLL: Duration = Duration::from_millis(250);

#[derive(Parser, Debug)]
#[command(name = "blockfall", version, about = "Falling-block puzzle game for the terminal")]
struct Args {
    /// Piece picker seed. Defaults to a value taken from the clock.
    #[arg(long)]
    seed: Option<u32>,

    /// Scoring profile: linear | triangular
    #[arg(long, default_value = "linear")]
    scoring: String,

    /// Log file path.
    #[arg(long, default_value = "log/blockfall.log")]
    log_file: String,

    /// Log level: off | error | warn | info | debug | trace
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let scoring = ScoringProfile::from_str(&args.scoring)
        .ok_or_else(|| anyhow!("unknown scoring profile: {}", args.scoring))?;
    let level = parse_level(&args.log_level)
        .ok_or_else(|| anyhow!("unknown log level: {}", args.log_level))?;
    init_log(level, &args.log_file)?;

    let seed = args.seed.unwrap_or_else(clock_seed);
    info!("starting blockfall seed={} scoring={}", seed, scoring.as_str());

    let game = GameState::with_config(SessionConfig {
        seed,
        scoring,
        ..SessionConfig::default()
    });

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game);

    // Always try to restore terminal state.
    if let Err(e) = term.exit() {
        warn!("failed to restore terminal: {}", e);
    }
    result
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, mut game: GameState) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut deadline = game.next_tick_in().map(|d| Instant::now() + d);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        let timeout = match deadline {
            Some(at) => at.saturating_duration_since(Instant::now()),
            None => IDLE_POLL,
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(action) = handle_key_event(key) {
                        let changed = game.apply_action(action);
                        debug!("{} changed={}", action.as_str(), changed);
                        if game.quit_requested() {
                            info!("quit requested, final score {}", game.score());
                            return Ok(());
                        }
                        // Pause and restart change the schedule; moves keep it.
                        if matches!(action, GameAction::Pause | GameAction::Restart) {
                            deadline = game.next_tick_in().map(|d| Instant::now() + d);
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        if deadline.is_some_and(|at| Instant::now() >= at) {
            game.tick();
            deadline = game.next_tick_in().map(|d| Instant::now() + d);
        }
    }
}
