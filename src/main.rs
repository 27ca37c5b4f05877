//! Multris runner (default binary).
//!
//! The driver that the core deliberately does not contain: a fixed-interval
//! loop that steps the simulation and renders between steps. All players
//! share one grid and fall concurrently; shapes that can no longer move
//! lock, rows clear, and each lock spawns a replacement. `q` quits, `r`
//! starts a new round after game over.

use std::env;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use multris::core::{Game, GameMap};
use multris::term::{Frame, TerminalRenderer};
use multris::types::{GRID_COLS, GRID_ROWS, STEP_INTERVAL_MS};

fn main() -> Result<()> {
    env_logger::init();

    let player_count: u32 = env::args()
        .nth(1)
        .map(|arg| arg.parse())
        .transpose()?
        .unwrap_or(2);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, player_count);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Construct a fresh round: empty grid, players registered, first shapes
/// spawned. After game over this runs again - the core never auto-restarts.
fn new_round(player_count: u32, seed: u32) -> Game {
    let mut game = Game::new(GameMap::new(GRID_COLS, GRID_ROWS), seed);
    for player in 0..player_count {
        game.register_player(player);
        game.add_new_shape(player);
    }
    game
}

fn run(term: &mut TerminalRenderer, player_count: u32) -> Result<()> {
    let mut seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);
    let mut game = new_round(player_count, seed);

    let step_interval = Duration::from_millis(STEP_INTERVAL_MS);
    let mut last_step = Instant::now();

    loop {
        let status = if game.is_game_over() {
            "GAME OVER - press r for a new round, q to quit"
        } else {
            "q to quit"
        };
        term.draw(&Frame::compose(&game), Some(status))?;

        // Input with timeout until the next step.
        let timeout = step_interval
            .checked_sub(last_step.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Char('r') if game.is_game_over() => {
                            // Each round gets a fresh spawn sequence.
                            seed = seed.wrapping_add(1);
                            game = new_round(player_count, seed);
                            last_step = Instant::now();
                        }
                        _ => {}
                    }
                }
            }
        }

        if last_step.elapsed() >= step_interval {
            last_step = Instant::now();
            game.step();
        }
    }
}
