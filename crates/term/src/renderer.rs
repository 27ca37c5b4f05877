//! TerminalRenderer: flushes composed frames to a real terminal.
//!
//! Full redraw every frame; the grids involved are tiny. Each player id maps
//! to a fixed color from a small palette - identity-to-color is this layer's
//! concern, the core knows nothing about it.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor},
    terminal, QueueableCommand,
};

use multris_types::PlayerId;

use crate::view::Frame;

/// Palette cycled by player id.
const PLAYER_COLORS: [Color; 6] = [
    Color::Cyan,
    Color::Magenta,
    Color::Yellow,
    Color::Green,
    Color::Blue,
    Color::Red,
];

/// Fixed color for a player id.
pub fn player_color(player: PlayerId) -> Color {
    PLAYER_COLORS[player as usize % PLAYER_COLORS.len()]
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw one frame with a border, plus an optional status line below.
    ///
    /// Cells render two columns wide to compensate for terminal glyph
    /// aspect ratio.
    pub fn draw(&mut self, frame: &Frame, status: Option<&str>) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;
        self.stdout.queue(cursor::MoveTo(0, 0))?;

        let inner_width = frame.width() as usize * 2;
        self.stdout
            .queue(Print(format!("+{}+", "-".repeat(inner_width))))?;

        for row in 0..frame.height() {
            self.stdout.queue(cursor::MoveTo(0, row as u16 + 1))?;
            self.stdout.queue(Print("|"))?;
            for col in 0..frame.width() {
                match frame.cell(row, col) {
                    Some(player) => {
                        self.stdout.queue(SetBackgroundColor(player_color(player)))?;
                        self.stdout.queue(Print("  "))?;
                        self.stdout.queue(ResetColor)?;
                    }
                    None => {
                        self.stdout.queue(Print("  "))?;
                    }
                }
            }
            self.stdout.queue(Print("|"))?;
        }

        self.stdout
            .queue(cursor::MoveTo(0, frame.height() as u16 + 1))?;
        self.stdout
            .queue(Print(format!("+{}+", "-".repeat(inner_width))))?;

        if let Some(status) = status {
            self.stdout
                .queue(cursor::MoveTo(0, frame.height() as u16 + 2))?;
            self.stdout.queue(Print(status))?;
        }

        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}
