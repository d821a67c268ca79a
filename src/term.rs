use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, poll, read};

use crate::grid::Position;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KeyPress {
    Char(char),
    /// Ctrl+C. Raw mode swallows the signal, so it arrives as a key.
    Interrupt,
    /// Arrows, function keys and the like
    Other,
}

/// What the game needs from a screen: a non-blocking key poll and
/// cursor-addressed character output.
pub trait Terminal {
    /// The next pending key, or `None` right away if there is none.
    fn poll_key(&mut self) -> Result<Option<KeyPress>>;

    fn draw_glyph(&mut self, pos: Position, ch: char) -> Result<()>;

    fn draw_text(&mut self, pos: Position, text: &str) -> Result<()> {
        for (i, ch) in text.chars().enumerate() {
            self.draw_glyph(Position::new(pos.row, pos.col + i as i16), ch)?;
        }
        Ok(())
    }

    /// Pushes everything drawn so far to the screen
    fn refresh(&mut self) -> Result<()>;
}

pub struct TermManager {
    stdout: Stdout,
}

impl TermManager {
    pub fn new() -> Self {
        TermManager { stdout: stdout() }
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen).context("Error entering alt screen")?;
        terminal::enable_raw_mode().context("Error setting raw mode")?;
        execute!(self.stdout, cursor::Hide, terminal::Clear(ClearType::All))
            .context("Error preparing the screen")?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        terminal::disable_raw_mode().context("Error unsetting raw mode")?;
        execute!(self.stdout, cursor::Show, LeaveAlternateScreen).context("Error leaving alt screen")?;
        Ok(())
    }
}

impl Terminal for TermManager {
    fn poll_key(&mut self) -> Result<Option<KeyPress>> {
        // Skip over resizes and mouse events, stop at the first key
        while poll(Duration::from_millis(0))? {
            if let Event::Key(ev) = read()? {
                return Ok(Some(to_key_press(ev)));
            }
        }

        Ok(None)
    }

    fn draw_glyph(&mut self, pos: Position, ch: char) -> Result<()> {
        if pos.row < 0 || pos.col < 0 {
            return Ok(());
        }

        queue!(self.stdout, cursor::MoveTo(pos.col as u16, pos.row as u16), style::Print(ch))?;
        Ok(())
    }

    fn refresh(&mut self) -> Result<()> {
        self.stdout.flush().context("Error flushing")
    }
}

fn to_key_press(ev: KeyEvent) -> KeyPress {
    match ev {
        KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL } => KeyPress::Interrupt,
        KeyEvent { code: KeyCode::Char(ch), modifiers: _ } => KeyPress::Char(ch),
        KeyEvent { code: _, modifiers: _ } => KeyPress::Other,
    }
}
