//! Text rendering of game events.
//!
//! Normal output goes to one writer (stdout), rejected input to another
//! (stderr). Both are trait objects so tests can capture them.

use lick_lack_rules::{Board, GameStatus, InputError, Mark, Move};
use std::io::Write;
use std::sync::{Arc, Mutex};
use tracing::{debug, instrument};

/// Banner printed once before the first board.
pub const WELCOME: &str = "Welcome to Lick-Lack-Woah! Race against a computer to lick the right sequence of acid tabs. You know the rules.";

/// Who produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSource {
    /// Typed in by the person at the keyboard.
    Human,
    /// Picked by the computer.
    Computer,
}

impl MoveSource {
    /// Label printed before the board that shows the move.
    pub fn label(self) -> &'static str {
        match self {
            MoveSource::Human => "Your move:",
            MoveSource::Computer => "AI move:",
        }
    }
}

/// Something the player should see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Game is starting.
    Welcome,
    /// The user has been given a mark.
    Assigned(Mark),
    /// Current board.
    Board(Board),
    /// Waiting for the user to type a move for this mark.
    Prompt(Mark),
    /// Typed move was refused.
    Rejected(InputError),
    /// A move was accepted.
    MoveMade {
        /// Where the move came from.
        source: MoveSource,
        /// The move itself.
        mv: Move,
    },
    /// Game ended.
    GameOver(GameStatus),
}

/// Writes game events as text.
pub struct Console {
    out: Box<dyn Write + Send>,
    err: Box<dyn Write + Send>,
}

impl Console {
    /// Creates a console over arbitrary writers.
    pub fn new(out: Box<dyn Write + Send>, err: Box<dyn Write + Send>) -> Self {
        Self { out, err }
    }

    /// Console bound to the process stdout and stderr.
    pub fn stdio() -> Self {
        Self::new(Box::new(std::io::stdout()), Box::new(std::io::stderr()))
    }

    /// Console writing into in-memory buffers.
    pub fn buffered() -> (Self, OutputBuffer, OutputBuffer) {
        let out = OutputBuffer::default();
        let err = OutputBuffer::default();
        let console = Self::new(Box::new(out.clone()), Box::new(err.clone()));
        (console, out, err)
    }

    /// Renders one event.
    #[instrument(skip(self))]
    pub fn show(&mut self, event: &GameEvent) -> std::io::Result<()> {
        match event {
            GameEvent::Welcome => writeln!(self.out, "{WELCOME}")?,
            GameEvent::Assigned(mark) => writeln!(self.out, "You are: {mark}")?,
            GameEvent::Board(board) => writeln!(self.out, "{board}")?,
            GameEvent::Prompt(mark) => {
                write!(self.out, "Enter a coordinate pair for your {mark}. Example: 0,1 > ")?
            }
            GameEvent::Rejected(reason) => {
                writeln!(self.err, "{reason}")?;
                self.err.flush()?;
            }
            GameEvent::MoveMade { source, mv } => {
                debug!(%mv, "Move made");
                writeln!(self.out, "{}", source.label())?
            }
            GameEvent::GameOver(GameStatus::Won(mark)) => {
                writeln!(self.out, "{mark} is the winner! Good game.")?
            }
            GameEvent::GameOver(GameStatus::Draw) => writeln!(self.out, "Draw! Try again.")?,
            GameEvent::GameOver(GameStatus::InProgress) => {}
        }
        self.out.flush()
    }
}

/// Shared in-memory writer.
#[derive(Debug, Clone, Default)]
pub struct OutputBuffer(Arc<Mutex<Vec<u8>>>);

impl OutputBuffer {
    /// Everything written so far.
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(|e| e.into_inner());
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for OutputBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap_or_else(|e| e.into_inner()).extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lick_lack_rules::Position;

    #[test]
    fn test_welcome_banner() {
        let (mut console, out, _err) = Console::buffered();
        console.show(&GameEvent::Welcome).unwrap();

        assert_eq!(
            out.contents(),
            "Welcome to Lick-Lack-Woah! Race against a computer to lick the right sequence of acid tabs. You know the rules.\n"
        );
    }

    #[test]
    fn test_rejections_go_to_err() {
        let (mut console, out, err) = Console::buffered();
        console.show(&GameEvent::Rejected(InputError::XOutOfRange)).unwrap();

        assert_eq!(out.contents(), "");
        assert_eq!(err.contents(), "x-coord out of range.\n");
    }

    #[test]
    fn test_final_messages() {
        let (mut console, out, _err) = Console::buffered();
        console.show(&GameEvent::GameOver(GameStatus::Won(Mark::L))).unwrap();
        console.show(&GameEvent::GameOver(GameStatus::Draw)).unwrap();

        assert_eq!(out.contents(), "L is the winner! Good game.\nDraw! Try again.\n");
    }

    #[test]
    fn test_prompt_and_labels() {
        let (mut console, out, _err) = Console::buffered();
        console.show(&GameEvent::Prompt(Mark::W)).unwrap();
        console
            .show(&GameEvent::MoveMade {
                source: MoveSource::Computer,
                mv: Move::new(Position::Center, Mark::L),
            })
            .unwrap();

        assert_eq!(
            out.contents(),
            "Enter a coordinate pair for your W. Example: 0,1 > AI move:\n"
        );
    }
}
