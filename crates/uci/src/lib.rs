//! UCI (Universal Chess Interface) protocol library.
//!
//! This crate provides parsing for the commands a GUI sends and formatting
//! for the replies an engine writes back, one line each.
//!
//! # Commands
//!
//! - `uci` - Initialize engine, get id
//! - `isready` / `readyok` - Synchronization
//! - `ucinewgame` - Reset to the start position
//! - `position [startpos|fen <fen>] [moves <move>...]` - Set position
//! - `go` - Choose a move, answered with `bestmove`
//! - `quit` - Exit engine

mod command;

pub use command::GuiCommand;

use std::io::{BufRead, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UciError {
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Messages sent from engine to GUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineMessage {
    /// Engine identification.
    Id { name: Option<String>, author: Option<String> },
    /// UCI initialization complete.
    UciOk,
    /// Engine is ready.
    ReadyOk,
    /// Chosen move, or `None` when the side to move has none.
    BestMove(Option<String>),
}

impl EngineMessage {
    /// Move text sent when there is no move to play.
    pub const NULL_MOVE: &'static str = "0000";

    /// Format message for output.
    pub fn to_uci(&self) -> String {
        match self {
            EngineMessage::Id { name, author } => {
                let mut parts = Vec::new();
                if let Some(n) = name {
                    parts.push(format!("id name {}", n));
                }
                if let Some(a) = author {
                    parts.push(format!("id author {}", a));
                }
                parts.join("\n")
            }
            EngineMessage::UciOk => "uciok".to_string(),
            EngineMessage::ReadyOk => "readyok".to_string(),
            EngineMessage::BestMove(mv) => {
                format!("bestmove {}", mv.as_deref().unwrap_or(Self::NULL_MOVE))
            }
        }
    }
}

/// Simple UCI engine wrapper for writing bots.
pub struct UciEngine<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> UciEngine<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Read and parse the next command from GUI.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    pub fn read_command(&mut self) -> Result<Option<GuiCommand>, UciError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        GuiCommand::parse(&line).map(Some)
    }

    /// Send a message to the GUI.
    pub fn send(&mut self, msg: &EngineMessage) -> Result<(), UciError> {
        writeln!(self.writer, "{}", msg.to_uci())?;
        self.writer.flush()?;
        Ok(())
    }

    /// Send engine identification.
    pub fn send_id(&mut self, name: &str, author: &str) -> Result<(), UciError> {
        self.send(&EngineMessage::Id {
            name: Some(name.to_string()),
            author: Some(author.to_string()),
        })
    }

    /// Send uciok.
    pub fn send_uciok(&mut self) -> Result<(), UciError> {
        self.send(&EngineMessage::UciOk)
    }

    /// Send readyok.
    pub fn send_readyok(&mut self) -> Result<(), UciError> {
        self.send(&EngineMessage::ReadyOk)
    }

    /// Send best move, or the null move when there is none.
    pub fn send_bestmove(&mut self, mv: Option<&str>) -> Result<(), UciError> {
        self.send(&EngineMessage::BestMove(mv.map(str::to_string)))
    }

    /// Consumes the engine, returning the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

/// Create a UCI engine using stdin/stdout.
pub fn stdio_engine() -> UciEngine<std::io::StdinLock<'static>, std::io::Stdout> {
    UciEngine::new(std::io::stdin().lock(), std::io::stdout())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn message_formatting() {
        let id = EngineMessage::Id {
            name: Some("Random".to_string()),
            author: Some("Someone".to_string()),
        };
        assert_eq!(id.to_uci(), "id name Random\nid author Someone");
        assert_eq!(EngineMessage::UciOk.to_uci(), "uciok");
        assert_eq!(EngineMessage::ReadyOk.to_uci(), "readyok");
        assert_eq!(
            EngineMessage::BestMove(Some("e7e8q".to_string())).to_uci(),
            "bestmove e7e8q"
        );
        assert_eq!(EngineMessage::BestMove(None).to_uci(), "bestmove 0000");
    }

    #[test]
    fn reads_until_end_of_input() {
        let input = Cursor::new("uci\nposition startpos moves e2e4\n\nquit\n");
        let mut engine = UciEngine::new(input, Vec::new());
        assert_eq!(engine.read_command().unwrap(), Some(GuiCommand::Uci));
        assert!(matches!(
            engine.read_command().unwrap(),
            Some(GuiCommand::Position { fen: None, .. })
        ));
        assert_eq!(
            engine.read_command().unwrap(),
            Some(GuiCommand::Unknown(String::new()))
        );
        assert_eq!(engine.read_command().unwrap(), Some(GuiCommand::Quit));
        assert_eq!(engine.read_command().unwrap(), None);
    }

    #[test]
    fn writes_one_line_per_message() {
        let mut engine = UciEngine::new(Cursor::new(""), Vec::new());
        engine.send_id("Random", "Someone").unwrap();
        engine.send_uciok().unwrap();
        engine.send_readyok().unwrap();
        engine.send_bestmove(Some("e2e4")).unwrap();
        engine.send_bestmove(None).unwrap();
        let output = String::from_utf8(engine.into_writer()).unwrap();
        assert_eq!(
            output,
            "id name Random\nid author Someone\nuciok\nreadyok\nbestmove e2e4\nbestmove 0000\n"
        );
    }

    #[test]
    fn parse_errors_surface() {
        let mut engine = UciEngine::new(Cursor::new("position nowhere\n"), Vec::new());
        assert!(matches!(
            engine.read_command(),
            Err(UciError::ParseError(_))
        ));
    }
}
