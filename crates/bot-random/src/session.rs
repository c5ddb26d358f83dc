//! The command loop: one live board, replaced on `ucinewgame` and `position`.

use crate::{EngineConfig, MoveChooser};
use chess_core::Move;
use chess_engine::{new_board, start_board, Board, BoardKind};
use std::io::{BufRead, Write};
use std::ops::ControlFlow;
use uci::{GuiCommand, UciEngine, UciError};

pub const ENGINE_NAME: &str = "RandomBot";
pub const ENGINE_AUTHOR: &str = "Chess Devtools";

pub struct Session<C: MoveChooser> {
    kind: BoardKind,
    board: Box<dyn Board>,
    chooser: C,
}

impl<C: MoveChooser> Session<C> {
    pub fn new(config: &EngineConfig, chooser: C) -> Self {
        let kind = config.board_kind();
        tracing::info!("Using {} board representation", kind);
        Session {
            kind,
            board: start_board(kind),
            chooser,
        }
    }

    /// The current position.
    pub fn board(&self) -> &dyn Board {
        self.board.as_ref()
    }

    /// Reads and answers commands until `quit` or the end of input.
    ///
    /// Malformed commands are logged and skipped; I/O errors end the loop.
    pub fn run<R: BufRead, W: Write>(&mut self, engine: &mut UciEngine<R, W>) -> Result<(), UciError> {
        loop {
            let cmd = match engine.read_command() {
                Ok(Some(cmd)) => cmd,
                Ok(None) => {
                    tracing::info!("Input closed");
                    return Ok(());
                }
                Err(UciError::ParseError(e)) => {
                    tracing::warn!("Ignoring malformed command: {}", e);
                    continue;
                }
                Err(e) => return Err(e),
            };
            tracing::debug!("Received: {:?}", cmd);

            if self.handle(cmd, engine)?.is_break() {
                return Ok(());
            }
        }
    }

    /// Answers a single command.
    pub fn handle<R: BufRead, W: Write>(
        &mut self,
        cmd: GuiCommand,
        engine: &mut UciEngine<R, W>,
    ) -> Result<ControlFlow<()>, UciError> {
        match cmd {
            GuiCommand::Uci => {
                engine.send_id(ENGINE_NAME, ENGINE_AUTHOR)?;
                engine.send_uciok()?;
            }

            GuiCommand::IsReady => {
                engine.send_readyok()?;
            }

            GuiCommand::UciNewGame => {
                self.board = start_board(self.kind);
            }

            GuiCommand::Position { fen, moves } => {
                self.set_position(fen.as_deref(), &moves);
            }

            GuiCommand::Go => {
                let best = self.chooser.choose(self.board.as_ref()).map(Move::to_uci);
                match &best {
                    Some(mv) => tracing::debug!("Sending: bestmove {}", mv),
                    None => tracing::info!("No legal moves ({:?})", self.board.status()),
                }
                engine.send_bestmove(best.as_deref())?;
            }

            GuiCommand::Quit => {
                tracing::info!("Quit received");
                return Ok(ControlFlow::Break(()));
            }

            GuiCommand::Unknown(text) => {
                if !text.is_empty() {
                    tracing::debug!("Ignoring unknown command: {}", text);
                }
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    /// Replaces the board, then plays `moves` while each one is legal.
    fn set_position(&mut self, fen: Option<&str>, moves: &[String]) {
        self.board = match fen {
            None => start_board(self.kind),
            Some(fen) => new_board(self.kind, Some(fen)).unwrap_or_else(|e| {
                tracing::warn!("Invalid FEN '{}' ({}), using start position", fen, e);
                start_board(self.kind)
            }),
        };

        for (i, text) in moves.iter().enumerate() {
            let legal = Move::parse(text)
                .ok()
                .filter(|m| self.board.legal_moves().contains(m));
            match legal {
                Some(m) => self.board.apply_move(m),
                None => {
                    tracing::warn!(
                        "Move '{}' is not legal here, dropping it and {} later move(s)",
                        text,
                        moves.len() - i - 1
                    );
                    break;
                }
            }
        }
    }
}
