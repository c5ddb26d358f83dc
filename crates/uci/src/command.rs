//! UCI command parsing.

use crate::UciError;

/// Commands sent from GUI to engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuiCommand {
    /// Initialize UCI mode.
    Uci,
    /// Check if engine is ready.
    IsReady,
    /// Forget the current game and start from the initial position.
    UciNewGame,
    /// Set up position. `fen: None` means the start position.
    Position {
        fen: Option<String>,
        moves: Vec<String>,
    },
    /// Choose a move. Search limits are accepted and ignored.
    Go,
    /// Quit the engine.
    Quit,
    /// Unknown command (for forward compatibility).
    Unknown(String),
}

impl GuiCommand {
    /// Parse a UCI command string.
    pub fn parse(input: &str) -> Result<Self, UciError> {
        let input = input.trim();
        let mut parts = input.split_whitespace();

        let cmd = parts.next().unwrap_or("");

        match cmd {
            "uci" => Ok(GuiCommand::Uci),
            "isready" => Ok(GuiCommand::IsReady),
            "ucinewgame" => Ok(GuiCommand::UciNewGame),
            "quit" => Ok(GuiCommand::Quit),
            "position" => Self::parse_position(parts),
            "go" => Ok(GuiCommand::Go),
            _ => Ok(GuiCommand::Unknown(input.to_string())),
        }
    }

    fn parse_position<'a>(mut parts: impl Iterator<Item = &'a str>) -> Result<Self, UciError> {
        let fen = match parts.next() {
            Some("startpos") => None,
            Some("fen") => {
                // FEN fields run until "moves" or the end of the line
                let fen_parts: Vec<&str> = parts.by_ref().take_while(|&p| p != "moves").collect();
                if fen_parts.is_empty() {
                    return Err(UciError::ParseError("Missing FEN after 'fen'".to_string()));
                }
                let moves = parts.map(str::to_string).collect();
                return Ok(GuiCommand::Position {
                    fen: Some(fen_parts.join(" ")),
                    moves,
                });
            }
            Some(other) => {
                return Err(UciError::ParseError(format!(
                    "Expected 'startpos' or 'fen', got '{}'",
                    other
                )));
            }
            None => {
                return Err(UciError::ParseError(
                    "Expected 'startpos' or 'fen'".to_string(),
                ));
            }
        };

        let moves = parts
            .skip_while(|&p| p != "moves")
            .skip(1)
            .map(str::to_string)
            .collect();

        Ok(GuiCommand::Position { fen, moves })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_commands() {
        assert_eq!(GuiCommand::parse("uci").unwrap(), GuiCommand::Uci);
        assert_eq!(GuiCommand::parse("isready\n").unwrap(), GuiCommand::IsReady);
        assert_eq!(GuiCommand::parse("  ucinewgame ").unwrap(), GuiCommand::UciNewGame);
        assert_eq!(GuiCommand::parse("quit").unwrap(), GuiCommand::Quit);
    }

    #[test]
    fn parse_go_ignores_limits() {
        assert_eq!(GuiCommand::parse("go").unwrap(), GuiCommand::Go);
        assert_eq!(
            GuiCommand::parse("go wtime 1000 btime 1000 movetime 50").unwrap(),
            GuiCommand::Go
        );
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(
            GuiCommand::parse("setoption name Hash value 16").unwrap(),
            GuiCommand::Unknown("setoption name Hash value 16".to_string())
        );
        assert_eq!(
            GuiCommand::parse("").unwrap(),
            GuiCommand::Unknown(String::new())
        );
    }

    #[test]
    fn parse_position_startpos() {
        let cmd = GuiCommand::parse("position startpos").unwrap();
        assert_eq!(
            cmd,
            GuiCommand::Position {
                fen: None,
                moves: vec![]
            }
        );
    }

    #[test]
    fn parse_position_startpos_with_moves() {
        let cmd = GuiCommand::parse("position startpos moves e2e4 e7e5").unwrap();
        assert_eq!(
            cmd,
            GuiCommand::Position {
                fen: None,
                moves: vec!["e2e4".to_string(), "e7e5".to_string()]
            }
        );
    }

    #[test]
    fn parse_position_fen() {
        let cmd = GuiCommand::parse(
            "position fen rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
        )
        .unwrap();
        assert_eq!(
            cmd,
            GuiCommand::Position {
                fen: Some(
                    "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1".to_string()
                ),
                moves: vec![]
            }
        );
    }

    #[test]
    fn parse_position_fen_with_moves() {
        let cmd = GuiCommand::parse("position fen 4k3/8/8/8/8/8/8/R3K3 w Q moves e1c1 e8d7")
            .unwrap();
        assert_eq!(
            cmd,
            GuiCommand::Position {
                fen: Some("4k3/8/8/8/8/8/8/R3K3 w Q".to_string()),
                moves: vec!["e1c1".to_string(), "e8d7".to_string()]
            }
        );
    }

    #[test]
    fn parse_position_errors() {
        assert!(matches!(
            GuiCommand::parse("position"),
            Err(UciError::ParseError(_))
        ));
        assert!(matches!(
            GuiCommand::parse("position somewhere"),
            Err(UciError::ParseError(_))
        ));
        assert!(matches!(
            GuiCommand::parse("position fen moves e2e4"),
            Err(UciError::ParseError(_))
        ));
    }
}
