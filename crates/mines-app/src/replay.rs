//! Text scripts of intents, for replaying games without a front end.
//!
//! A script has one command per line: `reveal R C`, `flag R C` or `chord R C`,
//! with zero-based row and column. Blank lines and everything after `#` are
//! ignored.

use std::{fmt, num::ParseIntError};

use mines_core::Position;
use mines_game::{CellDisplay, GameEvent, GameOutcome};

use crate::input::ClickIntent;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ScriptError {
    #[display("line {line}: unknown command `{command}`")]
    UnknownCommand { line: usize, command: String },
    #[display("line {line}: expected `<command> <row> <col>`")]
    WrongArity { line: usize },
    #[display("line {line}: invalid coordinate: {source}")]
    InvalidCoordinate { line: usize, source: ParseIntError },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptCommand {
    pub intent: ClickIntent,
    pub pos: Position,
}

/// Parses one script line. `line` is the one-based line number used in errors.
///
/// Returns `Ok(None)` for blank and comment-only lines.
pub fn parse_line(line: usize, text: &str) -> Result<Option<ScriptCommand>, ScriptError> {
    let text = text.split_once('#').map_or(text, |(code, _)| code);
    let words: Vec<&str> = text.split_whitespace().collect();
    let [command, row, col] = words[..] else {
        return if words.is_empty() {
            Ok(None)
        } else {
            Err(ScriptError::WrongArity { line })
        };
    };

    let intent = match command {
        "reveal" => ClickIntent::Reveal,
        "flag" => ClickIntent::ToggleFlag,
        "chord" => ClickIntent::Chord,
        _ => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: command.to_owned(),
            });
        }
    };
    let coordinate = |s: &str| {
        s.parse::<usize>()
            .map_err(|source| ScriptError::InvalidCoordinate { line, source })
    };
    let pos = Position::new(coordinate(row)?, coordinate(col)?);
    Ok(Some(ScriptCommand { intent, pos }))
}

/// Parses a whole script, stopping at the first malformed line.
pub fn parse_script(script: &str) -> Result<Vec<ScriptCommand>, ScriptError> {
    script
        .lines()
        .enumerate()
        .filter_map(|(i, text)| parse_line(i + 1, text).transpose())
        .collect()
}

/// Formats a [`GameEvent`] as a single output line.
#[derive(Debug, Clone, Copy)]
pub struct EventLine<'a>(pub &'a GameEvent);

impl fmt::Display for EventLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            GameEvent::CellChanged { pos, display } => {
                write!(f, "cell {pos} ")?;
                match display {
                    CellDisplay::Hidden => write!(f, "hidden"),
                    CellDisplay::Flagged => write!(f, "flagged"),
                    CellDisplay::Number(n) => write!(f, "{n}"),
                    CellDisplay::Mine => write!(f, "mine"),
                    CellDisplay::TriggeredMine => write!(f, "triggered mine"),
                }
            }
            GameEvent::MineCounterChanged { remaining } => write!(f, "mines {remaining}"),
            GameEvent::GameOver { outcome } => match outcome {
                GameOutcome::Won => write!(f, "game over: won"),
                GameOutcome::Lost => write!(f, "game over: lost"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            parse_line(1, "reveal 2 3"),
            Ok(Some(ScriptCommand {
                intent: ClickIntent::Reveal,
                pos: Position::new(2, 3),
            }))
        );
        assert_eq!(
            parse_line(1, "  flag 0 9  # mine here"),
            Ok(Some(ScriptCommand {
                intent: ClickIntent::ToggleFlag,
                pos: Position::new(0, 9),
            }))
        );
        assert_eq!(
            parse_line(1, "chord\t4 4"),
            Ok(Some(ScriptCommand {
                intent: ClickIntent::Chord,
                pos: Position::new(4, 4),
            }))
        );
    }

    #[test]
    fn test_skip_blank_and_comment_lines() {
        assert_eq!(parse_line(1, ""), Ok(None));
        assert_eq!(parse_line(1, "   "), Ok(None));
        assert_eq!(parse_line(1, "# reveal 1 1"), Ok(None));
    }

    #[test]
    fn test_malformed_lines() {
        assert_eq!(
            parse_line(3, "open 1 1"),
            Err(ScriptError::UnknownCommand {
                line: 3,
                command: "open".to_owned(),
            })
        );
        assert_eq!(
            parse_line(4, "reveal 1"),
            Err(ScriptError::WrongArity { line: 4 })
        );
        assert_eq!(
            parse_line(5, "reveal 1 2 3"),
            Err(ScriptError::WrongArity { line: 5 })
        );
        assert!(matches!(
            parse_line(6, "flag -1 2"),
            Err(ScriptError::InvalidCoordinate { line: 6, .. })
        ));
    }

    #[test]
    fn test_parse_script_reports_line_numbers() {
        let script = "# opening\nreveal 0 0\n\nflag 1 1\n";
        assert_eq!(parse_script(script).unwrap().len(), 2);

        let script = "reveal 0 0\n\nchord x 1\n";
        assert!(matches!(
            parse_script(script),
            Err(ScriptError::InvalidCoordinate { line: 3, .. })
        ));
    }

    #[test]
    fn test_event_lines() {
        let pos = Position::new(1, 2);
        let line = |event| EventLine(&event).to_string();
        assert_eq!(
            line(GameEvent::CellChanged {
                pos,
                display: CellDisplay::Number(3)
            }),
            "cell (1, 2) 3"
        );
        assert_eq!(
            line(GameEvent::CellChanged {
                pos,
                display: CellDisplay::TriggeredMine
            }),
            "cell (1, 2) triggered mine"
        );
        assert_eq!(
            line(GameEvent::MineCounterChanged { remaining: 7 }),
            "mines 7"
        );
        assert_eq!(
            line(GameEvent::GameOver {
                outcome: GameOutcome::Lost
            }),
            "game over: lost"
        );
    }
}
