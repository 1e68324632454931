use thiserror::Error;

/// Failures surfaced by the rules layer.
///
/// Each variant carries the offending input so callers can report it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("invalid FEN: {0}")]
    InvalidFen(String),
    #[error("unparsable move: {0}")]
    MoveParse(String),
    #[error("illegal move: {0}")]
    IllegalMove(String),
}
