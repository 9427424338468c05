use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

/// Failures the graph engine reports to its caller. None of these are
/// fatal; the caller decides whether to abort or skip.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error(
        "word {word:?} has length {found}, expected {expected} like the first word"
    )]
    LengthMismatch {
        word: String,
        expected: usize,
        found: usize,
    },

    #[error("graph has no vertices")]
    EmptyGraph,

    #[error(
        "disconnected graph, cannot complete MST ({reached} of {total} vertices reached)"
    )]
    DisconnectedGraph { reached: usize, total: usize },

    #[error("word {word:?} contains {character:?}, which has no digit value")]
    InvalidCharacter { word: String, character: char },

    #[error("line {line} is not valid UTF-8")]
    InvalidUtf8 { line: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
