use thiserror::Error;

/// Errors raised by grid access and search. An unreachable goal is not one of them:
/// searches report it as an empty path.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
    #[error("a grid must have at least one tile, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("endpoint ({x}, {y}) is not walkable")]
    BlockedEndpoint { x: i32, y: i32 },
    #[error("search was cancelled")]
    Cancelled,
    #[error("unknown heuristic `{0}`")]
    UnknownHeuristic(String),
    #[error("invalid wall pattern: {0}")]
    Pattern(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}
