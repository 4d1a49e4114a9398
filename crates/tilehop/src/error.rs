use thiserror::Error;

/// Errors raised while building a level from its text description.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LevelError {
    #[error("level text contains no rows")]
    Empty,
    #[error("unknown level symbol {symbol:?} at line {line}, column {column}")]
    UnknownSymbol { symbol: char, line: usize, column: usize },
    #[error("level of {columns}x{rows} cells exceeds the addressable grid")]
    TooLarge { columns: usize, rows: usize },
    #[error("level defines {count} tile kinds, more than a tile map can index")]
    TooManyTiles { count: usize },
}

/// Errors at the engine's fallible boundaries (config, assets, level loading).
///
/// The simulation step itself never fails.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Level(#[from] LevelError),
    #[error("failed to load asset {path}: {reason}")]
    Asset { path: String, reason: String },
    #[error("assets have not been loaded")]
    NotLoaded,
}
