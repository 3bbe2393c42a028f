use std::path::PathBuf;

/// Errors from placing a piece or looking up a column's open row.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is outside the board")]
    InvalidColumn { column: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("the game is already over")]
    GameOver,
}

/// Errors from asking the engine for a move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("no legal moves: the board is full")]
    NoLegalMoves,

    #[error("the position is already decided")]
    PositionDecided,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write config file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        assert_eq!(
            MoveError::ColumnFull { column: 4 }.to_string(),
            "column 4 is full"
        );
        assert_eq!(
            MoveError::InvalidColumn { column: 9 }.to_string(),
            "column 9 is outside the board"
        );
    }

    #[test]
    fn test_search_error_display() {
        assert_eq!(
            SearchError::NoLegalMoves.to_string(),
            "no legal moves: the board is full"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("ui.think_delay_ms must be <= 10000".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: ui.think_delay_ms must be <= 10000"
        );
    }
}
