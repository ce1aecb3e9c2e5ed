use thiserror::Error;

/// Raised when a `GameConfig` cannot be used to build a world.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("playfield {name} must be a positive finite number, got {value}")]
    InvalidDimension { name: &'static str, value: f32 },
    #[error("{name} must hold at least one slot")]
    EmptyPool { name: &'static str },
    #[error("starting lives must be positive, got {0}")]
    NoLives(i32),
    #[error("{name} must be a non-negative finite number, got {value}")]
    InvalidSpeed { name: &'static str, value: f32 },
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config")]
    Parse(#[from] serde_json::Error),
}
