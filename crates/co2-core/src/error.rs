use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unknown {kind} '{value}'")]
    UnknownCategory { kind: &'static str, value: String },

    #[error("Invalid amount {amount}: must be a positive number")]
    InvalidAmount { amount: f64 },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Config error: {0}")]
    Config(String),
}
