#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("missing session script path. usage: cargo run -- <session.csv>")]
    MissingArg,
    #[error("failed to open session script: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("invalid account seed: {0}")]
    Seed(String),
}
