use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScorecardError {
    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("input closed before {0} was entered")]
    InputClosed(String),

    #[error("incomplete evaluation: no score recorded for {0}")]
    MissingScore(String),

    #[error("unexpected score for {0}: the rubric has no such criterion")]
    UnexpectedScore(String),

    #[error("pdf rendering failed: {0}")]
    Pdf(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScorecardError>;
