use thiserror::Error;

#[derive(Error, Debug)]
pub enum SvmineError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("CSV error: {0}")]
    Csv(Box<csv::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Child id '{0}' not found in the first column of the transcript")]
    ChildIdNotFound(String),

    #[error("No tagged sentence found for: {0}")]
    UntaggedSentence(String),

    #[error("Malformed token row in tagged corpus (line {line}): {row}")]
    MalformedTokenRow { line: usize, row: String },

    #[error("SvmineError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for SvmineError {
    fn from(error: std::io::Error) -> Self {
        SvmineError::Io(Box::new(error))
    }
}

impl From<csv::Error> for SvmineError {
    fn from(error: csv::Error) -> Self {
        SvmineError::Csv(Box::new(error))
    }
}
