use crate::config;

#[derive(Debug, thiserror::Error)]
pub enum ScryfallError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status: {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl ScryfallError {
    /// Collapse the error into the message shown to the user.
    ///
    /// A 404 from the search endpoint means the query matched nothing;
    /// every other failure gets the generic retry hint.
    pub fn user_message(&self) -> &'static str {
        match self {
            ScryfallError::NotFound(_) => config::NO_CARDS_MESSAGE,
            _ => config::GENERIC_ERROR_MESSAGE,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ScryfallError::NotFound(_))
    }
}

impl From<serde_json::Error> for ScryfallError {
    fn from(err: serde_json::Error) -> Self {
        ScryfallError::Protocol(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ScryfallError>;
