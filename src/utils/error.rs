use thiserror::Error;

/// Failures raised by a question store backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Question store unavailable: {0}")]
    Unavailable(String),

    #[error("Category {0} does not exist")]
    UnknownCategory(i64),

    #[error("Question {0} does not exist")]
    MissingQuestion(i64),

    #[error("Duplicate question id {0}")]
    DuplicateId(i64),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum TriviaError {
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Store operation failed: {0}")]
    Unprocessable(#[from] StoreError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Seed data error: {message}")]
    SeedError { message: String },
}

/// The coarse classes every error collapses to at the HTTP boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    BadRequest,
    NotFound,
    Unprocessable,
    Internal,
}

impl TriviaError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        TriviaError::BadRequest {
            message: message.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        TriviaError::NotFound {
            resource: resource.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            TriviaError::BadRequest { .. } => ErrorKind::BadRequest,
            TriviaError::NotFound { .. } => ErrorKind::NotFound,
            TriviaError::Unprocessable(_) => ErrorKind::Unprocessable,
            _ => ErrorKind::Internal,
        }
    }

    pub fn status_code(&self) -> u16 {
        match self.kind() {
            ErrorKind::BadRequest => 400,
            ErrorKind::NotFound => 404,
            ErrorKind::Unprocessable => 422,
            ErrorKind::Internal => 500,
        }
    }

    /// Fixed text placed in the `message` field of the error envelope.
    pub fn public_message(&self) -> &'static str {
        match self.kind() {
            ErrorKind::BadRequest => "bad request",
            ErrorKind::NotFound => "resource not found",
            ErrorKind::Unprocessable => "unprocessable",
            ErrorKind::Internal => "internal server error",
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TriviaError::IoError(_) => "Check that the file exists and is readable",
            TriviaError::SerializationError(_) | TriviaError::SeedError { .. } => {
                "Check the seed file: every question needs text, an answer, a known category and a difficulty between 1 and 5"
            }
            TriviaError::ConfigValidationError { .. }
            | TriviaError::InvalidConfigValueError { .. }
            | TriviaError::MissingConfigError { .. } => {
                "Review the TOML file and command line flags"
            }
            TriviaError::Unprocessable(StoreError::Unavailable(_)) => {
                "Restart the service to reset the question store"
            }
            _ => "Check the request payload",
        }
    }
}

pub type Result<T> = std::result::Result<T, TriviaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_follow_kind() {
        assert_eq!(TriviaError::bad_request("x").status_code(), 400);
        assert_eq!(TriviaError::not_found("question 1").status_code(), 404);

        let unavailable = TriviaError::from(StoreError::Unavailable("down".into()));
        assert_eq!(unavailable.status_code(), 422);

        let seed_error = TriviaError::SeedError {
            message: "bad".into(),
        };
        assert_eq!(seed_error.status_code(), 500);
    }

    #[test]
    fn test_public_messages() {
        assert_eq!(TriviaError::bad_request("x").public_message(), "bad request");
        assert_eq!(TriviaError::not_found("x").public_message(), "resource not found");

        let unknown = TriviaError::from(StoreError::UnknownCategory(9));
        assert_eq!(unknown.public_message(), "unprocessable");
    }
}
