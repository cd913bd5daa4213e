use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlogError {
    #[error("Invalid request: {0}")]
    InvalidInput(String),

    #[error("Failed to generate text: {0}")]
    GenerationFailure(String),

    #[error(
        "Audio generation is not available for {0}. Please select English, Spanish, French, or German."
    )]
    UnsupportedLanguageForAudio(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Failed to write audio file: {0}")]
    IoError(String),
}

impl From<reqwest::Error> for BlogError {
    fn from(error: reqwest::Error) -> Self {
        BlogError::HttpError(error.to_string())
    }
}

impl From<std::io::Error> for BlogError {
    fn from(error: std::io::Error) -> Self {
        BlogError::IoError(error.to_string())
    }
}

impl From<anyhow::Error> for BlogError {
    fn from(error: anyhow::Error) -> Self {
        BlogError::GenerationFailure(error.to_string())
    }
}
