use thiserror::Error;

/// Configuration problems detected at startup, before any network call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is unset or empty
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    /// A variable is set but cannot be parsed
    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Centralized error type for the library.
///
/// Everything that can go wrong between reading the environment and getting
/// an answer from Telegram or Kanttiinit ends up here, so handlers can decide
/// in one place what to log and what to show the user.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Telegram API errors
    #[cfg(feature = "telegram")]
    #[error("Telegram error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    /// HTTP transport and body decoding errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP status code errors
    #[error("HTTP request failed with status: {0}")]
    HttpStatus(reqwest::StatusCode),

    /// URL parsing errors
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Short, non-technical explanation that is safe to send to a chat.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Config(_) => "The bot is misconfigured. Please contact the maintainers.",
            #[cfg(feature = "telegram")]
            AppError::Telegram(_) => "Telegram rejected the request. Please try again.",
            AppError::Http(e) if e.is_timeout() => "The canteen service did not answer in time. Please try again later.",
            AppError::Http(e) if e.is_decode() => "The canteen service sent data I could not read.",
            AppError::Http(_) | AppError::HttpStatus(_) | AppError::Url(_) => {
                "Could not reach the canteen service. Please try again later."
            }
        }
    }
}
