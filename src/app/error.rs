use thiserror::Error;

use super::language::Language;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings error: {0}")]
    Settings(String),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

/// Failure raised by a `CodeFormatter` backend. The whole format operation
/// is all-or-nothing, so one of these aborts both panes.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Formatting not supported for {0}")]
    Unsupported(Language),

    #[error("Syntax Error: Unable to format")]
    Syntax(String),
}

/// Failure raised by a `LanguageClassifier`. Never surfaced to the user;
/// detection resolves to plaintext instead.
#[derive(Error, Debug)]
#[error("classification failed: {0}")]
pub struct ClassifyError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(app_err.to_string().contains("file not found"));
    }

    #[test]
    fn test_format_error_display() {
        let err = FormatError::Unsupported(Language::Python);
        assert_eq!(err.to_string(), "Formatting not supported for python");

        let err = FormatError::Syntax("unexpected token".to_string());
        assert_eq!(err.to_string(), "Syntax Error: Unable to format");
    }

    #[test]
    fn test_settings_error_display() {
        let err = AppError::Settings("invalid font size".to_string());
        assert_eq!(err.to_string(), "Settings error: invalid font size");
    }
}
