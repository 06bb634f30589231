use crate::errors::DesksetError;
use crate::layout::DecodeError;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read projects file '{path}': {source}")]
    ReadFailed {
        path: String,
        source: std::io::Error,
    },

    #[error("Projects file '{path}' is not valid JSON: {message}")]
    ParseFailed { path: String, message: String },

    #[error("Projects file '{path}' has no usable project list: {source}")]
    InvalidDocument { path: String, source: DecodeError },

    #[error("Failed to save projects: {message}")]
    SaveFailed { message: String },
}

impl DesksetError for StoreError {
    fn error_code(&self) -> &'static str {
        match self {
            StoreError::ReadFailed { .. } => "STORE_READ_FAILED",
            StoreError::ParseFailed { .. } => "STORE_PARSE_FAILED",
            StoreError::InvalidDocument { .. } => "STORE_INVALID_DOCUMENT",
            StoreError::SaveFailed { .. } => "STORE_SAVE_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            StoreError::ParseFailed { .. } | StoreError::InvalidDocument { .. }
        )
    }
}
