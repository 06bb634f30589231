use std::error::Error;

/// Base trait for all deskset errors
pub trait DesksetError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("disk on fire")]
    struct Internal;

    impl DesksetError for Internal {
        fn error_code(&self) -> &'static str {
            "INTERNAL"
        }
    }

    #[test]
    fn test_errors_default_to_non_user() {
        let error: Box<dyn DesksetError> = Box::new(Internal);
        assert_eq!(error.error_code(), "INTERNAL");
        assert!(!error.is_user_error());
        assert_eq!(error.to_string(), "disk on fire");
    }
}
