use crate::errors::DesksetError;
use crate::layout::schema::FieldKind;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DecodeError {
    #[error("{entity}: expected a JSON object")]
    NotAnObject { entity: &'static str },

    #[error("{entity}: missing required field '{field}'")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    #[error("{entity}: field '{field}' is not {expected}")]
    TypeMismatch {
        entity: &'static str,
        field: &'static str,
        expected: FieldKind,
    },

    #[error("{entity}: field '{field}' is out of range")]
    OutOfRange {
        entity: &'static str,
        field: &'static str,
    },

    #[error("{entity}: invalid '{field}': {source}")]
    Nested {
        entity: &'static str,
        field: &'static str,
        source: Box<DecodeError>,
    },
}

impl DecodeError {
    /// The innermost error, past any `Nested` wrappers.
    pub fn root_cause(&self) -> &DecodeError {
        match self {
            DecodeError::Nested { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

impl DesksetError for DecodeError {
    fn error_code(&self) -> &'static str {
        match self {
            DecodeError::NotAnObject { .. } => "DECODE_NOT_AN_OBJECT",
            DecodeError::MissingField { .. } => "DECODE_MISSING_FIELD",
            DecodeError::TypeMismatch { .. } => "DECODE_TYPE_MISMATCH",
            DecodeError::OutOfRange { .. } => "DECODE_OUT_OF_RANGE",
            DecodeError::Nested { source, .. } => source.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}
