use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

use crate::api::validation::{FieldError, ValidationState};

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

#[derive(Object, Debug)]
pub struct FieldErrorResponse {
    /// Name of the rejected field
    pub field: String,
    /// Why the field was rejected
    pub message: String,
}

#[derive(Object, Debug)]
pub struct ValidationErrorResponse {
    pub name: String,
    pub message: String,
    /// Per-field validation errors
    pub errors: Vec<FieldErrorResponse>,
}

impl From<FieldError> for FieldErrorResponse {
    fn from(error: FieldError) -> Self {
        Self {
            field: error.field,
            message: error.message,
        }
    }
}

impl From<ValidationState> for ValidationErrorResponse {
    fn from(state: ValidationState) -> Self {
        Self {
            name: "ValidationError".to_string(),
            message: "request.validation_failed".to_string(),
            errors: state.into_errors().into_iter().map(Into::into).collect(),
        }
    }
}

impl From<ErrorResponse> for ValidationErrorResponse {
    fn from(error: ErrorResponse) -> Self {
        Self {
            name: error.name,
            message: error.message,
            errors: Vec::new(),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

pub fn invalid_id() -> ErrorResponse {
    ErrorResponse {
        name: "ValidationError".to_string(),
        message: "shopping_item.invalid_id".to_string(),
    }
}
