/// A single rejected request field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Outcome of validating a request before its handler mutates anything.
///
/// Validators fill it in; handlers only ask whether it is valid and, if not,
/// echo the collected errors back to the client.
#[derive(Debug, Clone, Default)]
pub struct ValidationState {
    errors: Vec<FieldError>,
}

impl ValidationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }
}
