/// Outcome of validating one submission manifest.
///
/// Built only from an error list or as a structural failure, so a result is
/// valid exactly when it carries no diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<String>,
}

impl ValidationResult {
    /// A passing result
    pub fn valid() -> Self {
        Self { errors: Vec::new() }
    }

    /// Builds a result from accumulated diagnostics, in display order
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self { errors }
    }

    /// The single opaque diagnostic used when a manifest could not be parsed
    pub fn structure_invalid(message: String) -> Self {
        Self {
            errors: vec![message],
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}
