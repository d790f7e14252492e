use crate::application::dto::ValidationResponse;
use crate::shared::Result;

/// ReportFormatter port for rendering validation responses
/// (plain text, JSON, etc.)
pub trait ReportFormatter {
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, response: &ValidationResponse) -> Result<String>;
}
