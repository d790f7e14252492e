use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters
///
/// Lives in the application layer because picking an adapter for a format
/// is an application decision.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter for the specified output format
    ///
    /// `colored` only affects the text formatter; JSON output is never coloured.
    ///
    /// # Examples
    /// ```
    /// use pom_validator::application::dto::OutputFormat;
    /// use pom_validator::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json, false);
    /// ```
    pub fn create(format: OutputFormat, colored: bool) -> Box<dyn ReportFormatter> {
        match format {
            OutputFormat::Text => Box::new(TextFormatter::new(colored)),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::ValidationResponse;
    use crate::manifest_validation::services::ReportMetadataGenerator;

    fn empty_response() -> ValidationResponse {
        ValidationResponse::new(ReportMetadataGenerator::generate_default_metadata(), vec![])
    }

    #[test]
    fn test_create_text_formatter() {
        let formatter = FormatterFactory::create(OutputFormat::Text, false);
        let output = formatter.format(&empty_response()).unwrap();
        assert!(!output.trim_start().starts_with('{'));
    }

    #[test]
    fn test_create_json_formatter() {
        let formatter = FormatterFactory::create(OutputFormat::Json, true);
        let output = formatter.format(&empty_response()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(parsed.get("submissions").is_some());
    }
}
