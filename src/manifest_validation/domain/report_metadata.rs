/// ReportMetadata value object describing one validation run
#[derive(Debug, Clone)]
pub struct ReportMetadata {
    timestamp: String,
    tool_name: String,
    tool_version: String,
    report_id: String,
}

impl ReportMetadata {
    pub fn new(
        timestamp: String,
        tool_name: String,
        tool_version: String,
        report_id: String,
    ) -> Self {
        Self {
            timestamp,
            tool_name,
            tool_version,
            report_id,
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn report_id(&self) -> &str {
        &self.report_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_metadata_new() {
        let metadata = ReportMetadata::new(
            "2026-01-01T00:00:00Z".to_string(),
            "pom-validator".to_string(),
            "0.1.0".to_string(),
            "urn:uuid:12345".to_string(),
        );

        assert_eq!(metadata.timestamp(), "2026-01-01T00:00:00Z");
        assert_eq!(metadata.tool_name(), "pom-validator");
        assert_eq!(metadata.tool_version(), "0.1.0");
        assert_eq!(metadata.report_id(), "urn:uuid:12345");
    }
}
