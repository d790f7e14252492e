use crate::manifest_validation::domain::ReportMetadata;
use chrono::Utc;
use uuid::Uuid;

/// Name reported in every validation report
pub const TOOL_NAME: &str = "pom-validator";

/// ReportMetadataGenerator service stamping each run with time and identity
pub struct ReportMetadataGenerator;

impl ReportMetadataGenerator {
    /// Generates metadata with the current UTC timestamp and a fresh report id
    pub fn generate_metadata(tool_name: &str, tool_version: &str) -> ReportMetadata {
        let timestamp = Utc::now().to_rfc3339();
        let report_id = format!("urn:uuid:{}", Uuid::new_v4());

        ReportMetadata::new(
            timestamp,
            tool_name.to_string(),
            tool_version.to_string(),
            report_id,
        )
    }

    /// Uses the compile-time crate version
    pub fn generate_default_metadata() -> ReportMetadata {
        Self::generate_metadata(TOOL_NAME, env!("CARGO_PKG_VERSION"))
    }
}
