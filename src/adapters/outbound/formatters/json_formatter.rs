use crate::application::dto::ValidationResponse;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    metadata: Metadata<'a>,
    summary: Summary,
    submissions: Vec<Submission<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Metadata<'a> {
    report_id: &'a str,
    timestamp: &'a str,
    tool: Tool<'a>,
}

#[derive(Debug, Serialize)]
struct Tool<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
struct Summary {
    total: usize,
    valid: usize,
    invalid: usize,
}

#[derive(Debug, Serialize)]
struct Submission<'a> {
    submission: String,
    valid: bool,
    errors: &'a [String],
}

/// JsonFormatter adapter producing a machine-readable validation report
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, response: &ValidationResponse) -> Result<String> {
        let metadata = &response.metadata;
        let report = JsonReport {
            metadata: Metadata {
                report_id: metadata.report_id(),
                timestamp: metadata.timestamp(),
                tool: Tool {
                    name: metadata.tool_name(),
                    version: metadata.tool_version(),
                },
            },
            summary: Summary {
                total: response.reports.len(),
                valid: response.valid_count(),
                invalid: response.invalid_count(),
            },
            submissions: response
                .reports
                .iter()
                .map(|r| Submission {
                    submission: r.submission_path.display().to_string(),
                    valid: r.result.is_valid(),
                    errors: r.result.errors(),
                })
                .collect(),
        };

        serde_json::to_string_pretty(&report)
            .map_err(|e| anyhow::anyhow!("Failed to serialize JSON report: {}", e))
    }
}
