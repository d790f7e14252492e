use crate::application::dto::{SubmissionReport, ValidationResponse};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use owo_colors::OwoColorize;

/// Detail lines start with this prefix; everything else is a group header
const DETAIL_PREFIX: &str = "  - ";

/// TextFormatter adapter rendering diagnostics for a terminal or a log
///
/// One block per submission, diagnostics in the order the comparator
/// produced them, followed by a one-line summary.
pub struct TextFormatter {
    colored: bool,
}

impl TextFormatter {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    fn render_submission(&self, output: &mut String, report: &SubmissionReport) {
        output.push_str(&format!("📄 {}\n", report.submission_path.display()));

        if report.result.is_valid() {
            output.push_str(&self.paint_ok("✅ Valid"));
            output.push('\n');
        } else {
            output.push_str(&self.paint_error("❌ Invalid"));
            output.push('\n');
            for line in report.result.errors() {
                if line.starts_with(DETAIL_PREFIX) {
                    output.push_str(line);
                } else {
                    output.push_str(&self.paint_header(line));
                }
                output.push('\n');
            }
        }
        output.push('\n');
    }

    fn render_summary(&self, output: &mut String, response: &ValidationResponse) {
        output.push_str(&format!(
            "Summary: {} submission(s), {} valid, {} invalid\n",
            response.reports.len(),
            response.valid_count(),
            response.invalid_count()
        ));
    }

    fn paint_ok(&self, text: &str) -> String {
        if self.colored {
            text.green().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn paint_error(&self, text: &str) -> String {
        if self.colored {
            text.red().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn paint_header(&self, text: &str) -> String {
        if self.colored {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, response: &ValidationResponse) -> Result<String> {
        let mut output = String::new();
        for report in &response.reports {
            self.render_submission(&mut output, report);
        }
        self.render_summary(&mut output, response);
        Ok(output)
    }
}
