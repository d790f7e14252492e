use crate::manifest_validation::domain::{ReportMetadata, ValidationResult};
use std::path::PathBuf;

/// Result for one submission manifest
#[derive(Debug, Clone)]
pub struct SubmissionReport {
    pub submission_path: PathBuf,
    pub result: ValidationResult,
}

impl SubmissionReport {
    pub fn new(submission_path: PathBuf, result: ValidationResult) -> Self {
        Self {
            submission_path,
            result,
        }
    }
}

/// ValidationResponse - Response DTO from the validation use case
///
/// Reports appear in request order.
#[derive(Debug, Clone)]
pub struct ValidationResponse {
    pub metadata: ReportMetadata,
    pub reports: Vec<SubmissionReport>,
}

impl ValidationResponse {
    pub fn new(metadata: ReportMetadata, reports: Vec<SubmissionReport>) -> Self {
        Self { metadata, reports }
    }

    pub fn all_valid(&self) -> bool {
        self.reports.iter().all(|r| r.result.is_valid())
    }

    pub fn valid_count(&self) -> usize {
        self.reports.iter().filter(|r| r.result.is_valid()).count()
    }

    pub fn invalid_count(&self) -> usize {
        self.reports.len() - self.valid_count()
    }
}
