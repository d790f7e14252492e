use crate::application::dto::{ValidationRequest, ValidationResponse};
use crate::manifest_validation::domain::{Manifest, ValidationResult};

/// ManifestValidationPort - Inbound port for validating submissions
///
/// Validation findings never surface as errors: they are part of the
/// response. Only a response can be produced, never a failure.
pub trait ManifestValidationPort {
    /// Validates every submission in the request against its reference
    fn validate_submissions(&self, request: &ValidationRequest) -> ValidationResponse;

    /// Validates two already parsed manifests
    fn validate_manifests(
        &self,
        submission: &Manifest,
        reference: &Manifest,
        accept_submission_tests: bool,
    ) -> ValidationResult;
}
