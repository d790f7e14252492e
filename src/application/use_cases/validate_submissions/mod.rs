use crate::application::dto::{SubmissionReport, ValidationRequest, ValidationResponse};
use crate::manifest_validation::domain::{Manifest, MessageKey, ValidationResult};
use crate::manifest_validation::services::{ManifestComparator, ReportMetadataGenerator};
use crate::ports::inbound::ManifestValidationPort;
use crate::ports::outbound::{ManifestReader, MessageProvider, ProgressReporter};
use std::path::Path;

/// ValidateSubmissionsUseCase - Checks submission manifests against a
/// reference manifest
///
/// Infrastructure is injected through generics.
///
/// # Type Parameters
/// * `MR` - ManifestReader implementation
/// * `MP` - MessageProvider implementation
/// * `PR` - ProgressReporter implementation
pub struct ValidateSubmissionsUseCase<MR, MP, PR> {
    manifest_reader: MR,
    message_provider: MP,
    progress_reporter: PR,
}

impl<MR, MP, PR> ValidateSubmissionsUseCase<MR, MP, PR>
where
    MR: ManifestReader,
    MP: MessageProvider,
    PR: ProgressReporter,
{
    pub fn new(manifest_reader: MR, message_provider: MP, progress_reporter: PR) -> Self {
        Self {
            manifest_reader,
            message_provider,
            progress_reporter,
        }
    }

    /// Executes the validation use case
    ///
    /// The reference is read once. When it cannot be parsed every submission
    /// gets the structural diagnostic; otherwise each submission is read and
    /// compared on its own, so one broken submission never affects another.
    pub fn execute(&self, request: &ValidationRequest) -> ValidationResponse {
        let metadata = ReportMetadataGenerator::generate_default_metadata();

        self.progress_reporter.report(&format!(
            "📖 Loading reference manifest from: {}",
            request.reference_path.display()
        ));
        let reference = self.read_manifest(&request.reference_path, request.verbose);

        let total = request.submission_paths.len();
        let mut reports = Vec::with_capacity(total);

        for (index, submission_path) in request.submission_paths.iter().enumerate() {
            let result = match &reference {
                Some(reference) => self.validate_submission(submission_path, reference, request),
                None => self.structure_invalid(),
            };

            if total > 1 {
                self.progress_reporter.report_progress(
                    index + 1,
                    total,
                    Some(&submission_path.display().to_string()),
                );
            }
            reports.push(SubmissionReport::new(submission_path.clone(), result));
        }

        let response = ValidationResponse::new(metadata, reports);
        self.progress_reporter.report_completion(&format!(
            "✅ Validated {} submission(s): {} valid, {} invalid",
            total,
            response.valid_count(),
            response.invalid_count()
        ));
        response
    }

    fn validate_submission(
        &self,
        submission_path: &Path,
        reference: &Manifest,
        request: &ValidationRequest,
    ) -> ValidationResult {
        match self.read_manifest(submission_path, request.verbose) {
            Some(submission) => {
                self.validate_manifests(&submission, reference, request.accept_submission_tests)
            }
            None => self.structure_invalid(),
        }
    }

    /// Returns `None` on any read or parse failure. The cause never reaches
    /// the result; it is only reported in verbose mode.
    fn read_manifest(&self, path: &Path, verbose: bool) -> Option<Manifest> {
        match self.manifest_reader.read_manifest(path) {
            Ok(manifest) => Some(manifest),
            Err(e) => {
                if verbose {
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Could not read manifest {}: {:#}",
                        path.display(),
                        e
                    ));
                }
                None
            }
        }
    }

    fn structure_invalid(&self) -> ValidationResult {
        ValidationResult::structure_invalid(
            self.message_provider.message(MessageKey::StructureInvalid),
        )
    }
}

impl<MR, MP, PR> ManifestValidationPort for ValidateSubmissionsUseCase<MR, MP, PR>
where
    MR: ManifestReader,
    MP: MessageProvider,
    PR: ProgressReporter,
{
    fn validate_submissions(&self, request: &ValidationRequest) -> ValidationResponse {
        self.execute(request)
    }

    fn validate_manifests(
        &self,
        submission: &Manifest,
        reference: &Manifest,
        accept_submission_tests: bool,
    ) -> ValidationResult {
        ManifestComparator::validate(submission, reference, accept_submission_tests, |key| {
            self.message_provider.message(key)
        })
    }
}
