use crate::shared::error::ValidatorError;
use crate::shared::Result;
use std::path::PathBuf;

/// ValidationRequest - Internal request DTO for the validation use case
#[derive(Debug, Clone)]
pub struct ValidationRequest {
    /// The reference (assignment) manifest
    pub reference_path: PathBuf,
    /// Submission manifests, validated in this order
    pub submission_paths: Vec<PathBuf>,
    /// Whether the reference's test dependencies are mandatory
    pub accept_submission_tests: bool,
    /// Report the underlying cause of parse failures to the progress reporter
    pub verbose: bool,
}

impl ValidationRequest {
    pub fn builder() -> ValidationRequestBuilder {
        ValidationRequestBuilder::default()
    }
}

/// Builder for [`ValidationRequest`]
#[derive(Debug, Default)]
pub struct ValidationRequestBuilder {
    reference_path: Option<PathBuf>,
    submission_paths: Vec<PathBuf>,
    accept_submission_tests: bool,
    verbose: bool,
}

impl ValidationRequestBuilder {
    pub fn reference_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.reference_path = Some(path.into());
        self
    }

    pub fn submission_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.submission_paths.push(path.into());
        self
    }

    pub fn submission_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.submission_paths
            .extend(paths.into_iter().map(Into::into));
        self
    }

    pub fn accept_submission_tests(mut self, accept: bool) -> Self {
        self.accept_submission_tests = accept;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// # Errors
    /// Returns a validation error when the reference path is unset or no
    /// submission was given
    pub fn build(self) -> Result<ValidationRequest> {
        let reference_path = self.reference_path.ok_or_else(|| ValidatorError::Validation {
            message: "a reference manifest path is required".to_string(),
        })?;

        if self.submission_paths.is_empty() {
            return Err(ValidatorError::Validation {
                message: "at least one submission manifest is required".to_string(),
            }
            .into());
        }

        Ok(ValidationRequest {
            reference_path,
            submission_paths: self.submission_paths,
            accept_submission_tests: self.accept_submission_tests,
            verbose: self.verbose,
        })
    }
}
