use crate::manifest_validation::domain::{
    Coordinate, Dependency, Manifest, MessageKey, ParentReference, ValidationResult,
};
use crate::manifest_validation::policies::TestDependencyPolicy;
use std::collections::HashMap;

/// Prefix of every detail line under a group header
const DETAIL_PREFIX: &str = "  - ";

/// Parent-reference discrepancy. At most one is reported per comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParentFinding {
    /// The reference declares a parent, the submission none
    Missing { expected: ParentReference },
    /// Group or artifact differ
    Mismatch {
        expected: ParentReference,
        found: ParentReference,
    },
    /// Same group and artifact, different version
    VersionMismatch {
        coordinate: Coordinate,
        expected: String,
        found: String,
    },
}

/// A submission dependency whose coordinate exists in the reference with
/// another version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionMismatch {
    pub coordinate: Coordinate,
    pub expected: String,
    pub found: String,
}

/// Structured findings of one comparison, in reporting order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComparisonReport {
    pub parent: Option<ParentFinding>,
    pub version_mismatches: Vec<VersionMismatch>,
    pub extra: Vec<Dependency>,
    pub missing: Vec<Dependency>,
}

impl ComparisonReport {
    /// Renders the findings as the ordered diagnostic list:
    /// parent, version mismatches, extras, then missing.
    ///
    /// `lookup` supplies the (localized) group headers; detail lines are
    /// generated here and never localized.
    pub fn render<F>(&self, lookup: F) -> ValidationResult
    where
        F: Fn(MessageKey) -> String,
    {
        let mut errors = Vec::new();

        match &self.parent {
            Some(ParentFinding::Missing { expected }) => {
                errors.push(lookup(MessageKey::ParentMissing));
                errors.push(detail(&expected.descriptor()));
            }
            Some(ParentFinding::Mismatch { expected, found }) => {
                errors.push(lookup(MessageKey::ParentMismatch));
                errors.push(detail(&format!("expected: {}", expected.descriptor())));
                errors.push(detail(&format!("found: {}", found.descriptor())));
            }
            Some(ParentFinding::VersionMismatch {
                coordinate,
                expected,
                found,
            }) => {
                errors.push(lookup(MessageKey::ParentVersion));
                errors.push(detail(&format!(
                    "{} (expected: {}, found: {})",
                    coordinate, expected, found
                )));
            }
            None => {}
        }

        if !self.version_mismatches.is_empty() {
            errors.push(lookup(MessageKey::DependencyMismatch));
            errors.extend(self.version_mismatches.iter().map(|m| {
                detail(&format!(
                    "{} (expected: {}, found: {})",
                    m.coordinate, m.expected, m.found
                ))
            }));
        }

        if !self.extra.is_empty() {
            errors.push(lookup(MessageKey::DependencyExtra));
            errors.extend(self.extra.iter().map(|dep| detail(&dep.full_key())));
        }

        if !self.missing.is_empty() {
            errors.push(lookup(MessageKey::DependencyMissing));
            errors.extend(self.missing.iter().map(|dep| detail(&dep.full_key())));
        }

        ValidationResult::from_errors(errors)
    }
}

fn detail(text: &str) -> String {
    format!("{}{}", DETAIL_PREFIX, text)
}

/// ManifestComparator service checking a submission manifest against a
/// reference manifest
///
/// Pure and synchronous: no I/O, no shared state, inputs are only borrowed.
/// Every check runs even when an earlier one already found a problem.
pub struct ManifestComparator;

impl ManifestComparator {
    /// Compares both manifests and renders the diagnostics in one step
    ///
    /// # Arguments
    /// * `submission` - The manifest being validated
    /// * `reference` - The authoritative manifest
    /// * `accept_submission_tests` - When false, the reference's test tooling
    ///   is optional for the submission
    /// * `lookup` - Header message lookup, see [`ComparisonReport::render`]
    pub fn validate<F>(
        submission: &Manifest,
        reference: &Manifest,
        accept_submission_tests: bool,
        lookup: F,
    ) -> ValidationResult
    where
        F: Fn(MessageKey) -> String,
    {
        Self::compare(submission, reference, accept_submission_tests).render(lookup)
    }

    /// Computes the structured findings without rendering them
    pub fn compare(
        submission: &Manifest,
        reference: &Manifest,
        accept_submission_tests: bool,
    ) -> ComparisonReport {
        let required =
            TestDependencyPolicy::required_dependencies(reference.dependencies(), accept_submission_tests);

        // Lookup only; error order always follows the manifests' declared order
        let reference_index = index_by_coordinate(reference.dependencies());
        let submission_index = index_by_coordinate(submission.dependencies());

        let mut report = ComparisonReport {
            parent: Self::check_parent(submission.parent(), reference.parent()),
            ..ComparisonReport::default()
        };

        for dep in submission.dependencies() {
            match reference_index.get(&dep.coordinate_key()) {
                Some(expected) if expected.version() != dep.version() => {
                    report.version_mismatches.push(VersionMismatch {
                        coordinate: dep.coordinate(),
                        expected: expected.version().to_string(),
                        found: dep.version().to_string(),
                    });
                }
                Some(_) => {}
                None => report.extra.push(dep.clone()),
            }
        }

        report.missing = required
            .into_iter()
            .filter(|dep| !submission_index.contains_key(&dep.coordinate_key()))
            .cloned()
            .collect();

        report
    }

    /// Parent conditions are mutually exclusive; identity mismatch wins over
    /// a version-only mismatch.
    fn check_parent(
        submission: Option<&ParentReference>,
        reference: Option<&ParentReference>,
    ) -> Option<ParentFinding> {
        let expected = reference?;

        match submission {
            None => Some(ParentFinding::Missing {
                expected: expected.clone(),
            }),
            Some(found) if !expected.same_identity(found) => Some(ParentFinding::Mismatch {
                expected: expected.clone(),
                found: found.clone(),
            }),
            Some(found) if expected.version() != found.version() => {
                Some(ParentFinding::VersionMismatch {
                    coordinate: expected.coordinate(),
                    expected: expected.version().to_string(),
                    found: found.version().to_string(),
                })
            }
            Some(_) => None,
        }
    }
}

/// Last declaration wins for duplicate coordinates
fn index_by_coordinate(dependencies: &[Dependency]) -> HashMap<(&str, &str), &Dependency> {
    dependencies
        .iter()
        .map(|dep| (dep.coordinate_key(), dep))
        .collect()
}
