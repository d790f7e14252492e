mod manifest_comparator;
mod report_metadata_generator;

pub use manifest_comparator::{ComparisonReport, ManifestComparator, ParentFinding, VersionMismatch};
pub use report_metadata_generator::ReportMetadataGenerator;
