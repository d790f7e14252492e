pub mod dependency;
pub mod manifest;
pub mod message_key;
pub mod parent_reference;
pub mod report_metadata;
pub mod validation_result;

pub use dependency::{Coordinate, Dependency, DEFAULT_SCOPE};
pub use manifest::Manifest;
pub use message_key::MessageKey;
pub use parent_reference::ParentReference;
pub use report_metadata::ReportMetadata;
pub use validation_result::ValidationResult;
