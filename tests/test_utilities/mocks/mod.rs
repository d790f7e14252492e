/// Mock implementations for testing
mod mock_manifest_reader;
mod mock_message_provider;
mod mock_progress_reporter;

pub use mock_manifest_reader::MockManifestReader;
pub use mock_message_provider::MockMessageProvider;
pub use mock_progress_reporter::{MockProgressReporter, ProgressEvent};
