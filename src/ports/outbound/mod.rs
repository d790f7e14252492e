/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, message catalogs, console).
pub mod formatter;
pub mod manifest_reader;
pub mod message_provider;
pub mod output_presenter;
pub mod progress_reporter;

pub use formatter::ReportFormatter;
pub use manifest_reader::ManifestReader;
pub use message_provider::MessageProvider;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
