/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod output_format;
mod validation_request;
mod validation_response;

pub use output_format::OutputFormat;
pub use validation_request::{ValidationRequest, ValidationRequestBuilder};
pub use validation_response::{SubmissionReport, ValidationResponse};
