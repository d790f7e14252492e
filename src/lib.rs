//! pom-validator - pom.xml dependency checking for programming assignments
//!
//! This library compares a student's Maven `pom.xml` against the instructor's
//! reference `pom.xml` and reports differences in the parent POM and the declared
//! dependencies, following hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`manifest_validation`): Pure comparison logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use pom_validator::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let manifest_reader = FileSystemManifestReader::new();
//! let message_catalog = MessageCatalog::for_locale("en")?;
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case =
//!     ValidateSubmissionsUseCase::new(manifest_reader, message_catalog, progress_reporter);
//!
//! // Execute
//! let request = ValidationRequest::builder()
//!     .reference_path("assignment/pom.xml")
//!     .submission_path("student/pom.xml")
//!     .build()?;
//! let response = use_case.execute(&request);
//!
//! // Format output
//! let formatter = TextFormatter::new(false);
//! println!("{}", formatter.format(&response)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod manifest_validation;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemManifestReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::adapters::outbound::i18n::MessageCatalog;
    pub use crate::application::dto::{
        OutputFormat, SubmissionReport, ValidationRequest, ValidationResponse,
    };
    pub use crate::application::use_cases::ValidateSubmissionsUseCase;
    pub use crate::manifest_validation::domain::{
        Coordinate, Dependency, Manifest, MessageKey, ParentReference, ValidationResult,
    };
    pub use crate::manifest_validation::policies::TestDependencyPolicy;
    pub use crate::manifest_validation::services::{ComparisonReport, ManifestComparator};
    pub use crate::ports::inbound::ManifestValidationPort;
    pub use crate::ports::outbound::{
        ManifestReader, MessageProvider, OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::Result;
}
