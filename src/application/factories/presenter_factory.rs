use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use std::path::PathBuf;

/// Presenter type enumeration for factory pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    Stdout,
    File(PathBuf),
}

/// Factory for creating output presenters (stdout or a report file)
pub struct PresenterFactory;

impl PresenterFactory {
    /// Picks the file presenter when an output path is given
    pub fn for_output(output: Option<PathBuf>) -> Box<dyn OutputPresenter> {
        Self::create(output.map_or(PresenterType::Stdout, PresenterType::File))
    }

    /// Creates a presenter instance for the specified type
    ///
    /// # Examples
    /// ```
    /// use pom_validator::application::factories::{PresenterFactory, PresenterType};
    ///
    /// let presenter = PresenterFactory::create(PresenterType::Stdout);
    /// ```
    pub fn create(presenter_type: PresenterType) -> Box<dyn OutputPresenter> {
        match presenter_type {
            PresenterType::Stdout => Box::new(StdoutPresenter::new()),
            PresenterType::File(path) => Box::new(FileSystemWriter::new(path)),
        }
    }
}
