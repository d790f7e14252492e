use crate::manifest_validation::domain::Manifest;
use crate::shared::Result;
use std::path::Path;

/// ManifestReader port for turning a build configuration file into a [`Manifest`]
pub trait ManifestReader {
    /// Reads and parses the manifest at `path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - The file fails the safety checks (symlink, size)
    /// - The content is not a structurally valid manifest
    fn read_manifest(&self, path: &Path) -> Result<Manifest>;
}
