use pom_validator::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock ManifestReader serving in-memory manifests keyed by path
///
/// Paths without an entry behave like a pom.xml that fails to parse.
#[derive(Default)]
pub struct MockManifestReader {
    manifests: HashMap<PathBuf, Manifest>,
}

impl MockManifestReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_manifest(mut self, path: &str, manifest: Manifest) -> Self {
        self.manifests.insert(PathBuf::from(path), manifest);
        self
    }
}

impl ManifestReader for MockManifestReader {
    fn read_manifest(&self, path: &Path) -> Result<Manifest> {
        self.manifests
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Mock parse error for {}", path.display()))
    }
}
