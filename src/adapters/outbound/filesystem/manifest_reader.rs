use crate::manifest_validation::domain::{Dependency, Manifest, ParentReference};
use crate::ports::outbound::ManifestReader;
use crate::shared::error::ValidatorError;
use crate::shared::security::{read_checked_bytes, MAX_MANIFEST_SIZE};
use crate::shared::Result;
use serde::Deserialize;
use std::borrow::Cow;
use std::path::Path;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Top-level `<project>` element. Only the parent and the direct
/// dependency list are read; everything else is ignored.
#[derive(Debug, Deserialize)]
struct PomProject {
    parent: Option<PomParent>,
    dependencies: Option<PomDependencies>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PomParent {
    group_id: Option<String>,
    artifact_id: Option<String>,
    version: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PomDependencies {
    #[serde(default)]
    dependency: Vec<PomDependency>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PomDependency {
    group_id: Option<String>,
    artifact_id: Option<String>,
    version: Option<String>,
    scope: Option<String>,
}

/// FileSystemManifestReader adapter reading Maven `pom.xml` files
///
/// Values are taken literally: `${junit.version}` stays `${junit.version}`.
pub struct FileSystemManifestReader;

impl FileSystemManifestReader {
    pub fn new() -> Self {
        Self
    }

    /// Parses pom.xml content into a [`Manifest`]
    pub fn parse_pom(content: &str) -> Result<Manifest> {
        let project: PomProject = quick_xml::de::from_str(content)
            .map_err(|e| anyhow::anyhow!("Invalid pom.xml structure: {}", e))?;

        let parent = project.parent.map(parse_parent).transpose()?;

        let dependencies = project
            .dependencies
            .map(|deps| deps.dependency)
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(index, dep)| parse_dependency(index, dep))
            .collect::<Result<Vec<_>>>()?;

        Ok(Manifest::new(parent, dependencies))
    }
}

impl Default for FileSystemManifestReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestReader for FileSystemManifestReader {
    fn read_manifest(&self, path: &Path) -> Result<Manifest> {
        if !path.exists() {
            return Err(ValidatorError::ManifestNotFound {
                path: path.to_path_buf(),
                suggestion: "Check that the pom.xml path is correct.".to_string(),
            }
            .into());
        }

        let bytes = read_checked_bytes(path, "pom.xml", MAX_MANIFEST_SIZE)?;
        let content = decode_pom(&bytes);

        Self::parse_pom(&content).map_err(|e| {
            ValidatorError::ManifestParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

/// Decodes pom.xml bytes as UTF-8, dropping a byte-order mark
///
/// Bytes that are not UTF-8 (an `ISO-8859-1` description, say) become
/// U+FFFD instead of failing the whole file.
fn decode_pom(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes))
}

fn parse_parent(parent: PomParent) -> Result<ParentReference> {
    Ok(ParentReference::new(
        required(parent.group_id, "parent", "groupId")?,
        required(parent.artifact_id, "parent", "artifactId")?,
        required(parent.version, "parent", "version")?,
    ))
}

fn parse_dependency(index: usize, dep: PomDependency) -> Result<Dependency> {
    let element = format!("dependency #{}", index + 1);
    let dependency = Dependency::new(
        required(dep.group_id, &element, "groupId")?,
        required(dep.artifact_id, &element, "artifactId")?,
        trimmed(dep.version).unwrap_or_default(),
    );

    Ok(match trimmed(dep.scope) {
        Some(scope) => dependency.with_scope(scope),
        None => dependency,
    })
}

fn required(value: Option<String>, element: &str, field: &str) -> Result<String> {
    trimmed(value).ok_or_else(|| anyhow::anyhow!("{} is missing <{}>", element, field))
}

/// Trims a text value; blank values count as absent
fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
