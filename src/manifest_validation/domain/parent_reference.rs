use super::Coordinate;

/// ParentReference value object: the single inherited-configuration pointer
/// a manifest may declare. All three fields are required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentReference {
    group: String,
    artifact: String,
    version: String,
}

impl ParentReference {
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn artifact(&self) -> &str {
        &self.artifact
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.group.as_str(), self.artifact.as_str())
    }

    /// Same group and artifact, regardless of version
    pub fn same_identity(&self, other: &ParentReference) -> bool {
        self.group == other.group && self.artifact == other.artifact
    }

    /// `group:artifact:version`
    pub fn descriptor(&self) -> String {
        format!("{}:{}:{}", self.group, self.artifact, self.version)
    }
}
