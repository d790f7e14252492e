use std::fmt;

/// Scope assumed for dependencies that do not declare one
pub const DEFAULT_SCOPE: &str = "compile";

/// Coordinate value object: the (group, artifact) pair identifying a
/// dependency independently of its version
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coordinate {
    group: String,
    artifact: String,
}

impl Coordinate {
    pub fn new(group: impl Into<String>, artifact: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn artifact(&self) -> &str {
        &self.artifact
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.artifact)
    }
}

/// Dependency value object representing one declared build dependency
///
/// Versions are kept verbatim (no normalization, no property interpolation),
/// so `1.0` and `1.0.0` are different versions. An unresolved version is the
/// empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    group: String,
    artifact: String,
    version: String,
    scope: Option<String>,
}

impl Dependency {
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
            scope: None,
        }
    }

    /// Returns the same dependency with an explicit scope
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
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

    /// The declared scope, if any
    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// The declared scope, or `compile` when none was declared
    pub fn scope_or_default(&self) -> &str {
        self.scope().unwrap_or(DEFAULT_SCOPE)
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.group.as_str(), self.artifact.as_str())
    }

    /// Borrowed (group, artifact) pair used as a lookup key
    pub(crate) fn coordinate_key(&self) -> (&str, &str) {
        (&self.group, &self.artifact)
    }

    /// Coordinate plus version: `group:artifact:version`
    pub fn full_key(&self) -> String {
        format!("{}:{}:{}", self.group, self.artifact, self.version)
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_key())
    }
}
