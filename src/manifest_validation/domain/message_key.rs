use std::fmt;

/// Identifies the group-header message for each kind of finding.
///
/// Only headers are localized; detail lines are produced by the comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    ParentMissing,
    ParentMismatch,
    ParentVersion,
    DependencyMismatch,
    DependencyExtra,
    DependencyMissing,
    StructureInvalid,
}

impl MessageKey {
    pub const ALL: [MessageKey; 7] = [
        MessageKey::ParentMissing,
        MessageKey::ParentMismatch,
        MessageKey::ParentVersion,
        MessageKey::DependencyMismatch,
        MessageKey::DependencyExtra,
        MessageKey::DependencyMissing,
        MessageKey::StructureInvalid,
    ];

    /// Stable identifier of the error kind
    pub fn id(self) -> &'static str {
        match self {
            MessageKey::ParentMissing => "parent.missing",
            MessageKey::ParentMismatch => "parent.mismatch",
            MessageKey::ParentVersion => "parent.version",
            MessageKey::DependencyMismatch => "deps.mismatch",
            MessageKey::DependencyExtra => "deps.extra",
            MessageKey::DependencyMissing => "deps.missing",
            MessageKey::StructureInvalid => "structure.invalid",
        }
    }

    /// Key under which message catalogs store the header text
    pub fn catalog_key(self) -> String {
        format!("error.maven.{}", self.id())
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
