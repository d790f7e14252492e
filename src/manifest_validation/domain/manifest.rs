use super::{Dependency, ParentReference};

/// Manifest aggregate: the parsed form of one build configuration file
///
/// Dependencies keep their declared order. Duplicate coordinates are not
/// merged; they are treated as unsupported input by the comparator.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Manifest {
    parent: Option<ParentReference>,
    dependencies: Vec<Dependency>,
}

impl Manifest {
    pub fn new(parent: Option<ParentReference>, dependencies: Vec<Dependency>) -> Self {
        Self {
            parent,
            dependencies,
        }
    }

    pub fn parent(&self) -> Option<&ParentReference> {
        self.parent.as_ref()
    }

    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }
}
