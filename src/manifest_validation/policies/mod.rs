mod test_dependency_policy;

pub use test_dependency_policy::TestDependencyPolicy;
