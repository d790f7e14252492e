use crate::manifest_validation::domain::Dependency;

/// Scope value that marks a dependency as test-only (compared case-sensitively)
const TEST_SCOPE: &str = "test";

/// Tokens searched (case-insensitively) in both group and artifact
const GROUP_AND_ARTIFACT_TOKENS: [&str; 2] = ["junit", "hamcrest"];

/// Token searched (case-insensitively) in the artifact only
const ARTIFACT_ONLY_TOKEN: &str = "mockito";

/// Groups matched exactly after lower-casing
const EXACT_TEST_GROUPS: [&str; 2] = ["org.testng", "org.mockito"];

/// TestDependencyPolicy decides which reference dependencies are test tooling
///
/// A dependency is test tooling when any of these hold:
/// 1. its group or artifact contains `junit` or `hamcrest`
/// 2. its artifact contains `mockito`
/// 3. its group is exactly `org.testng` or `org.mockito`
/// 4. its declared scope is exactly `test`
///
/// Rules 1-3 ignore case; rule 4 does not.
pub struct TestDependencyPolicy;

impl TestDependencyPolicy {
    pub fn is_test_dependency(dependency: &Dependency) -> bool {
        let group = dependency.group().to_lowercase();
        let artifact = dependency.artifact().to_lowercase();

        GROUP_AND_ARTIFACT_TOKENS
            .iter()
            .any(|token| group.contains(token) || artifact.contains(token))
            || artifact.contains(ARTIFACT_ONLY_TOKEN)
            || EXACT_TEST_GROUPS.contains(&group.as_str())
            || dependency.scope() == Some(TEST_SCOPE)
    }

    /// Reference dependencies a submission must declare
    ///
    /// When submissions may bring their own tests the whole reference list is
    /// required; otherwise the reference's test tooling becomes optional.
    pub fn required_dependencies(
        reference: &[Dependency],
        accept_submission_tests: bool,
    ) -> Vec<&Dependency> {
        reference
            .iter()
            .filter(|dep| accept_submission_tests || !Self::is_test_dependency(dep))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dep(group: &str, artifact: &str) -> Dependency {
        Dependency::new(group, artifact, "1.0")
    }

    #[test]
    fn test_junit_group_and_artifact() {
        assert!(TestDependencyPolicy::is_test_dependency(&dep("junit", "junit")));
        assert!(TestDependencyPolicy::is_test_dependency(&dep(
            "org.junit.jupiter",
            "junit-jupiter-api"
        )));
        assert!(TestDependencyPolicy::is_test_dependency(&dep(
            "com.example",
            "my-JUnit-extensions"
        )));
    }

    #[test]
    fn test_hamcrest_in_group_or_artifact() {
        assert!(TestDependencyPolicy::is_test_dependency(&dep(
            "org.hamcrest",
            "core"
        )));
        assert!(TestDependencyPolicy::is_test_dependency(&dep(
            "com.example",
            "java-hamcrest"
        )));
    }

    #[test]
    fn test_mockito_artifact_or_exact_group() {
        assert!(TestDependencyPolicy::is_test_dependency(&dep(
            "com.example",
            "mockito-kotlin"
        )));
        assert!(TestDependencyPolicy::is_test_dependency(&dep(
            "org.mockito",
            "core"
        )));
        // group only matches exactly
        assert!(!TestDependencyPolicy::is_test_dependency(&dep(
            "org.mockito.extra",
            "core"
        )));
    }

    #[test]
    fn test_testng_group_is_exact_match() {
        assert!(TestDependencyPolicy::is_test_dependency(&dep("org.testng", "testng-core")));
        assert!(TestDependencyPolicy::is_test_dependency(&dep("ORG.TESTNG", "core")));
        assert!(!TestDependencyPolicy::is_test_dependency(&dep(
            "org.testng.plugins",
            "core"
        )));
    }

    #[test]
    fn test_scope_match_is_case_sensitive() {
        let scoped = dep("com.example", "fixtures").with_scope("test");
        assert!(TestDependencyPolicy::is_test_dependency(&scoped));

        let upper = dep("com.example", "fixtures").with_scope("TEST");
        assert!(!TestDependencyPolicy::is_test_dependency(&upper));
    }

    #[test]
    fn test_regular_dependency_is_not_test() {
        assert!(!TestDependencyPolicy::is_test_dependency(&dep(
            "org.apache.commons",
            "commons-lang3"
        )));
        let runtime = dep("org.postgresql", "postgresql").with_scope("runtime");
        assert!(!TestDependencyPolicy::is_test_dependency(&runtime));
    }

    #[test]
    fn test_required_dependencies_accepting_tests() {
        let reference = vec![dep("junit", "junit"), dep("com.google.code.gson", "gson")];
        let required = TestDependencyPolicy::required_dependencies(&reference, true);
        assert_eq!(required.len(), 2);
    }

    #[test]
    fn test_required_dependencies_excluding_tests_keeps_order() {
        let reference = vec![
            dep("com.google.code.gson", "gson"),
            dep("junit", "junit"),
            dep("org.apache.commons", "commons-lang3"),
        ];
        let required = TestDependencyPolicy::required_dependencies(&reference, false);
        let artifacts: Vec<&str> = required.iter().map(|d| d.artifact()).collect();
        assert_eq!(artifacts, vec!["gson", "commons-lang3"]);
    }
}
