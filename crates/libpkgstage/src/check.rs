//! Existence and version-constraint checking.
//!
//! Before any flags are queried, the pipeline confirms that the package is
//! installed and satisfies the configured version constraints. Constraints
//! are independent and optional; any subset (including none) may be set, and
//! every configured constraint must pass. Checks run in a fixed order and
//! short-circuit on the first failure.

use crate::error::{Error, Result};
use crate::query::QueryTool;

/// Optional exact/minimum/maximum version constraints for one library.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionConstraints {
    exact: Option<String>,
    min: Option<String>,
    max: Option<String>,
}

impl VersionConstraints {
    /// No constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require an exact version.
    pub fn exact(mut self, version: impl Into<String>) -> Self {
        self.exact = Some(version.into());
        self
    }

    /// Require a minimum version.
    pub fn min(mut self, version: impl Into<String>) -> Self {
        self.min = Some(version.into());
        self
    }

    /// Require a maximum version.
    pub fn max(mut self, version: impl Into<String>) -> Self {
        self.max = Some(version.into());
        self
    }

    /// Whether any constraint is configured.
    pub fn is_empty(&self) -> bool {
        self.exact.is_none() && self.min.is_none() && self.max.is_none()
    }
}

/// Confirm that `name` exists and satisfies `constraints`.
///
/// Query order: `--exists`, then exact, minimum, and maximum version, each
/// only if configured. The first failing query determines the error; later
/// queries are never issued.
pub fn check(tool: &dyn QueryTool, name: &str, constraints: &VersionConstraints) -> Result<()> {
    if !tool.succeeds(name, &["--exists"]) {
        return Err(Error::PackageNotFound {
            name: name.to_string(),
        });
    }

    if let Some(ref version) = constraints.exact {
        let arg = format!("--exact-version={version}");
        if !tool.succeeds(name, &[&arg]) {
            return Err(version_mismatch(name, "==", version));
        }
    }

    if let Some(ref version) = constraints.min {
        let arg = format!("--atleast-version={version}");
        if !tool.succeeds(name, &[&arg]) {
            return Err(version_mismatch(name, ">=", version));
        }
    }

    if let Some(ref version) = constraints.max {
        let arg = format!("--max-version={version}");
        if !tool.succeeds(name, &[&arg]) {
            return Err(version_mismatch(name, "<=", version));
        }
    }

    Ok(())
}

fn version_mismatch(name: &str, comparator: &str, required: &str) -> Error {
    Error::VersionMismatch {
        name: name.to_string(),
        comparator: comparator.to_string(),
        required: required.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// A mock tool that answers queries from a fixed fail-list and records
    /// every query it receives.
    struct MockTool {
        failing: Vec<String>,
        seen: RefCell<Vec<String>>,
    }

    impl MockTool {
        fn failing(args: &[&str]) -> Self {
            Self {
                failing: args.iter().map(|a| a.to_string()).collect(),
                seen: RefCell::new(Vec::new()),
            }
        }

        fn seen(&self) -> Vec<String> {
            self.seen.borrow().clone()
        }
    }

    impl QueryTool for MockTool {
        fn query(&self, package: &str, args: &[&str]) -> Result<String> {
            let key = args.join(" ");
            self.seen.borrow_mut().push(key.clone());
            if self.failing.contains(&key) {
                Err(Error::ExecutionFailed {
                    binary: "mock".into(),
                    args: std::iter::once(package.to_string())
                        .chain(args.iter().map(|a| a.to_string()))
                        .collect(),
                })
            } else {
                Ok(String::new())
            }
        }
    }

    // ── Constraint construction ─────────────────────────────────────

    #[test]
    fn empty_constraints() {
        assert!(VersionConstraints::new().is_empty());
        assert!(!VersionConstraints::new().min("1.0").is_empty());
    }

    // ── Checking ────────────────────────────────────────────────────

    #[test]
    fn unconstrained_existing_package_passes() {
        let tool = MockTool::failing(&[]);
        check(&tool, "zlib", &VersionConstraints::new()).unwrap();
        assert_eq!(tool.seen(), vec!["--exists"]);
    }

    #[test]
    fn missing_package_is_package_not_found() {
        let tool = MockTool::failing(&["--exists"]);
        let err = check(&tool, "nope", &VersionConstraints::new()).unwrap_err();
        match err {
            Error::PackageNotFound { name } => assert_eq!(name, "nope"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn exact_version_failure() {
        let tool = MockTool::failing(&["--exact-version=2.0"]);
        let constraints = VersionConstraints::new().exact("2.0");
        let err = check(&tool, "zlib", &constraints).unwrap_err();
        match err {
            Error::VersionMismatch {
                name,
                comparator,
                required,
            } => {
                assert_eq!(name, "zlib");
                assert_eq!(comparator, "==");
                assert_eq!(required, "2.0");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn min_failure_short_circuits_max_query() {
        let tool = MockTool::failing(&["--atleast-version=1.0"]);
        let constraints = VersionConstraints::new().min("1.0").max("2.0");
        let err = check(&tool, "zlib", &constraints).unwrap_err();
        match err {
            Error::VersionMismatch { comparator, .. } => assert_eq!(comparator, ">="),
            other => panic!("unexpected error: {other}"),
        }
        // The max-version query must never have been issued.
        assert_eq!(tool.seen(), vec!["--exists", "--atleast-version=1.0"]);
    }

    #[test]
    fn max_version_failure() {
        let tool = MockTool::failing(&["--max-version=3.0"]);
        let constraints = VersionConstraints::new().max("3.0");
        let err = check(&tool, "zlib", &constraints).unwrap_err();
        match err {
            Error::VersionMismatch { comparator, .. } => assert_eq!(comparator, "<="),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn all_constraints_queried_in_order_when_passing() {
        let tool = MockTool::failing(&[]);
        let constraints = VersionConstraints::new().exact("1.5").min("1.0").max("2.0");
        check(&tool, "zlib", &constraints).unwrap();
        assert_eq!(
            tool.seen(),
            vec![
                "--exists",
                "--exact-version=1.5",
                "--atleast-version=1.0",
                "--max-version=2.0",
            ]
        );
    }

    #[test]
    fn missing_package_short_circuits_version_queries() {
        let tool = MockTool::failing(&["--exists"]);
        let constraints = VersionConstraints::new().min("1.0");
        assert!(check(&tool, "zlib", &constraints).is_err());
        assert_eq!(tool.seen(), vec!["--exists"]);
    }
}
