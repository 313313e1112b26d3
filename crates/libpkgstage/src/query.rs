//! External pkg-config invocation.
//!
//! The metadata tool is always called as `<binary> <package> <flag>...` with
//! exit code 0 meaning success (stdout is the payload) and any other exit
//! code meaning failure. Invocations are blocking, short-lived, and never
//! retried: a single failed invocation is surfaced immediately.
//!
//! The [`QueryTool`] trait is the seam between the pipeline and the external
//! process, so the checker and orchestrator can be exercised against a mock
//! tool in tests.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};

/// A source of pkg-config metadata answers.
pub trait QueryTool {
    /// Run one query against the tool for `package` with the given flags.
    ///
    /// Returns the tool's standard output on success.
    fn query(&self, package: &str, args: &[&str]) -> Result<String>;

    /// Run a boolean query, reporting only whether it succeeded.
    fn succeeds(&self, package: &str, args: &[&str]) -> bool {
        self.query(package, args).is_ok()
    }
}

/// The real pkg-config binary, invoked as an external process.
#[derive(Debug, Clone)]
pub struct PkgConfig {
    binary: PathBuf,
}

impl PkgConfig {
    /// Use an explicit binary path.
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Locate the pkg-config binary.
    ///
    /// The `PKG_CONFIG` environment variable wins if set; otherwise each of
    /// [`crate::DEFAULT_TOOL_NAMES`] is searched for on `PATH`, in order.
    pub fn locate() -> Result<Self> {
        if let Some(explicit) = std::env::var_os(crate::ENV_PKG_CONFIG) {
            if !explicit.is_empty() {
                return Ok(Self::new(PathBuf::from(explicit)));
            }
        }

        for name in crate::DEFAULT_TOOL_NAMES {
            if let Some(found) = find_in_path(name) {
                return Ok(Self::new(found));
            }
        }

        Err(Error::BinaryNotFound {
            names: crate::DEFAULT_TOOL_NAMES
                .iter()
                .map(|n| n.to_string())
                .collect(),
        })
    }

    /// The path of the underlying binary.
    pub fn binary(&self) -> &Path {
        &self.binary
    }
}

impl QueryTool for PkgConfig {
    fn query(&self, package: &str, args: &[&str]) -> Result<String> {
        let output = Command::new(&self.binary)
            .arg(package)
            .args(args)
            .output()?;

        if !output.status.success() {
            let mut full_args = vec![package.to_string()];
            full_args.extend(args.iter().map(|a| a.to_string()));
            return Err(Error::ExecutionFailed {
                binary: self.binary.clone(),
                args: full_args,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Search `PATH` for an executable with the given file name.
fn find_in_path(name: &str) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    for dir in std::env::split_paths(&path_var) {
        let candidate = dir.join(name);
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Process invocation ──────────────────────────────────────────

    #[cfg(unix)]
    #[test]
    fn zero_exit_wraps_stdout() {
        // `true` ignores its arguments and exits 0 with empty stdout.
        let tool = PkgConfig::new("true");
        let out = tool.query("anything", &["--exists"]).unwrap();
        assert_eq!(out, "");
    }

    #[cfg(unix)]
    #[test]
    fn echo_output_is_returned() {
        let tool = PkgConfig::new("echo");
        let out = tool.query("zlib", &["--cflags-only-I"]).unwrap();
        assert_eq!(out.trim(), "zlib --cflags-only-I");
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_is_execution_failed() {
        let tool = PkgConfig::new("false");
        let err = tool.query("zlib", &["--exists"]).unwrap_err();
        match err {
            Error::ExecutionFailed { args, .. } => {
                assert_eq!(args, vec!["zlib", "--exists"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn succeeds_reflects_exit_status() {
        assert!(PkgConfig::new("true").succeeds("pkg", &[]));
        assert!(!PkgConfig::new("false").succeeds("pkg", &[]));
    }

    #[test]
    fn missing_binary_is_io_error() {
        let tool = PkgConfig::new("/nonexistent/path/to/pkg-config");
        let err = tool.query("zlib", &[]).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    // ── Binary lookup ───────────────────────────────────────────────

    #[test]
    fn explicit_binary_path_is_kept() {
        let tool = PkgConfig::new("/opt/cross/bin/pkg-config");
        assert_eq!(tool.binary(), Path::new("/opt/cross/bin/pkg-config"));
    }

    #[test]
    fn find_in_path_misses_unknown_name() {
        assert!(find_in_path("definitely-not-a-real-binary-name").is_none());
    }
}
