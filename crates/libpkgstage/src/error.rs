//! Error types for libpkgstage.

use std::io;
use std::path::PathBuf;

/// Result type alias for libpkgstage operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while discovering and staging a library.
///
/// Every error is terminal for the current pipeline run: nothing is retried,
/// and the orchestrator returns the first failure unchanged.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No pkg-config binary could be located.
    #[error("No pkg-config binary found; set PKG_CONFIG or install one of: {}", names.join(", "))]
    BinaryNotFound { names: Vec<String> },

    /// The pkg-config binary exited with a non-zero status.
    #[error("'{} {}' exited with a non-zero status", binary.display(), args.join(" "))]
    ExecutionFailed { binary: PathBuf, args: Vec<String> },

    /// A requested package was not found by the metadata tool.
    #[error("Package '{name}' was not found by pkg-config")]
    PackageNotFound { name: String },

    /// A package exists but fails a configured version constraint.
    #[error("Package '{name}' does not satisfy version constraint '{comparator} {required}'")]
    VersionMismatch {
        name: String,
        comparator: String,
        required: String,
    },

    /// Two distinct header files map to the same path in the merged tree.
    #[error("Include tree collision at '{}': two different files share this path", path.display())]
    IncludeCollision { path: PathBuf },

    /// An I/O error occurred while staging files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_not_found_display() {
        let err = Error::BinaryNotFound {
            names: vec!["pkg-config".to_string(), "pkgconf".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("PKG_CONFIG"));
        assert!(msg.contains("pkg-config, pkgconf"));
    }

    #[test]
    fn execution_failed_display() {
        let err = Error::ExecutionFailed {
            binary: PathBuf::from("/usr/bin/pkg-config"),
            args: vec!["zlib".to_string(), "--cflags-only-I".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("/usr/bin/pkg-config"));
        assert!(msg.contains("zlib --cflags-only-I"));
    }

    #[test]
    fn package_not_found_display() {
        let err = Error::PackageNotFound {
            name: "zlib".to_string(),
        };
        assert!(err.to_string().contains("zlib"));
    }

    #[test]
    fn version_mismatch_display() {
        let err = Error::VersionMismatch {
            name: "glib".to_string(),
            comparator: ">=".to_string(),
            required: "2.0".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("glib"));
        assert!(msg.contains(">= 2.0"));
    }

    #[test]
    fn include_collision_display() {
        let err = Error::IncludeCollision {
            path: PathBuf::from("x/foo.h"),
        };
        assert!(err.to_string().contains("x/foo.h"));
    }

    #[test]
    fn io_error_converts() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
