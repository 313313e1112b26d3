//! `libpkgstage` — discovery and staging of system-library build metadata.
//!
//! Given the name of an externally-installed library, this crate queries the
//! pkg-config metadata tool for the library's headers, compiler flags, linker
//! flags, and library search paths, stages the discovered headers and library
//! directories into a predictable local layout via filesystem links, and
//! assembles a substitution record suitable for rendering into a build-file
//! fragment. It exists so a build system can consume arbitrary system
//! libraries without hand-written discovery logic per consumer.
//!
//! # Architecture
//!
//! - [`error`] — Error types and result alias
//! - [`query`] — External pkg-config invocation ([`query::QueryTool`])
//! - [`flags`] — Flag-token splitting, prefix stripping, and exclusion
//! - [`check`] — Existence and version-constraint checking
//! - [`merge`] — Merging header roots into one symlinked include tree
//! - [`link`] — Path identifier encoding and flat library-directory links
//! - [`config`] — Per-library configuration surface
//! - [`record`] — The build substitution record handed to template rendering
//! - [`probe`] — The orchestrating pipeline
//!
//! # Example
//!
//! ```rust,no_run
//! use libpkgstage::config::LibraryConfig;
//! use libpkgstage::probe::{self, Staging};
//! use libpkgstage::query::PkgConfig;
//!
//! let tool = PkgConfig::locate()?;
//! let config = LibraryConfig::new().atleast_version("1.2");
//! let staging = Staging::new("external/zlib");
//! let record = probe::probe(&tool, "zlib", &config, &staging)?;
//! println!("{}", record.substitutions()["linkopts"]);
//! # Ok::<(), libpkgstage::error::Error>(())
//! ```

pub mod check;
pub mod config;
pub mod error;
pub mod flags;
pub mod link;
pub mod merge;
pub mod probe;
pub mod query;
pub mod record;

/// The version of this library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The environment variable that overrides the pkg-config binary path.
///
/// This is the conventional variable honored by autoconf, meson, and the
/// Rust `pkg-config` build-dependency crate alike.
pub const ENV_PKG_CONFIG: &str = "PKG_CONFIG";

/// Binary names probed on `PATH` when `PKG_CONFIG` is not set, in order.
pub const DEFAULT_TOOL_NAMES: &[&str] = &["pkg-config", "pkgconf"];

/// Name of the staged include tree directory under the staging root.
pub const STAGED_INCLUDE_DIR: &str = "include";

/// Name of the staged library-link directory under the staging root.
pub const STAGED_LIB_DIR: &str = "lib";
