//! The orchestrating pipeline.
//!
//! [`probe()`] sequences the whole discovery-and-staging run for one library:
//! existence/version checks, include discovery and tree merging, flag
//! filtering, and library-directory linking. The pipeline is strictly
//! sequential and short-circuits on the first failed stage, returning that
//! stage's error verbatim; no partial record is ever produced.

use std::path::{Path, PathBuf};

use crate::config::LibraryConfig;
use crate::error::Result;
use crate::query::{PkgConfig, QueryTool};
use crate::record::SubstitutionRecord;
use crate::{check, flags, link, merge};

/// The fixed local directory layout staged files land in.
///
/// Headers are merged under `<root>/include`, library-directory links are
/// created flat under `<root>/lib`.
#[derive(Debug, Clone)]
pub struct Staging {
    root: PathBuf,
}

impl Staging {
    /// Stage under the given root directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The staging root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Destination of the merged include tree.
    pub fn include_dir(&self) -> PathBuf {
        self.root.join(crate::STAGED_INCLUDE_DIR)
    }

    /// Destination of the flat library links.
    pub fn lib_dir(&self) -> PathBuf {
        self.root.join(crate::STAGED_LIB_DIR)
    }
}

/// Locate the pkg-config binary and run the full pipeline.
pub fn build(
    library: &str,
    config: &LibraryConfig,
    staging_root: impl Into<PathBuf>,
) -> Result<SubstitutionRecord> {
    let tool = PkgConfig::locate()?;
    probe(&tool, library, config, &Staging::new(staging_root))
}

/// Run the full discovery-and-staging pipeline for one library.
pub fn probe(
    tool: &dyn QueryTool,
    library: &str,
    config: &LibraryConfig,
    staging: &Staging,
) -> Result<SubstitutionRecord> {
    let name = config.resolved_name(library);

    check::check(tool, &name, config.versions())?;

    // Include directories: -I paths merged into one local header tree.
    let raw = tool.query(&name, &["--cflags-only-I"])?;
    let include_roots: Vec<PathBuf> = flags::strip_prefix(&flags::split(&raw), "-I")
        .into_iter()
        .map(PathBuf::from)
        .collect();
    let includes = merge::merge_trees(&include_roots, &staging.include_dir())?
        .into_iter()
        .map(|p| p.to_string_lossy().into_owned())
        .collect::<Vec<_>>();

    // Compiler flags other than include paths.
    let raw = tool.query(&name, &query_args("--cflags-only-other", config))?;
    let mut copts = flags::exclude(&flags::split(&raw), config.ignore_opts());

    // Linker flags: non-path flags first, then library names, matching the
    // order a compiler driver expects them.
    let raw_other = tool.query(&name, &query_args("--libs-only-other", config))?;
    let raw_names = tool.query(&name, &query_args("--libs-only-l", config))?;
    let mut discovered = flags::split(&raw_other);
    discovered.extend(flags::split(&raw_names));
    let mut linkopts = flags::exclude(&discovered, config.ignore_opts());

    // Library search paths: -L directories linked under a flat namespace.
    let raw = tool.query(&name, &query_args("--libs-only-L", config))?;
    let lib_dirs = flags::strip_prefix(&flags::split(&raw), "-L");
    let mut deps = link::link_library_dirs(&lib_dirs, &staging.lib_dir())?;

    // User extras are appended after the discovered values, never merged.
    copts.extend(config.extra_copts().iter().cloned());
    linkopts.extend(config.extra_linkopts().iter().cloned());
    deps.extend(config.extra_deps().iter().cloned());

    Ok(SubstitutionRecord {
        name,
        includes,
        copts,
        linkopts,
        deps,
        include_prefix: config.include_prefix_str().to_string(),
        strip_include_prefix: config.strip_include_prefix_str().to_string(),
    })
}

/// Assemble the argument list for a flag query, adding `--static` when
/// static-mode output was requested.
fn query_args<'a>(flag: &'a str, config: &LibraryConfig) -> Vec<&'a str> {
    if config.is_static() {
        vec![flag, "--static"]
    } else {
        vec![flag]
    }
}
