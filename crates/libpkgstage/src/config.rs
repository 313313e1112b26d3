//! Per-library configuration surface.
//!
//! Everything a consumer may configure for one library: a name override,
//! version constraints, header prefix handling, static-link mode, extra
//! flags and dependencies appended after the discovered values, and a list
//! of discovered flags to drop.

use crate::check::VersionConstraints;

/// Configuration for probing one library.
///
/// Constructed with chainable setters:
///
/// ```
/// use libpkgstage::config::LibraryConfig;
///
/// let config = LibraryConfig::new()
///     .name("glib-2.0")
///     .atleast_version("2.60")
///     .ignore_opt("-pthread")
///     .extra_linkopt("-lm");
/// assert_eq!(config.resolved_name("glib"), "glib-2.0");
/// ```
#[derive(Debug, Clone, Default)]
pub struct LibraryConfig {
    name: Option<String>,
    include_prefix: Option<String>,
    strip_include_prefix: Option<String>,
    versions: VersionConstraints,
    statik: bool,
    ignore_opts: Vec<String>,
    extra_deps: Vec<String>,
    extra_copts: Vec<String>,
    extra_linkopts: Vec<String>,
}

impl LibraryConfig {
    /// An empty configuration: no constraints, no extras, shared linking.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Setters ─────────────────────────────────────────────────────

    /// Override the pkg-config package name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Prefix under which the staged headers are re-exported.
    pub fn include_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.include_prefix = Some(prefix.into());
        self
    }

    /// Prefix stripped from staged header paths on re-export.
    pub fn strip_include_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.strip_include_prefix = Some(prefix.into());
        self
    }

    /// Require an exact package version.
    pub fn exact_version(mut self, version: impl Into<String>) -> Self {
        self.versions = self.versions.exact(version);
        self
    }

    /// Require a minimum package version.
    pub fn atleast_version(mut self, version: impl Into<String>) -> Self {
        self.versions = self.versions.min(version);
        self
    }

    /// Require a maximum package version.
    pub fn max_version(mut self, version: impl Into<String>) -> Self {
        self.versions = self.versions.max(version);
        self
    }

    /// Query static-mode flags (`--static` variants).
    pub fn static_linking(mut self, enabled: bool) -> Self {
        self.statik = enabled;
        self
    }

    /// Drop a discovered compiler or linker flag from the output.
    pub fn ignore_opt(mut self, opt: impl Into<String>) -> Self {
        self.ignore_opts.push(opt.into());
        self
    }

    /// Append a dependency after the discovered library links.
    pub fn extra_dep(mut self, dep: impl Into<String>) -> Self {
        self.extra_deps.push(dep.into());
        self
    }

    /// Append a compiler flag after the discovered flags.
    pub fn extra_copt(mut self, opt: impl Into<String>) -> Self {
        self.extra_copts.push(opt.into());
        self
    }

    /// Append a linker flag after the discovered flags.
    pub fn extra_linkopt(mut self, opt: impl Into<String>) -> Self {
        self.extra_linkopts.push(opt.into());
        self
    }

    // ── Getters ─────────────────────────────────────────────────────

    /// The effective package name: the override, or the requested name.
    pub fn resolved_name(&self, requested: &str) -> String {
        self.name.clone().unwrap_or_else(|| requested.to_string())
    }

    /// The configured include prefix, empty if unset.
    pub fn include_prefix_str(&self) -> &str {
        self.include_prefix.as_deref().unwrap_or("")
    }

    /// The configured strip prefix, empty if unset.
    pub fn strip_include_prefix_str(&self) -> &str {
        self.strip_include_prefix.as_deref().unwrap_or("")
    }

    /// The configured version constraints.
    pub fn versions(&self) -> &VersionConstraints {
        &self.versions
    }

    /// Whether static-mode queries are enabled.
    pub fn is_static(&self) -> bool {
        self.statik
    }

    /// Flags to drop from discovered output.
    pub fn ignore_opts(&self) -> &[String] {
        &self.ignore_opts
    }

    /// User-supplied dependencies appended after discovered links.
    pub fn extra_deps(&self) -> &[String] {
        &self.extra_deps
    }

    /// User-supplied compiler flags appended after discovered flags.
    pub fn extra_copts(&self) -> &[String] {
        &self.extra_copts
    }

    /// User-supplied linker flags appended after discovered flags.
    pub fn extra_linkopts(&self) -> &[String] {
        &self.extra_linkopts
    }
}
