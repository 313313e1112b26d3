//! `pkgstage` — stage a system library and emit build-file substitutions.
//!
//! Queries pkg-config for a library, stages its headers and library
//! directories under a local directory via symlinks, and prints the
//! resulting substitution values (or renders them into a template).

use std::fs;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use libpkgstage::config::LibraryConfig;
use libpkgstage::probe::{self, Staging};
use libpkgstage::query::PkgConfig;

/// Stage a system library's headers and libraries and emit build-file
/// substitutions discovered via pkg-config.
#[derive(Parser, Debug)]
#[command(name = "pkgstage", version, about)]
struct Cli {
    /// Library to query, as known to pkg-config.
    library: String,

    /// Override the pkg-config package name.
    #[arg(long, value_name = "NAME")]
    name: Option<String>,

    /// Path to the pkg-config binary (defaults to $PKG_CONFIG, then PATH).
    #[arg(long = "with-pkg-config", value_name = "PATH")]
    with_pkg_config: Option<String>,

    /// Directory to stage headers and library links under.
    #[arg(long = "out-dir", value_name = "DIR", default_value = ".")]
    out_dir: String,

    /// Require an exact version of the library.
    #[arg(long = "exact-version", value_name = "VERSION")]
    exact_version: Option<String>,

    /// Require a minimum version of the library.
    #[arg(long = "atleast-version", value_name = "VERSION")]
    atleast_version: Option<String>,

    /// Require a maximum version of the library.
    #[arg(long = "max-version", value_name = "VERSION")]
    max_version: Option<String>,

    /// Query static-mode flags.
    #[arg(long = "static")]
    r#static: bool,

    /// Prefix under which the staged headers are re-exported.
    #[arg(long = "include-prefix", value_name = "PREFIX")]
    include_prefix: Option<String>,

    /// Prefix stripped from staged header paths on re-export.
    #[arg(long = "strip-include-prefix", value_name = "PREFIX")]
    strip_include_prefix: Option<String>,

    /// Drop a discovered flag from the output (repeatable).
    #[arg(long = "ignore-opt", value_name = "FLAG", allow_hyphen_values = true)]
    ignore_opt: Vec<String>,

    /// Append a dependency after the discovered values (repeatable).
    #[arg(long = "extra-dep", value_name = "DEP")]
    extra_dep: Vec<String>,

    /// Append a compiler flag after the discovered values (repeatable).
    #[arg(long = "extra-copt", value_name = "FLAG", allow_hyphen_values = true)]
    extra_copt: Vec<String>,

    /// Append a linker flag after the discovered values (repeatable).
    #[arg(long = "extra-linkopt", value_name = "FLAG", allow_hyphen_values = true)]
    extra_linkopt: Vec<String>,

    /// Render a template file, substituting %{name}-style placeholders,
    /// instead of printing KEY = VALUE lines.
    #[arg(long, value_name = "FILE")]
    template: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn build_config(cli: &Cli) -> LibraryConfig {
    let mut config = LibraryConfig::new();

    if let Some(ref name) = cli.name {
        config = config.name(name);
    }
    if let Some(ref version) = cli.exact_version {
        config = config.exact_version(version);
    }
    if let Some(ref version) = cli.atleast_version {
        config = config.atleast_version(version);
    }
    if let Some(ref version) = cli.max_version {
        config = config.max_version(version);
    }
    if cli.r#static {
        config = config.static_linking(true);
    }
    if let Some(ref prefix) = cli.include_prefix {
        config = config.include_prefix(prefix);
    }
    if let Some(ref prefix) = cli.strip_include_prefix {
        config = config.strip_include_prefix(prefix);
    }
    for opt in &cli.ignore_opt {
        config = config.ignore_opt(opt);
    }
    for dep in &cli.extra_dep {
        config = config.extra_dep(dep);
    }
    for opt in &cli.extra_copt {
        config = config.extra_copt(opt);
    }
    for opt in &cli.extra_linkopt {
        config = config.extra_linkopt(opt);
    }

    config
}

fn run(cli: &Cli) -> Result<()> {
    let config = build_config(cli);
    let staging = Staging::new(&cli.out_dir);

    let tool = match cli.with_pkg_config {
        Some(ref path) => PkgConfig::new(path),
        None => PkgConfig::locate()?,
    };

    let record = probe::probe(&tool, &cli.library, &config, &staging)
        .with_context(|| format!("Failed to stage library '{}'", cli.library))?;

    match cli.template {
        Some(ref path) => {
            let template = fs::read_to_string(path)
                .with_context(|| format!("Failed to read template '{path}'"))?;
            print!("{}", record.apply_template(&template));
        }
        None => {
            for (key, value) in record.substitutions() {
                println!("{key} = {value}");
            }
        }
    }

    Ok(())
}
