//! Path identifier encoding and flat library-directory links.
//!
//! Library search paths discovered from `--libs-only-L` output are staged as
//! symlinks under one flat local directory. Each link is named by encoding
//! the canonical directory path into a single collision-resistant path
//! segment, so `/usr/lib` and `/opt/foo/lib` can live side by side.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use crate::error::Result;

/// Marker substituted for each path separator during encoding.
pub const SEPARATOR_MARKER: &str = "_s_";

/// Marker substituted for each literal period during encoding.
pub const DOT_MARKER: &str = "_d_";

/// Encode a filesystem path as a flat identifier usable as a link name.
///
/// Literal underscores are doubled, path separators become
/// [`SEPARATOR_MARKER`], and periods become [`DOT_MARKER`]. The transform is
/// deterministic and reversible in intent; collisions across distinct real
/// paths are accepted risk and not validated.
///
/// # Examples
///
/// ```
/// use libpkgstage::link::encode_path;
/// use std::path::Path;
///
/// assert_eq!(encode_path(Path::new("/usr/lib_a/x.so")), "_s_usr_s_lib__a_s_x_d_so");
/// ```
pub fn encode_path(path: &Path) -> String {
    let raw = path.to_string_lossy();
    let mut out = String::with_capacity(raw.len() * 2);
    for c in raw.chars() {
        match c {
            '_' => out.push_str("__"),
            '/' | '\\' => out.push_str(SEPARATOR_MARKER),
            '.' => out.push_str(DOT_MARKER),
            _ => out.push(c),
        }
    }
    out
}

/// Stage library search directories as flat links under `dest`.
///
/// The input list is deduplicated by exact string (first occurrence wins),
/// each survivor is canonicalized, and a link named by [`encode_path`] of the
/// canonical path is created pointing at the canonical directory. Creation is
/// idempotent: an existing link resolving to the same canonical target is
/// left alone; one resolving elsewhere is replaced. Returns the local link
/// names, one per distinct input, in order.
pub fn link_library_dirs(dirs: &[String], dest: &Path) -> Result<Vec<String>> {
    fs::create_dir_all(dest)?;

    let mut seen: HashSet<&str> = HashSet::new();
    let mut names = Vec::new();

    for dir in dirs {
        if !seen.insert(dir.as_str()) {
            continue;
        }

        let canonical = fs::canonicalize(dir)?;
        let name = encode_path(&canonical);
        let local = dest.join(&name);

        if local.symlink_metadata().is_ok() {
            if fs::canonicalize(&local)? == canonical {
                names.push(name);
                continue;
            }
            // Stale link from an earlier run against a different target.
            fs::remove_file(&local)?;
        }

        make_link(&canonical, &local)?;
        names.push(name);
    }

    Ok(names)
}

/// Create a symbolic link at `link` pointing to `target`.
#[cfg(unix)]
pub(crate) fn make_link(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
pub(crate) fn make_link(target: &Path, link: &Path) -> io::Result<()> {
    if target.is_dir() {
        std::os::windows::fs::symlink_dir(target, link)
    } else {
        std::os::windows::fs::symlink_file(target, link)
    }
}
