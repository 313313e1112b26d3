//! Merging header roots into one symlinked include tree.
//!
//! Libraries frequently ship headers under several independent roots (for
//! example `/usr/include` and `/usr/include/glib-2.0`). Symlinking each root
//! wholesale under a common name collides as soon as two roots share a
//! subdirectory name, so the merge works file by file: every regular file
//! found under any root is linked into the destination at its root-relative
//! path. Same-named subdirectories from different roots merge together;
//! genuine file-name clashes are caught at the leaves.
//!
//! Traversal is fully recursive with no depth bound. Entries are visited in
//! sorted filename order so the returned path list is deterministic across
//! runs and platforms.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::link::make_link;

/// Merge the given header roots into a single tree of links under `dest`.
///
/// For every regular file under every root (symlinks followed), a link is
/// created at `dest/<path relative to its root>` pointing at the file's
/// canonical location. Collision policy, applied per destination path:
///
/// - destination already exists and resolves to the same canonical target:
///   benign re-run, left alone, still reported in the result;
/// - destination exists but resolves to a different target:
///   [`Error::IncludeCollision`] naming the relative path.
///
/// Returns the relative path of every file in the merged tree, in the order
/// processed. Nonexistent roots are skipped: pkg-config output occasionally
/// names directories that were never installed.
pub fn merge_trees(roots: &[PathBuf], dest: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dest)?;

    let mut merged = Vec::new();

    for root in roots {
        if !root.is_dir() {
            continue;
        }

        for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
            let entry = entry.map_err(walk_error)?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(rel) = entry.path().strip_prefix(root) else {
                continue;
            };

            let target = fs::canonicalize(entry.path())?;
            let local = dest.join(rel);

            if local.symlink_metadata().is_ok() {
                if fs::canonicalize(&local)? == target {
                    merged.push(rel.to_path_buf());
                    continue;
                }
                return Err(Error::IncludeCollision {
                    path: rel.to_path_buf(),
                });
            }

            if let Some(parent) = local.parent() {
                fs::create_dir_all(parent)?;
            }
            make_link(&target, &local)?;
            merged.push(rel.to_path_buf());
        }
    }

    Ok(merged)
}

/// Convert a traversal error into our I/O error variant.
fn walk_error(err: walkdir::Error) -> Error {
    let msg = err.to_string();
    Error::Io(
        err.into_io_error()
            .unwrap_or_else(|| io::Error::other(msg)),
    )
}
