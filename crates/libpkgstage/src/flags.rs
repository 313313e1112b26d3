//! Flag-token splitting, prefix stripping, and exclusion filtering.
//!
//! pkg-config reports flags as whitespace-delimited text. These helpers turn
//! that text into ordered token lists and carve out the path-bearing tokens
//! (`-I...`, `-L...`). Order is preserved throughout because flag order can
//! matter to the downstream compiler.

/// Split query output into flag tokens.
///
/// Surrounding whitespace is trimmed, tokens are split on ASCII whitespace,
/// and empty tokens are dropped. Splitting the rejoined result again yields
/// the same list.
///
/// # Examples
///
/// ```
/// use libpkgstage::flags::split;
///
/// assert_eq!(split("  -lz  -lm \n"), vec!["-lz", "-lm"]);
/// ```
pub fn split(text: &str) -> Vec<String> {
    text.split_ascii_whitespace().map(str::to_string).collect()
}

/// Keep only tokens carrying `prefix`, with the prefix removed.
///
/// Tokens without the prefix are silently dropped: this doubles as the
/// filter that selects `-I`/`-L` tokens out of mixed flag output.
///
/// # Examples
///
/// ```
/// use libpkgstage::flags::strip_prefix;
///
/// let tokens = vec!["-Ifoo".to_string(), "-Ibar".to_string(), "-Wall".to_string()];
/// assert_eq!(strip_prefix(&tokens, "-I"), vec!["foo", "bar"]);
/// ```
pub fn strip_prefix(tokens: &[String], prefix: &str) -> Vec<String> {
    tokens
        .iter()
        .filter_map(|t| t.strip_prefix(prefix))
        .map(str::to_string)
        .collect()
}

/// Return `opts` minus any element present in `excluded`.
///
/// Relative order of survivors is preserved. Pure and total: there is no
/// failure mode and no deduplication of the survivors.
pub fn exclude(opts: &[String], excluded: &[String]) -> Vec<String> {
    opts.iter()
        .filter(|o| !excluded.contains(o))
        .cloned()
        .collect()
}
