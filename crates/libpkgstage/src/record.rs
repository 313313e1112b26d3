//! The build substitution record.
//!
//! The externally visible product of one pipeline run: a mapping from
//! template placeholder names to their final values, handed to the build
//! system's template-rendering step. Created once per invocation and never
//! mutated afterwards.

use std::collections::BTreeMap;

/// Final substitution values for one probed library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionRecord {
    /// Resolved library name.
    pub name: String,
    /// Root-relative paths of every header in the merged include tree.
    pub includes: Vec<String>,
    /// Filtered compiler flags, user extras appended.
    pub copts: Vec<String>,
    /// Filtered linker flags, user extras appended.
    pub linkopts: Vec<String>,
    /// Local names of the staged library-directory links, user extras appended.
    pub deps: Vec<String>,
    /// Configured include prefix (may be empty).
    pub include_prefix: String,
    /// Configured strip prefix (may be empty).
    pub strip_include_prefix: String,
}

impl SubstitutionRecord {
    /// Render the record as a placeholder-name → value map.
    ///
    /// List values are rendered as comma-separated double-quoted entries,
    /// ready for splicing into a build-file list literal.
    pub fn substitutions(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        map.insert("name".to_string(), self.name.clone());
        map.insert("includes".to_string(), quote_list(&self.includes));
        map.insert("copts".to_string(), quote_list(&self.copts));
        map.insert("linkopts".to_string(), quote_list(&self.linkopts));
        map.insert("deps".to_string(), quote_list(&self.deps));
        map.insert("include_prefix".to_string(), self.include_prefix.clone());
        map.insert(
            "strip_include_prefix".to_string(),
            self.strip_include_prefix.clone(),
        );
        map
    }

    /// Substitute `%{key}` occurrences in a template with this record's values.
    pub fn apply_template(&self, template: &str) -> String {
        let mut out = template.to_string();
        for (key, value) in self.substitutions() {
            out = out.replace(&format!("%{{{key}}}"), &value);
        }
        out
    }
}

/// Render a list as `"a", "b", "c"`.
fn quote_list(items: &[String]) -> String {
    items
        .iter()
        .map(|i| format!("\"{i}\""))
        .collect::<Vec<_>>()
        .join(", ")
}
