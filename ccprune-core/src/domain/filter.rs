// ccprune-core/src/domain/filter.rs

use std::path::Path;

pub const DEFAULT_EXTENSIONS: [&str; 2] = ["c", "s"];

/// Case-insensitive suffix filter deciding which files count as sources.
///
/// Matching is done on the raw name (`".c"` and `"x.tar.S"` both match), not
/// on `Path::extension`, so dot-files named after an extension are included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFilter {
    suffixes: Vec<String>,
}

impl SourceFilter {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut suffixes: Vec<String> = extensions
            .into_iter()
            .map(|ext| format!(".{}", normalize_extension(ext.as_ref())))
            .filter(|suffix| suffix.len() > 1)
            .collect();
        suffixes.sort();
        suffixes.dedup();
        Self { suffixes }
    }

    /// True when `name` (a file name or a full path string) ends with one of
    /// the extensions, ignoring case.
    pub fn matches(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        self.suffixes.iter().any(|suffix| lower.ends_with(suffix))
    }

    pub fn matches_file_name(&self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| self.matches(&name.to_string_lossy()))
    }
}

impl Default for SourceFilter {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSIONS)
    }
}

/// `".S"` -> `"s"`, `"c"` -> `"c"`.
pub fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_lowercase()
}
