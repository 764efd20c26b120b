//! Configuration for tree walking.

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Include hidden entries (dotfiles). The default rule set (e.g. `.git`)
    /// is applied regardless.
    pub show_all: bool,
    /// Extra glob patterns to exclude, matched against base names and
    /// root-relative paths.
    pub ignore_patterns: Vec<String>,
    /// Read and apply the root-level `.gitignore`.
    pub respect_gitignore: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            show_all: false,
            ignore_patterns: Vec::new(),
            respect_gitignore: true,
        }
    }
}
