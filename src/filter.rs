//! Ignore rules: defaults, root .gitignore, and user-supplied patterns.
//!
//! The rule set is assembled once per invocation and is read-only afterwards.
//! Matching is evaluated against paths relative to the root.

use std::path::{Path, PathBuf};

use glob::Pattern;
use ignore::Match;
use ignore::gitignore::{Gitignore, GitignoreBuilder};

/// Names excluded unconditionally, merged with user rules at startup.
/// Kept as an explicit list so the policy is auditable in one place.
pub const DEFAULT_IGNORES: &[&str] = &[".git"];

/// The assembled ignore rule set for one invocation.
pub struct IgnoreRules {
    root: PathBuf,
    gitignore: Option<Gitignore>,
    extra: Vec<Pattern>,
}

impl IgnoreRules {
    /// Load rules for `root`: the default set, the root-level `.gitignore`
    /// (when `respect_gitignore` is set and the file exists), and any extra
    /// glob patterns from the command line.
    ///
    /// Malformed `.gitignore` lines and unparseable extra patterns are
    /// skipped with a warning on stderr; they never abort the run.
    pub fn load(root: &Path, extra_patterns: &[String], respect_gitignore: bool) -> Self {
        let gitignore = if respect_gitignore {
            load_gitignore(root)
        } else {
            None
        };

        let mut extra = Vec::new();
        for pattern in extra_patterns {
            match Pattern::new(pattern) {
                Ok(p) => extra.push(p),
                Err(e) => {
                    eprintln!("gitree: warning: invalid ignore pattern '{}': {}", pattern, e);
                }
            }
        }

        Self {
            root: root.to_path_buf(),
            gitignore,
            extra,
        }
    }

    /// Whether `path` (absolute, under the root) is excluded from output.
    /// For directories this means the whole subtree is pruned.
    pub fn is_ignored(&self, path: &Path, is_dir: bool) -> bool {
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        if DEFAULT_IGNORES.contains(&name.as_str()) {
            return true;
        }

        let rel = path.strip_prefix(&self.root).unwrap_or(path);

        if let Some(gi) = &self.gitignore {
            match gi.matched(rel, is_dir) {
                Match::Ignore(_) => return true,
                // A whitelisted path only overrides the .gitignore rules;
                // extra patterns are a separate rule source and still apply.
                Match::Whitelist(_) | Match::None => {}
            }
        }

        self.extra
            .iter()
            .any(|p| p.matches(&name) || p.matches_path(rel))
    }
}

/// Read the root-level `.gitignore`, feeding it line-by-line so a rejected
/// line can be skipped without dropping the rest of the file.
fn load_gitignore(root: &Path) -> Option<Gitignore> {
    let gi_path = root.join(".gitignore");
    let contents = std::fs::read_to_string(&gi_path).ok()?;

    let mut builder = GitignoreBuilder::new(root);
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Err(e) = builder.add_line(None, line) {
            eprintln!(
                "gitree: warning: skipping bad pattern '{}' in {}: {}",
                line,
                gi_path.display(),
                e
            );
        }
    }

    match builder.build() {
        Ok(gi) => Some(gi),
        Err(e) => {
            eprintln!("gitree: warning: cannot apply {}: {}", gi_path.display(), e);
            None
        }
    }
}
