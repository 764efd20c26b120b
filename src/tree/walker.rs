//! Iterative depth-first directory walk.
//!
//! The walk keeps an explicit stack of (path, prefix, is-last) frames instead
//! of recursing, so pathological directory depths cannot overflow the call
//! stack and the is-last-sibling bookkeeping stays in one place.

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::errors::GitreeError;
use crate::filter::IgnoreRules;
use crate::output::{TreeFormatter, child_prefix};

use super::config::WalkerConfig;

/// One retained directory entry, before rendering.
struct Entry {
    path: PathBuf,
    name: String,
    is_dir: bool,
}

/// A pending frame on the traversal stack.
struct Frame {
    entry: Entry,
    prefix: String,
    is_last: bool,
}

/// Walks a directory tree and streams retained entries to a formatter.
///
/// Per-entry failures (unreadable subdirectory, unreadable metadata) are
/// warned to stderr and skipped; only an unusable root or a write failure
/// aborts the walk.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk `root` and render its tree through `formatter`.
    pub fn walk<W: Write>(
        &self,
        root: &Path,
        formatter: &mut TreeFormatter<W>,
    ) -> Result<(), GitreeError> {
        if !root.exists() {
            return Err(GitreeError::PathNotFound(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(GitreeError::NotADirectory(root.to_path_buf()));
        }

        let rules = IgnoreRules::load(
            root,
            &self.config.ignore_patterns,
            self.config.respect_gitignore,
        );

        let root_name = root
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| root.display().to_string());
        formatter.write_root(&root_name)?;

        // An unreadable root is fatal; deeper failures are not.
        let children = self.list_entries(root, &rules).map_err(GitreeError::Io)?;

        let mut stack: Vec<Frame> = Vec::new();
        push_children(&mut stack, children, "");

        while let Some(frame) = stack.pop() {
            let Frame {
                entry,
                prefix,
                is_last,
            } = frame;

            formatter.write_entry(&prefix, is_last, &entry.name, entry.is_dir)?;

            if entry.is_dir {
                match self.list_entries(&entry.path, &rules) {
                    Ok(children) => {
                        let prefix = child_prefix(&prefix, is_last);
                        push_children(&mut stack, children, &prefix);
                    }
                    Err(e) => {
                        eprintln!(
                            "gitree: warning: cannot read directory '{}': {}",
                            entry.path.display(),
                            e
                        );
                    }
                }
            }
        }

        Ok(())
    }

    /// List one directory's retained children, sorted directories first and
    /// then case-insensitively by name.
    fn list_entries(&self, dir: &Path, rules: &IgnoreRules) -> io::Result<Vec<Entry>> {
        let mut entries = Vec::new();

        for dirent in std::fs::read_dir(dir)? {
            let dirent = match dirent {
                Ok(d) => d,
                Err(e) => {
                    eprintln!(
                        "gitree: warning: skipping unreadable entry in '{}': {}",
                        dir.display(),
                        e
                    );
                    continue;
                }
            };

            let path = dirent.path();
            let name = dirent.file_name().to_string_lossy().to_string();

            let file_type = match dirent.file_type() {
                Ok(t) => t,
                Err(e) => {
                    eprintln!(
                        "gitree: warning: skipping '{}': {}",
                        path.display(),
                        e
                    );
                    continue;
                }
            };

            // Symlinks are never followed or printed; following them can
            // loop back into an ancestor.
            if file_type.is_symlink() {
                continue;
            }
            let is_dir = file_type.is_dir();

            if !self.config.show_all && name.starts_with('.') {
                continue;
            }
            if rules.is_ignored(&path, is_dir) {
                continue;
            }

            entries.push(Entry { path, name, is_dir });
        }

        entries.sort_by_key(|e| (!e.is_dir, e.name.to_lowercase()));

        Ok(entries)
    }
}

/// Push a sibling group in reverse so the stack pops in display order. The
/// final element of the group carries the is-last flag.
fn push_children(stack: &mut Vec<Frame>, children: Vec<Entry>, prefix: &str) {
    let count = children.len();
    for (i, entry) in children.into_iter().enumerate().rev() {
        stack.push(Frame {
            entry,
            prefix: prefix.to_string(),
            is_last: i == count - 1,
        });
    }
}

/// Walk `root` and print its tree to stdout.
pub fn print_structure(root: &Path, config: WalkerConfig) -> Result<(), GitreeError> {
    let stdout = io::stdout();
    let mut formatter = TreeFormatter::new(BufWriter::new(stdout.lock()));
    TreeWalker::new(config).walk(root, &mut formatter)?;
    formatter.flush()?;
    Ok(())
}
