//! Gitree - print a directory tree that respects .gitignore

pub mod errors;
pub mod filter;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use errors::GitreeError;
pub use filter::{DEFAULT_IGNORES, IgnoreRules};
pub use output::TreeFormatter;
pub use tree::{TreeWalker, WalkerConfig, print_structure};
