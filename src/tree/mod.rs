//! Directory tree walking logic.

mod config;
mod walker;

pub use config::WalkerConfig;
pub use walker::{TreeWalker, print_structure};
