//! Content loaders for reading combat data from files.
//!
//! Each loader has a `load(path)` entry point for files on disk and a
//! `parse(str)` entry point used for embedded defaults.

pub mod abilities;
pub mod bundle;
pub mod config;
pub mod factory;
pub mod items;
pub mod roster;
pub mod skills;
pub mod status;

pub use abilities::AbilityLoader;
pub use bundle::ContentBundle;
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use items::{ItemCatalog, ItemLoader};
pub use roster::RosterLoader;
pub use skills::{SkillBook, SkillLoader};
pub use status::StatusLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
