use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::cache::ProjectCache;
use crate::chooser::DirectoryChooser;
use crate::error::Result;

/// Subdirectory that marks a directory as a project root.
pub const SOURCE_DIR: &str = "src";

pub fn is_project_root(dir: &Path) -> bool {
    dir.join(SOURCE_DIR).is_dir()
}

/// Return a directory containing `src/`.
///
/// A valid cached entry is returned without prompting. Otherwise the chooser is asked
/// until it produces a project root, with no retry limit, and the answer is cached.
pub fn resolve_project_dir<C>(cache: &mut ProjectCache, chooser: &mut C) -> Result<PathBuf>
where
    C: DirectoryChooser + ?Sized,
{
    if let Some(dir) = cache.entry() {
        if is_project_root(dir) {
            debug!(dir = %dir.display(), "using cached project directory");
            return Ok(dir.to_path_buf());
        }
        info!(dir = %dir.display(), "cached project directory has no src/, asking again");
    }

    loop {
        match chooser.choose()? {
            Some(dir) if is_project_root(&dir) => {
                cache.store(&dir)?;
                info!(dir = %dir.display(), "project directory accepted");
                return Ok(dir);
            }
            Some(dir) => warn!(dir = %dir.display(), "not a project directory (no src/)"),
            None => debug!("directory selection dismissed"),
        }
    }
}
