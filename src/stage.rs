use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, TesterError};

/// Where the suite lands inside a project, whichever variant was chosen.
pub const STAGED_RELATIVE_PATH: [&str; 5] =
    ["src", "test", "scala", "imdb", "ImdbSuiteTester.scala"];

pub fn staged_path(project_dir: &Path) -> PathBuf {
    STAGED_RELATIVE_PATH
        .iter()
        .fold(project_dir.to_path_buf(), |p, part| p.join(part))
}

/// A test suite copied into a project tree.
///
/// Dropping it without calling [`StagedFile::remove`] leaves the file behind.
#[derive(Debug)]
#[must_use = "a staged file stays in the project until `remove` is called"]
pub struct StagedFile {
    path: PathBuf,
}

impl StagedFile {
    /// Copy `source` over the staged path of `project_dir`. Parent directories are not created.
    pub fn stage(source: &Path, project_dir: &Path) -> Result<Self> {
        if !source.is_file() {
            return Err(TesterError::MissingVariant(source.to_path_buf()));
        }
        let path = staged_path(project_dir);
        fs::copy(source, &path).map_err(|source_err| TesterError::Stage {
            from: source.to_path_buf(),
            to: path.clone(),
            source: source_err,
        })?;
        debug!(from = %source.display(), to = %path.display(), "staged test suite");
        Ok(Self { path })
    }

    pub fn remove(self) -> Result<()> {
        fs::remove_file(&self.path).map_err(|source| TesterError::Cleanup {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), "removed staged test suite");
        Ok(())
    }
}
