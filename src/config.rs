use std::path::PathBuf;

use crate::cache::CACHE_FILE_NAME;
use crate::runner::DEFAULT_TEST_COMMAND;
use crate::variant::Variant;

/// Settings for one run, fixed at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Tester checkout: holds the cache file and the suite variants.
    pub work_dir: PathBuf,
    pub test_command: String,
    pub self_update: bool,
    /// Ignore the cached directory and prompt again.
    pub force_pick: bool,
}

impl Config {
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
            test_command: DEFAULT_TEST_COMMAND.to_string(),
            self_update: true,
            force_pick: false,
        }
    }

    pub fn cache_path(&self) -> PathBuf {
        self.work_dir.join(CACHE_FILE_NAME)
    }

    pub fn variant_source(&self, variant: Variant) -> PathBuf {
        self.work_dir.join(variant.source_file_name())
    }
}
