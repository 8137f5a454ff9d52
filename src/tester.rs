use std::path::PathBuf;

use tracing::info;

use crate::cache::ProjectCache;
use crate::chooser::DirectoryChooser;
use crate::config::Config;
use crate::error::Result;
use crate::resolver::resolve_project_dir;
use crate::runner::TestRunner;
use crate::stage::StagedFile;
use crate::update::{self, SelfUpdate};
use crate::variant::Variant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// `None` when self-update was skipped.
    pub revision: Option<String>,
    pub project_dir: PathBuf,
    pub variant: Variant,
}

pub struct Tester<U, C, R> {
    config: Config,
    updater: U,
    chooser: C,
    runner: R,
}

impl<U, C, R> Tester<U, C, R>
where
    U: SelfUpdate,
    C: DirectoryChooser,
    R: TestRunner,
{
    pub fn new(config: Config, updater: U, chooser: C, runner: R) -> Self {
        Self {
            config,
            updater,
            chooser,
            runner,
        }
    }

    pub fn chooser(&self) -> &C {
        &self.chooser
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Update, resolve, stage, run, remove.
    ///
    /// Returns at the first error. If the runner fails the staged suite is not removed.
    pub fn run(&mut self) -> Result<RunReport> {
        let revision = if self.config.self_update {
            Some(update::self_update(&mut self.updater)?)
        } else {
            info!("self-update skipped");
            None
        };

        let mut cache = ProjectCache::load(self.config.cache_path())?;
        if self.config.force_pick {
            cache.forget();
        }
        let project_dir = resolve_project_dir(&mut cache, &mut self.chooser)?;

        let variant = Variant::for_project(&project_dir);
        info!(%variant, project = %project_dir.display(), "selected test variant");

        let staged = StagedFile::stage(&self.config.variant_source(variant), &project_dir)?;
        self.runner.run(&self.config.test_command, &project_dir)?;
        staged.remove()?;

        Ok(RunReport {
            revision,
            project_dir,
            variant,
        })
    }
}
