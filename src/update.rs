use std::path::PathBuf;

use tracing::debug;
use xshell::{cmd, Shell};

use crate::error::{Result, TesterError};

/// Access to the tester's own version-controlled checkout.
pub trait SelfUpdate {
    fn pull(&mut self) -> Result<()>;
    fn current_revision(&mut self) -> Result<String>;
}

/// A git checkout driven through the `git` executable.
#[derive(Debug, Clone)]
pub struct GitCheckout {
    dir: PathBuf,
}

impl GitCheckout {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn shell(&self) -> Result<Shell> {
        let sh = Shell::new().map_err(update_error)?;
        sh.change_dir(&self.dir);
        Ok(sh)
    }
}

impl SelfUpdate for GitCheckout {
    fn pull(&mut self) -> Result<()> {
        let sh = self.shell()?;
        let output = cmd!(sh, "git pull").quiet().read().map_err(update_error)?;
        debug!(%output, "git pull");
        Ok(())
    }

    fn current_revision(&mut self) -> Result<String> {
        let sh = self.shell()?;
        let rev = cmd!(sh, "git rev-parse HEAD")
            .quiet()
            .read()
            .map_err(update_error)?;
        Ok(rev.trim().to_string())
    }
}

fn update_error(err: xshell::Error) -> TesterError {
    TesterError::SelfUpdate(err.to_string())
}

/// Pull the newest tester and report which revision is running.
pub fn self_update<U: SelfUpdate + ?Sized>(updater: &mut U) -> Result<String> {
    println!("Fetching latest version of the tester...");
    updater.pull()?;
    let rev = updater.current_revision()?;
    println!("Running with version {rev}");
    Ok(rev)
}
