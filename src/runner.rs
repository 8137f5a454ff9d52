use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, info};
use xshell::{cmd, Shell};

use crate::error::{Result, TesterError};

pub const DEFAULT_TEST_COMMAND: &str = "sbt test";

/// Runs the project's build/test command.
pub trait TestRunner {
    /// Block until `command` finishes in `cwd`. Its exit status is not an error.
    fn run(&mut self, command: &str, cwd: &Path) -> Result<()>;
}

/// Hands the command string to the platform shell. The child shares the tester's
/// stdin, stdout and stderr, so interactive build tool prompts reach the user.
#[derive(Debug, Default)]
pub struct ShellRunner;

impl TestRunner for ShellRunner {
    fn run(&mut self, command: &str, cwd: &Path) -> Result<()> {
        let sh = Shell::new().map_err(|e| launch_error(command, e.to_string()))?;
        sh.change_dir(cwd);
        let (shell, flag) = platform_shell();
        info!(command, cwd = %cwd.display(), "running tests");
        let status = Command::from(cmd!(sh, "{shell} {flag} {command}"))
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| launch_error(command, e.to_string()))?;
        debug!(%status, "test command finished");
        Ok(())
    }
}

fn platform_shell() -> (&'static str, &'static str) {
    if cfg!(windows) {
        ("cmd", "/C")
    } else {
        ("sh", "-c")
    }
}

fn launch_error(command: &str, reason: String) -> TesterError {
    TesterError::Launch {
        command: command.to_string(),
        reason,
    }
}
