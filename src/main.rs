use anyhow::{Context, Result};
use clap::Parser;

use imdb_tester::chooser::DirectoryChooser;
use imdb_tester::runner::DEFAULT_TEST_COMMAND;
use imdb_tester::{Config, GitCheckout, ShellRunner, TerminalChooser, Tester};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    ", ",
    env!("GIT_DIRTY"),
    ")"
);

#[derive(Parser)]
#[command(name = "imdb-tester")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Stage the IMDB test suite into your project and run sbt test")]
struct Cli {
    /// Skip fetching the latest version of the tester
    #[arg(long)]
    no_update: bool,
    /// Ignore the cached project directory and choose again
    #[arg(long)]
    pick: bool,
    /// Build/test command run inside the project directory
    #[arg(long, default_value = DEFAULT_TEST_COMMAND)]
    command: String,
    /// Prompt in the terminal instead of opening a folder dialog
    #[cfg(feature = "dialog")]
    #[arg(long)]
    terminal: bool,
}

impl Cli {
    #[cfg(feature = "dialog")]
    fn chooser(&self) -> std::io::Result<Box<dyn DirectoryChooser>> {
        if self.terminal {
            Ok(Box::new(TerminalChooser::stdio()?))
        } else {
            Ok(Box::new(imdb_tester::chooser::DialogChooser))
        }
    }

    #[cfg(not(feature = "dialog"))]
    fn chooser(&self) -> std::io::Result<Box<dyn DirectoryChooser>> {
        Ok(Box::new(TerminalChooser::stdio()?))
    }
}

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    let cli = Cli::parse();
    let work_dir = std::env::current_dir().context("cannot determine working directory")?;

    let mut config = Config::new(&work_dir);
    config.test_command = cli.command.clone();
    config.self_update = !cli.no_update;
    config.force_pick = cli.pick;

    let chooser = cli.chooser().context("cannot open stdin for the directory prompt")?;
    let mut tester = Tester::new(config, GitCheckout::new(&work_dir), chooser, ShellRunner);
    let report = tester.run().context("test run aborted")?;
    tracing::info!(
        variant = %report.variant,
        project = %report.project_dir.display(),
        "done"
    );

    Ok(())
}
