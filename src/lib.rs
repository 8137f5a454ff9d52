//! Stage the IMDB coursework test suite into a student project and run its tests.
//!
//! The project directory is remembered in a `.cache` file next to the tester. The suite
//! variant is picked from the project's directory name, copied into the project's test
//! tree for the duration of the build tool run, and removed afterwards.
//!
//! The default build asks for the project directory on the terminal. Build with
//! `--features dialog` to get a native folder-picker dialog instead; `--terminal`
//! then switches back to the prompt for a single run.

pub mod cache;
pub mod chooser;
pub mod config;
pub mod error;
pub mod resolver;
pub mod runner;
pub mod stage;
pub mod tester;
pub mod update;
pub mod variant;

pub use cache::ProjectCache;
pub use chooser::{DirectoryChooser, TerminalChooser};
pub use config::Config;
pub use error::{Result, TesterError};
pub use runner::{ShellRunner, TestRunner};
pub use stage::StagedFile;
pub use tester::{RunReport, Tester};
pub use update::{GitCheckout, SelfUpdate};
pub use variant::Variant;
