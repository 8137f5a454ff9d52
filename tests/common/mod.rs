#![allow(dead_code)]

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use imdb_tester::stage::staged_path;
use imdb_tester::{DirectoryChooser, Result, SelfUpdate, TestRunner, TesterError};
use tempfile::TempDir;

pub const CW1_SUITE: &str = "class ImdbSuiteTester { /* cw1 */ }\n";
pub const CW2_SUITE: &str = "class ImdbSuiteTester { /* cw2 spark */ }\n";

/// A tester checkout holding both suite variants, next to scratch project directories.
pub struct Fixture {
    root: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("tempdir");
        let tool = root.path().join("tester");
        fs::create_dir(&tool).unwrap();
        fs::write(tool.join("ImdbSuiteTester.cw1.scala"), CW1_SUITE).unwrap();
        fs::write(tool.join("ImdbSuiteTester.cw2.scala"), CW2_SUITE).unwrap();
        Self { root }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn tool_dir(&self) -> PathBuf {
        self.root.path().join("tester")
    }

    pub fn cache_file(&self) -> PathBuf {
        self.tool_dir().join(".cache")
    }

    /// A project with the full `src/test/scala/imdb` tree.
    pub fn project(&self, name: &str) -> PathBuf {
        let dir = self.root.path().join(name);
        fs::create_dir_all(dir.join("src/test/scala/imdb")).unwrap();
        dir
    }

    /// A directory that is not a project root.
    pub fn plain_dir(&self, name: &str) -> PathBuf {
        let dir = self.root.path().join(name);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    pub fn write_cache(&self, dir: &Path) {
        fs::write(self.cache_file(), dir.to_string_lossy().as_bytes()).unwrap();
    }

    pub fn read_cache(&self) -> Option<String> {
        fs::read_to_string(self.cache_file()).ok()
    }
}

#[derive(Default)]
pub struct NoUpdate;

impl SelfUpdate for NoUpdate {
    fn pull(&mut self) -> Result<()> {
        panic!("self-update should be disabled")
    }

    fn current_revision(&mut self) -> Result<String> {
        panic!("self-update should be disabled")
    }
}

pub struct FakeGit {
    pub revision: String,
    pub pulls: usize,
    pub offline: bool,
}

impl FakeGit {
    pub fn at(revision: &str) -> Self {
        Self {
            revision: revision.to_string(),
            pulls: 0,
            offline: false,
        }
    }
}

impl SelfUpdate for FakeGit {
    fn pull(&mut self) -> Result<()> {
        self.pulls += 1;
        if self.offline {
            return Err(TesterError::SelfUpdate("could not resolve host".to_string()));
        }
        Ok(())
    }

    fn current_revision(&mut self) -> Result<String> {
        Ok(self.revision.clone())
    }
}

/// Hands out scripted answers and counts how often it was asked.
pub struct ScriptedChooser {
    answers: VecDeque<Option<PathBuf>>,
    pub calls: usize,
}

impl ScriptedChooser {
    pub fn new(answers: impl IntoIterator<Item = Option<PathBuf>>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            calls: 0,
        }
    }

    pub fn never() -> Self {
        Self::new([])
    }
}

impl DirectoryChooser for ScriptedChooser {
    fn choose(&mut self) -> Result<Option<PathBuf>> {
        self.calls += 1;
        self.answers
            .pop_front()
            .ok_or_else(|| TesterError::Chooser("no more scripted answers".to_string()))
    }
}

/// Records what was staged at the moment the tests ran.
#[derive(Default)]
pub struct RecordingRunner {
    pub runs: Vec<(String, PathBuf)>,
    pub staged_contents: Vec<Option<String>>,
}

impl TestRunner for RecordingRunner {
    fn run(&mut self, command: &str, cwd: &Path) -> Result<()> {
        self.runs.push((command.to_string(), cwd.to_path_buf()));
        self.staged_contents.push(fs::read_to_string(staged_path(cwd)).ok());
        Ok(())
    }
}

/// Behaves as if the test executable could not be launched.
#[derive(Default)]
pub struct BrokenRunner;

impl TestRunner for BrokenRunner {
    fn run(&mut self, command: &str, _cwd: &Path) -> Result<()> {
        Err(TesterError::Launch {
            command: command.to_string(),
            reason: "No such file or directory".to_string(),
        })
    }
}
