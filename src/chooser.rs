//! Interactive selection of the project directory.

use std::io::{self, BufRead, Read, Write};
use std::path::PathBuf;

use crate::error::{Result, TesterError};

/// Asks the user for a project directory.
pub trait DirectoryChooser {
    /// `Ok(None)` means the user dismissed the prompt without choosing.
    fn choose(&mut self) -> Result<Option<PathBuf>>;
}

impl<T: DirectoryChooser + ?Sized> DirectoryChooser for Box<T> {
    fn choose(&mut self) -> Result<Option<PathBuf>> {
        (**self).choose()
    }
}

const PROMPT: &str = "Project directory (must contain src/): ";

/// Line-based prompt. An empty answer counts as a dismissal.
pub struct TerminalChooser<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalChooser<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl TerminalChooser<io::BufReader<Box<dyn Read>>, io::Stderr> {
    /// Prompt on stderr, answer on stdin.
    ///
    /// Input after the answer line is left unread for the test command.
    pub fn stdio() -> io::Result<Self> {
        let input = io::BufReader::with_capacity(1, answer_source()?);
        Ok(Self::new(input, io::stderr()))
    }
}

// A separate handle on fd 0, bypassing the buffer behind `io::stdin()`
#[cfg(unix)]
fn answer_source() -> io::Result<Box<dyn Read>> {
    use std::os::fd::AsFd;

    let fd = io::stdin().as_fd().try_clone_to_owned()?;
    Ok(Box::new(std::fs::File::from(fd)))
}

// TODO: duplicate the stdin handle on Windows too; `io::stdin()` buffers past the answer line
#[cfg(not(unix))]
fn answer_source() -> io::Result<Box<dyn Read>> {
    Ok(Box::new(io::stdin()))
}

impl<R: BufRead, W: Write> DirectoryChooser for TerminalChooser<R, W> {
    fn choose(&mut self) -> Result<Option<PathBuf>> {
        write!(self.output, "{PROMPT}")
            .and_then(|_| self.output.flush())
            .map_err(|e| TesterError::Chooser(e.to_string()))?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| TesterError::Chooser(e.to_string()))?;
        // EOF can never yield an answer; retrying would spin
        if read == 0 {
            return Err(TesterError::Chooser(
                "input closed before a directory was chosen".to_string(),
            ));
        }
        let answer = line.trim();
        if answer.is_empty() {
            Ok(None)
        } else {
            Ok(Some(PathBuf::from(answer)))
        }
    }
}

/// Native folder-picker dialog.
#[cfg(feature = "dialog")]
#[derive(Debug, Default)]
pub struct DialogChooser;

#[cfg(feature = "dialog")]
impl DirectoryChooser for DialogChooser {
    fn choose(&mut self) -> Result<Option<PathBuf>> {
        Ok(rfd::FileDialog::new()
            .set_title("Select your project directory")
            .pick_folder())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn chooser(input: &str) -> TerminalChooser<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalChooser::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn answers_are_read_line_by_line() {
        let mut c = chooser("/first\n  /second  \n");
        assert_eq!(c.choose().unwrap(), Some(PathBuf::from("/first")));
        assert_eq!(c.choose().unwrap(), Some(PathBuf::from("/second")));
        let prompt = String::from_utf8(c.output.clone()).unwrap();
        assert_eq!(prompt.matches(PROMPT).count(), 2);
    }

    #[test]
    fn blank_line_is_a_dismissal() {
        let mut c = chooser("\n");
        assert_eq!(c.choose().unwrap(), None);
    }

    #[test]
    fn stdin_after_the_answer_is_not_consumed() {
        let input = io::BufReader::with_capacity(1, Cursor::new(b"/project\nfor sbt\n".to_vec()));
        let mut c = TerminalChooser::new(input, Vec::new());
        assert_eq!(c.choose().unwrap(), Some(PathBuf::from("/project")));
        let mut rest = String::new();
        c.input.into_inner().read_to_string(&mut rest).unwrap();
        assert_eq!(rest, "for sbt\n");
    }

    #[test]
    fn eof_is_an_error() {
        let mut c = chooser("");
        assert!(matches!(c.choose(), Err(TesterError::Chooser(_))));
    }
}
