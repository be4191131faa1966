use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use thiserror::Error;

/// Exit status and captured stdout of one git invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitOutput {
    /// `None` when the process was killed by a signal.
    pub code: Option<i32>,
    pub stdout: String,
}

impl GitOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs git subcommands. `Err` means the process could not be started at all.
pub trait GitRunner {
    fn run(&self, dir: &Path, args: &[String]) -> io::Result<GitOutput>;
}

/// Invokes the `git` found on `PATH`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemGit;

impl GitRunner for SystemGit {
    fn run(&self, dir: &Path, args: &[String]) -> io::Result<GitOutput> {
        let output = Command::new("git")
            .args(args)
            .current_dir(dir)
            .stdin(Stdio::null())
            .output()?;
        Ok(GitOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }
}

#[derive(Debug, Error)]
pub enum GitError {
    #[error("command `git {command}` could not be started: {source}")]
    Launch { command: String, source: io::Error },

    #[error("command `git {command}` failed: rc={code}, output={output:?}")]
    Status {
        command: String,
        /// -1 when the process died from a signal.
        code: i32,
        output: String,
    },
}

impl GitError {
    pub(crate) fn launch(args: &[String], source: io::Error) -> Self {
        Self::Launch {
            command: args.join(" "),
            source,
        }
    }

    pub(crate) fn status(args: &[String], output: &GitOutput) -> Self {
        Self::Status {
            command: args.join(" "),
            code: output.code.unwrap_or(-1),
            output: output.stdout.trim().to_string(),
        }
    }
}
