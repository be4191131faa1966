//! Test doubles for the git and diagnostics seams.

use std::cell::RefCell;
use std::io;
use std::path::Path;

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::git::{GitOutput, GitRunner};

/// Canned outcome of a single git invocation.
#[derive(Debug, Clone)]
pub enum Reply {
    Launch,
    Exit(i32, String),
}

impl Reply {
    pub fn exit(code: i32, stdout: &str) -> Self {
        Self::Exit(code, stdout.to_string())
    }

    fn to_result(&self) -> io::Result<GitOutput> {
        match self {
            Self::Launch => Err(io::Error::new(io::ErrorKind::NotFound, "git not found")),
            Self::Exit(code, stdout) => Ok(GitOutput {
                code: Some(*code),
                stdout: stdout.clone(),
            }),
        }
    }
}

/// Answers `git log` and `git cat-file` with fixed replies and records every call.
pub struct FakeGit {
    log: Reply,
    cat_file: Reply,
    calls: RefCell<Vec<Vec<String>>>,
}

impl FakeGit {
    pub fn new(log: Reply, cat_file: Reply) -> Self {
        Self {
            log,
            cat_file,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }
}

impl GitRunner for FakeGit {
    fn run(&self, _dir: &Path, args: &[String]) -> io::Result<GitOutput> {
        self.calls.borrow_mut().push(args.to_vec());
        match args.first().map(String::as_str) {
            Some("log") => self.log.to_result(),
            Some("cat-file") => self.cat_file.to_result(),
            other => panic!("unexpected git subcommand {other:?}"),
        }
    }
}

/// Collects diagnostics as strings.
#[derive(Default)]
pub struct RecordingSink {
    messages: RefCell<Vec<String>>,
}

impl RecordingSink {
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, diagnostic: &Diagnostic<'_>) {
        let message = match diagnostic {
            Diagnostic::GitFailed(error) => error.to_string(),
            Diagnostic::Unresolved { source_dir } => {
                format!("unresolved in {}", source_dir.display())
            }
        };
        self.messages.borrow_mut().push(message);
    }
}
