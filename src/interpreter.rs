//! The read-eval loop: splitting input lines into parallel segments,
//! dispatching built-ins and external commands, and reaping children.

use crate::builtin::Builtin;
use crate::error;
use crate::external;
use crate::parser::{self, Command};
use crate::path::SearchPath;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::process::Child;

/// Prompt shown before each interactive read.
pub const PROMPT: &str = "wish> ";

/// The shell proper: owns the search path and drives command execution.
pub struct Interpreter {
    search_path: SearchPath,
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter::new(SearchPath::default())
    }
}

impl Interpreter {
    /// Creates a shell with the given initial search path.
    pub fn new(search_path: SearchPath) -> Self {
        Self { search_path }
    }

    /// Read access to the search path, mainly for inspection in tests.
    pub fn search_path(&self) -> &SearchPath {
        &self.search_path
    }

    /// Executes one input line.
    ///
    /// Segments separated by `&` are parsed and dispatched strictly left
    /// to right. Built-ins complete synchronously before the next segment
    /// starts, so a `path` earlier in the line affects resolution of later
    /// segments. External commands run concurrently; this method returns
    /// only after every child spawned for the line has terminated.
    pub fn run_line(&mut self, line: &str) {
        let mut children: Vec<Child> = Vec::new();
        for segment in line.split('&') {
            let command = parser::parse(segment);
            if let Some(child) = self.execute(&command) {
                children.push(child);
            }
        }
        for mut child in children {
            // Exit statuses are discarded; the line is done once every
            // child has been reaped.
            let _ = child.wait();
        }
    }

    /// Dispatches one parsed command. Returns the spawned child for
    /// external commands so the caller can wait on it.
    fn execute(&mut self, command: &Command) -> Option<Child> {
        if let Some(builtin) = Builtin::lookup(&command.name) {
            if builtin.run(&command.args, &mut self.search_path).is_err() {
                error::report();
            }
            return None;
        }

        if command.bad_syntax {
            error::report();
        }
        if command.name.is_empty() {
            // Blank segment: nothing to run, nothing to report.
            return None;
        }

        let Some(executable) = self.search_path.resolve(&command.name) else {
            error::report();
            return None;
        };
        match external::spawn(&executable, command) {
            Ok(child) => Some(child),
            Err(_) => {
                error::report();
                None
            }
        }
    }

    /// Interactive mode: prompts, reads and runs lines until end of input.
    ///
    /// Returns the process exit status.
    pub fn repl(&mut self) -> i32 {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(_) => {
                error::report();
                return 1;
            }
        };
        loop {
            match rl.readline(PROMPT) {
                Ok(line) => {
                    let _ = rl.add_history_entry(line.as_str());
                    self.run_line(&line);
                }
                Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => return 0,
                Err(_) => {
                    error::report();
                    return 1;
                }
            }
        }
    }

    /// Batch mode: runs every line of `script` without prompting.
    ///
    /// Returns the process exit status; a script that cannot be opened is
    /// a startup error.
    pub fn run_batch(&mut self, script: &Path) -> i32 {
        let file = match File::open(script) {
            Ok(file) => file,
            Err(_) => {
                error::report();
                return 1;
            }
        };
        for line in BufReader::new(file).lines() {
            match line {
                Ok(line) => self.run_line(&line),
                Err(_) => break,
            }
        }
        0
    }
}
