//! Commands the shell executes in-process instead of spawning a program.

use crate::path::SearchPath;
use anyhow::{Context, Result, bail};
use std::env;

/// The shell's built-in commands, recognized by exact, case-sensitive
/// first-token match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    /// `path [dir ...]` — clear or replace the search path.
    Path,
    /// `cd <dir>` — change the shell's working directory.
    Cd,
    /// `exit` — terminate the shell with status 0.
    Exit,
}

impl Builtin {
    /// Looks a command name up in the built-in table.
    pub fn lookup(name: &str) -> Option<Builtin> {
        match name {
            "path" => Some(Builtin::Path),
            "cd" => Some(Builtin::Cd),
            "exit" => Some(Builtin::Exit),
            _ => None,
        }
    }

    /// Runs the built-in in the shell process.
    ///
    /// An `Err` means the caller should print the usual error report;
    /// built-ins never write anything themselves. `exit` with no
    /// arguments does not return.
    pub fn run(self, args: &[String], search_path: &mut SearchPath) -> Result<()> {
        match self {
            Builtin::Path => {
                if args.is_empty() {
                    search_path.clear();
                } else {
                    search_path.replace(args.iter().cloned());
                }
                Ok(())
            }
            Builtin::Cd => {
                let [dir] = args else {
                    bail!("cd takes exactly one argument");
                };
                env::set_current_dir(dir).with_context(|| format!("cd: cannot enter {dir}"))
            }
            Builtin::Exit => {
                if !args.is_empty() {
                    bail!("exit takes no arguments");
                }
                // Still-running siblings on the same line are deliberately
                // not awaited.
                std::process::exit(0)
            }
        }
    }
}
