//! `wish`, a minimal Unix shell.
//!
//! The shell reads command lines interactively or from a batch script,
//! parses each into a command name, arguments and an optional output
//! redirection target, resolves the command against a configurable search
//! path and runs it as a child process. Commands separated by `&` on one
//! line run in parallel; the shell waits for all of them before reading
//! the next line.
//!
//! The main entry point is [`Interpreter`]. The public modules [`parser`],
//! [`path`] and [`builtin`] expose the pieces it is built from.

pub mod builtin;
pub mod error;
mod external;
mod interpreter;
pub mod parser;
pub mod path;

pub use interpreter::Interpreter;
