use argh::FromArgs;
use std::path::PathBuf;
use wish::{Interpreter, error};

#[derive(FromArgs)]
/// A minimal Unix shell with interactive and batch modes.
struct Args {
    /// script to run in batch mode; reads standard input when omitted
    #[argh(positional)]
    script: Option<PathBuf>,
}

fn main() {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let argv: Vec<&str> = argv.iter().map(String::as_str).collect();
    let args = match Args::from_args(&["wish"], &argv) {
        Ok(args) => args,
        Err(exit) if exit.status.is_ok() => {
            println!("{}", exit.output);
            std::process::exit(0);
        }
        Err(_) => {
            error::report();
            std::process::exit(1);
        }
    };

    let mut shell = Interpreter::default();
    let status = match &args.script {
        Some(script) => shell.run_batch(script),
        None => shell.repl(),
    };
    std::process::exit(status);
}
