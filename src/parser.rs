//! Parsing of a single command segment into its name, arguments and
//! optional output redirection target.

/// One parsed command segment.
///
/// `name` may legitimately be empty: a blank or whitespace-only segment
/// parses to an empty command that the interpreter silently ignores.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Command {
    pub name: String,
    pub args: Vec<String>,
    /// File that receives the command's stdout and stderr, when requested.
    pub redirect: Option<String>,
    /// Set when the segment violates the redirection syntax. The command
    /// must then be treated as an error regardless of the other fields.
    pub bad_syntax: bool,
}

impl Command {
    /// Invalid commands carry nothing but the flag, so an invalid segment
    /// can never match a built-in by name.
    fn invalid() -> Self {
        Command {
            bad_syntax: true,
            ..Command::default()
        }
    }
}

/// Splits a segment into the command name, its arguments and an optional
/// redirection target.
///
/// Syntax rules enforced here:
/// - at most one `>` per segment;
/// - exactly one whitespace-delimited token after the `>`;
/// - a segment containing `>` must also name a command.
///
/// A segment with no `>` and no tokens is a valid, empty command.
pub fn parse(segment: &str) -> Command {
    let (before, after) = match segment.find('>') {
        Some(pos) => (&segment[..pos], Some(&segment[pos + 1..])),
        None => (segment, None),
    };

    let mut redirect = None;
    if let Some(after) = after {
        if after.contains('>') {
            return Command::invalid();
        }
        let mut targets = after.split_whitespace();
        match targets.next() {
            Some(target) => redirect = Some(target.to_string()),
            None => return Command::invalid(),
        }
        if targets.next().is_some() {
            return Command::invalid();
        }
    }

    let mut words = before.split_whitespace();
    let name = words.next().unwrap_or_default().to_string();
    let args: Vec<String> = words.map(str::to_string).collect();

    if name.is_empty() && redirect.is_some() {
        return Command::invalid();
    }

    Command {
        name,
        args,
        redirect,
        bad_syntax: false,
    }
}
