//! The shell's single user-visible error report.

use std::io::Write;

/// Every recoverable failure surfaces to the user as this exact message.
pub const MESSAGE: &str = "An error has occurred\n";

/// Writes the generic error message to standard error.
///
/// The shell never differentiates failures for the user; callers decide
/// whether to keep going or to exit afterwards.
pub fn report() {
    let _ = std::io::stderr().write_all(MESSAGE.as_bytes());
}
