//! Status lines on stderr, styled like Cargo's: a right-aligned bold label
//! followed by the message.
//!
//! ```text
//!    Resolving dukesoft/sample-game
//!     Resolved 4 packages in 3 passes
//! ```

use std::io::Write;

use console::Style;

const LABEL_WIDTH: usize = 12;

/// An action in progress or completed (green).
pub fn status(label: &str, message: &str) {
    emit(Style::new().green().bold(), label, message);
}

/// Informational notes, such as packages added to a lockfile (cyan).
pub fn status_info(label: &str, message: &str) {
    emit(Style::new().cyan().bold(), label, message);
}

/// Something the user should look at, such as a locked version changing (yellow).
pub fn status_warn(label: &str, message: &str) {
    emit(Style::new().yellow().bold(), label, message);
}

fn emit(style: Style, label: &str, message: &str) {
    let style = style.for_stderr();
    let _ = writeln!(
        std::io::stderr(),
        "{:>width$} {message}",
        style.apply_to(label),
        width = LABEL_WIDTH
    );
}
