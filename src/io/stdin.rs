//! Pipe detection for standard input.

use crate::error::InputError;

/// How standard input is connected to the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// A named stream (FIFO) - the expected case.
    Pipe,
    /// An interactive terminal.
    Terminal,
    /// Anything else: a regular-file redirect, a socket, /dev/null.
    Other,
}

/// Query how standard input is connected.
///
/// The answer comes from the file type behind the stdin descriptor. Failing
/// to stat it is an unexpected-environment condition, reported as
/// [`InputError::ModeQuery`] and never retried.
#[cfg(unix)]
pub fn stdin_mode() -> Result<InputMode, InputError> {
    use std::io::IsTerminal;
    use std::os::unix::fs::FileTypeExt;

    let meta =
        std::fs::metadata("/dev/stdin").map_err(|source| InputError::ModeQuery { source })?;

    if meta.file_type().is_fifo() {
        Ok(InputMode::Pipe)
    } else if std::io::stdin().is_terminal() {
        Ok(InputMode::Terminal)
    } else {
        Ok(InputMode::Other)
    }
}

/// Query how standard input is connected.
///
/// Non-unix platforms have no named-stream file type to inspect; anything
/// that is not a terminal is accepted as a stream.
#[cfg(not(unix))]
pub fn stdin_mode() -> Result<InputMode, InputError> {
    use std::io::IsTerminal;

    if std::io::stdin().is_terminal() {
        Ok(InputMode::Terminal)
    } else {
        Ok(InputMode::Pipe)
    }
}

/// Refuse to run unless standard input is a pipe.
pub fn ensure_piped_stdin() -> Result<(), InputError> {
    match stdin_mode()? {
        InputMode::Pipe => Ok(()),
        InputMode::Terminal | InputMode::Other => Err(InputError::NotAPipe),
    }
}
