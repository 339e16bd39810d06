//! Standard-input plumbing.
//!
//! The dump always arrives on standard input and must come from a pipe;
//! reading from an interactive terminal (or a plain file redirect) is
//! refused before any input is consumed.

mod stdin;

pub use stdin::{ensure_piped_stdin, stdin_mode, InputMode};
