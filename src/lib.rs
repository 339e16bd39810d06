//! dumpcut - Strip excluded tables' data from a mysqldump stream.
//!
//! This library provides a line-oriented filter for textual database dumps:
//! the data sections of a user-chosen set of tables are removed while every
//! structure definition and all other tables' data pass through unchanged,
//! in order, in a single pass.
//!
//! # Example
//!
//! ```no_run
//! use std::io::{self, BufWriter};
//!
//! use dumpcut::filter::{ExcludeSet, StreamFilter};
//!
//! fn main() -> dumpcut::Result<()> {
//!     let exclude = ExcludeSet::from_list("logs,sessions");
//!     let stdin = io::stdin();
//!     let stdout = io::stdout();
//!
//!     let mut filter = StreamFilter::new(&exclude);
//!     let stats = filter.run(stdin.lock(), BufWriter::new(stdout.lock()))?;
//!     eprintln!("kept {} of {} lines", stats.lines_emitted, stats.lines_read);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod error;
pub mod filter;
pub mod io;

pub use error::{Error, Result};
