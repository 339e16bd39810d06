//! The dump filtering engine.
//!
//! This module implements the single pass over the dump stream:
//!
//! - `exclude` - the set of table names whose data sections are dropped
//! - `marker` - recognition of the two section-start header phrases
//! - `scan` - the line-scan loop and its two-state machine
//!
//! ## Design
//!
//! The filter is a pure stream transducer: it owns nothing but a two-state
//! flag, borrows the exclusion set, and reads/writes through injected
//! `BufRead`/`Write` handles, so the whole pipeline is testable against
//! in-memory buffers.

mod exclude;
mod marker;
mod scan;

pub use exclude::ExcludeSet;
pub use marker::{data_table, structure_table, MARKER_SCAN_LIMIT};
pub use scan::{FilterStats, ScanState, StreamFilter};
