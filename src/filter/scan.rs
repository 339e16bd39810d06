//! The line-scan loop and its two-state machine.

use std::io::{BufRead, Write};

use tracing::debug;

use super::exclude::ExcludeSet;
use super::marker::{self, MARKER_SCAN_LIMIT};
use crate::error::Result;

/// Whether the filter is currently emitting or suppressing lines.
///
/// Transitions are driven solely by marker lines: any structure marker
/// switches to `Passing`; a data marker switches to `Skipping` exactly when
/// its table is excluded. There are no section-end markers - a state holds
/// until the next marker of either kind or end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Lines are emitted.
    Passing,
    /// Inside an excluded table's data section; lines are read but dropped.
    Skipping,
}

/// Counters reported after a scan completes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    /// Lines consumed from the input.
    pub lines_read: u64,
    /// Lines written to the output.
    pub lines_emitted: u64,
    /// Data sections that were suppressed.
    pub data_sections_skipped: u64,
}

/// Streaming dump filter: one pass, line in, line out (or not).
///
/// The exclusion set is borrowed and the reader/writer are injected, so the
/// same filter runs against stdin/stdout in the binary and against
/// in-memory buffers in tests.
pub struct StreamFilter<'a> {
    exclude: &'a ExcludeSet,
    state: ScanState,
    stats: FilterStats,
}

impl<'a> StreamFilter<'a> {
    /// Create a filter over the given exclusion set, initially passing.
    pub fn new(exclude: &'a ExcludeSet) -> Self {
        Self {
            exclude,
            state: ScanState::Passing,
            stats: FilterStats::default(),
        }
    }

    /// Current suppression state.
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Apply the marker rules to one line and report whether it is emitted.
    ///
    /// Lines of [`MARKER_SCAN_LIMIT`] bytes or more are never inspected for
    /// markers; their emission follows the state as-is. For shorter lines
    /// both patterns are evaluated, structure first, and the line's own
    /// emission is judged against the state the markers leave behind - an
    /// excluded table's data header is itself suppressed.
    pub fn process_line(&mut self, line: &str) -> bool {
        if line.len() < MARKER_SCAN_LIMIT {
            if let Some(table) = marker::structure_table(line) {
                debug!(table, "structure section");
                self.state = ScanState::Passing;
            }

            if let Some(table) = marker::data_table(line) {
                if self.exclude.contains(table) {
                    debug!(table, "data section (skipping)");
                    self.stats.data_sections_skipped += 1;
                    self.state = ScanState::Skipping;
                } else {
                    debug!(table, "data section");
                    self.state = ScanState::Passing;
                }
            }
        }

        self.state == ScanState::Passing
    }

    /// Run the filter over `reader`, writing passing lines to `writer`.
    ///
    /// Every emitted line is terminated with a newline. A read error ends
    /// the stream the same way end-of-input does; whatever was scanned is
    /// flushed in full before returning.
    pub fn run<R: BufRead, W: Write>(&mut self, reader: R, mut writer: W) -> Result<FilterStats> {
        for line in reader.lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    debug!(error = %e, "read error, treating as end of stream");
                    break;
                }
            };

            self.stats.lines_read += 1;
            if self.process_line(&line) {
                writer.write_all(line.as_bytes())?;
                writer.write_all(b"\n")?;
                self.stats.lines_emitted += 1;
            }
        }

        writer.flush()?;

        debug!(
            lines_read = self.stats.lines_read,
            lines_emitted = self.stats.lines_emitted,
            data_sections_skipped = self.stats.data_sections_skipped,
            "scan complete"
        );
        Ok(self.stats)
    }
}
