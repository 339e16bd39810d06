//! Section-start marker recognition.
//!
//! mysqldump writes a comment header before each table's sections:
//!
//! ```text
//! -- Table structure for table `users`
//! -- Dumping data for table `users`
//! ```
//!
//! Only these two phrases are interpreted; the rest of the dump is opaque
//! text. Matching is a substring search within a single line, so a phrase
//! split across lines is never recognized.

use once_cell::sync::Lazy;
use regex::Regex;

/// Lines at or above this byte length are never inspected for markers.
///
/// Marker lines are always short; anything longer is bulk row data.
pub const MARKER_SCAN_LIMIT: usize = 100;

static STRUCTURE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Table structure for table `([^`]+)`").unwrap());

static DATA: Lazy<Regex> = Lazy::new(|| Regex::new(r"Dumping data for table `([^`]+)`").unwrap());

/// Table name from a structure-section header, if this line is one.
pub fn structure_table(line: &str) -> Option<&str> {
    STRUCTURE
        .captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Table name from a data-section header, if this line is one.
pub fn data_table(line: &str) -> Option<&str> {
    DATA.captures(line).and_then(|c| c.get(1)).map(|m| m.as_str())
}
