//! The set of tables whose data sections are dropped.

use std::collections::HashSet;

/// Table names whose data sections are removed from the stream.
///
/// Built once at startup and immutable afterwards; membership is the only
/// query the scan loop performs. Names are compared by exact string
/// equality - no case folding, trimming, or quote stripping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExcludeSet {
    tables: HashSet<String>,
}

impl ExcludeSet {
    /// Build the set from a comma-separated list of table names.
    ///
    /// Duplicate names collapse. Consecutive commas produce a literal
    /// empty-string member; it is carried along like any other name.
    pub fn from_list(list: &str) -> Self {
        list.split(',').map(str::to_owned).collect()
    }

    /// Exact-equality membership test.
    pub fn contains(&self, table: &str) -> bool {
        self.tables.contains(table)
    }

    /// Number of distinct names in the set.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// True when no names were given.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl FromIterator<String> for ExcludeSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            tables: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_list_basic() {
        let set = ExcludeSet::from_list("logs,sessions");
        assert!(set.contains("logs"));
        assert!(set.contains("sessions"));
        assert!(!set.contains("users"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_duplicates_collapse() {
        let set = ExcludeSet::from_list("logs,logs,logs");
        assert_eq!(set.len(), 1);
        assert!(set.contains("logs"));
    }

    #[test]
    fn test_consecutive_commas_keep_empty_member() {
        let set = ExcludeSet::from_list("logs,,sessions");
        assert_eq!(set.len(), 3);
        assert!(set.contains(""));
    }

    #[test]
    fn test_matching_is_exact() {
        let set = ExcludeSet::from_list("Logs");
        assert!(set.contains("Logs"));
        assert!(!set.contains("logs"));
        assert!(!set.contains(" Logs"));
        assert!(!set.contains("`Logs`"));
    }
}
