//! Command-line argument definitions.

use clap::Parser;

use crate::error::ConfigError;
use crate::filter::ExcludeSet;

/// Strip excluded tables' data from a mysqldump stream.
///
/// Reads the dump on standard input (which must be a pipe) and writes the
/// filtered dump to standard output:
///
///   zcat somedb.sql.gz | dumpcut -e=logs,logs_extra | mysql -u root -p somedb
#[derive(Parser, Debug)]
#[command(name = "dumpcut")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Comma-separated table names whose data sections are dropped
    ///
    /// Structure definitions always pass through; only the row data of the
    /// listed tables is removed. Names are matched exactly.
    #[arg(short = 'e', long = "exclude", value_name = "TABLES")]
    pub exclude: Option<String>,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Build the exclusion set from `-e`, rejecting an absent or empty list.
    ///
    /// Validation happens here rather than through clap's `required` so the
    /// failure exits with status 1, not clap's usage-error status.
    pub fn exclude_set(&self) -> Result<ExcludeSet, ConfigError> {
        match self.exclude.as_deref() {
            None | Some("") => Err(ConfigError::MissingExclusionList),
            Some(list) => Ok(ExcludeSet::from_list(list)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test 1: The -e list parses into the exclusion set
    #[test]
    fn test_exclude_list_parses() {
        let args = Args::try_parse_from(["dumpcut", "-e", "logs,logs_extra"]).unwrap();
        let set = args.exclude_set().unwrap();

        assert!(set.contains("logs"));
        assert!(set.contains("logs_extra"));
        assert_eq!(set.len(), 2);
    }

    // Test 2: The -e=list spelling works too
    #[test]
    fn test_exclude_equals_spelling() {
        let args = Args::try_parse_from(["dumpcut", "-e=logs"]).unwrap();
        assert_eq!(args.exclude.as_deref(), Some("logs"));
    }

    // Test 3: Missing -e is a configuration error
    #[test]
    fn test_missing_exclude_is_rejected() {
        let args = Args::try_parse_from(["dumpcut"]).unwrap();
        assert!(matches!(
            args.exclude_set(),
            Err(ConfigError::MissingExclusionList)
        ));
    }

    // Test 4: An empty -e value is rejected the same way
    #[test]
    fn test_empty_exclude_is_rejected() {
        let args = Args::try_parse_from(["dumpcut", "-e", ""]).unwrap();
        assert!(matches!(
            args.exclude_set(),
            Err(ConfigError::MissingExclusionList)
        ));
    }

    // Test 5: Verbosity is a count
    #[test]
    fn test_verbose_count() {
        let args = Args::try_parse_from(["dumpcut", "-e", "t", "-vv"]).unwrap();
        assert_eq!(args.verbose, 2);
    }
}
