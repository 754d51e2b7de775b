//! Data source identifier validated at configuration time

use std::fmt;
use std::path::{Path, PathBuf};

use crate::application::{ApplicationError, ApplicationResult};

/// Location of the room dimensions file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSource {
    raw: String,
    path: PathBuf,
}

impl DataSource {
    /// Validate a source identifier.
    ///
    /// Empty or whitespace-only identifiers fail with
    /// [`ApplicationError::InvalidDataSource`] before any read is attempted.
    /// `~`, `$VAR` and `${VAR}` are expanded.
    pub fn new(raw: &str) -> ApplicationResult<Self> {
        if raw.trim().is_empty() {
            return Err(ApplicationError::InvalidDataSource(
                "data source path must not be empty".into(),
            ));
        }
        Ok(Self {
            raw: raw.to_string(),
            path: PathBuf::from(expand_env_vars(raw)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Identifier as given by the user.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// Expand `~` and environment variables, leaving the input as-is on lookup failure.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn given_blank_identifier_when_new_then_invalid_data_source(#[case] raw: &str) {
        let err = DataSource::new(raw).unwrap_err();
        assert!(matches!(err, ApplicationError::InvalidDataSource(_)));
    }

    #[test]
    fn given_plain_path_when_new_then_kept_verbatim() {
        let source = DataSource::new("rooms/input.txt").unwrap();
        assert_eq!(source.path(), Path::new("rooms/input.txt"));
        assert_eq!(source.raw(), "rooms/input.txt");
    }

    #[test]
    fn given_unknown_variable_when_expanding_then_input_unchanged() {
        let raw = "$WALLCALC_SURELY_UNSET_VARIABLE/rooms.txt";
        assert_eq!(expand_env_vars(raw), raw);
    }
}
