//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::exitcode;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("{0}")]
    Usage(String),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::from(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => exitcode::USAGE,
            CliError::Infra(e) => match e {
                InfraError::Io { .. } => exitcode::IOERR,
                InfraError::Application(app) => match app {
                    ApplicationError::Domain(_) => exitcode::DATAERR,
                    ApplicationError::InvalidDataSource(_) | ApplicationError::DataSource { .. } => {
                        exitcode::NOINPUT
                    }
                    ApplicationError::Config { .. } => exitcode::CONFIG,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn given_parse_error_when_exit_code_then_dataerr() {
        let err = CliError::from(ApplicationError::Domain(DomainError::RoomParse {
            line: "axbxc".into(),
            delimiter: "x".into(),
            field: "a".into(),
        }));
        assert_eq!(err.exit_code(), exitcode::DATAERR);
    }

    #[test]
    fn given_invalid_delimiter_when_exit_code_then_dataerr() {
        let err = CliError::from(ApplicationError::Domain(DomainError::InvalidDelimiter {
            delimiter: "(".into(),
            reason: "unclosed group".into(),
        }));
        assert_eq!(err.exit_code(), exitcode::DATAERR);
    }

    #[test]
    fn given_unreadable_source_when_exit_code_then_noinput() {
        let err = CliError::from(ApplicationError::DataSource {
            source_id: "missing.txt".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        });
        assert_eq!(err.exit_code(), exitcode::NOINPUT);
    }

    #[test]
    fn given_usage_error_when_exit_code_then_usage() {
        assert_eq!(CliError::Usage("x".into()).exit_code(), exitcode::USAGE);
    }

    #[test]
    fn given_config_error_when_exit_code_then_config() {
        let err = CliError::from(ApplicationError::Config {
            message: "bad".into(),
        });
        assert_eq!(err.exit_code(), exitcode::CONFIG);
    }
}
