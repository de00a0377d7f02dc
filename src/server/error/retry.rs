use sea_orm::DbErr;

use super::Error;

/// Strategy for handling errors in a retry context
#[derive(Debug, PartialEq, Eq)]
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff
    Retry,
    /// Failed permanently
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            Self::DbErr(db_err) => match db_err {
                // Connection errors - transient, should retry
                DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Retry,
                DbErr::Conn(_) => ErrorRetryStrategy::Retry,

                // A concurrent writer inserted the same natural key first
                _ if self.is_integrity_violation() => ErrorRetryStrategy::Retry,

                _ => ErrorRetryStrategy::Fail,
            },

            // Bad input - retrying yields the same result
            Self::ValidationError(_) => ErrorRetryStrategy::Fail,
            Self::ResolutionError(_) => ErrorRetryStrategy::Fail,
            Self::GenerateError(_) => ErrorRetryStrategy::Fail,
            Self::FileError(_) => ErrorRetryStrategy::Fail,

            Self::ConfigError(_) => ErrorRetryStrategy::Fail,
            Self::IoError(_) => ErrorRetryStrategy::Fail,
        }
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DbErr, RuntimeErr};

    use super::*;
    use crate::server::error::validation::ValidationError;

    /// Expect connection failures to be retried
    #[test]
    fn retries_connection_errors() {
        let err = Error::DbErr(DbErr::Conn(RuntimeErr::Internal("refused".to_string())));

        assert_eq!(err.to_retry_strategy(), ErrorRetryStrategy::Retry);
    }

    /// Expect validation failures to fail permanently
    #[test]
    fn fails_validation_errors() {
        let err = Error::from(ValidationError::GameSeason(1800));

        assert_eq!(err.to_retry_strategy(), ErrorRetryStrategy::Fail);
    }

    /// Expect generic query errors to fail permanently
    #[test]
    fn fails_query_errors() {
        let err = Error::DbErr(DbErr::Custom("syntax".to_string()));

        assert_eq!(err.to_retry_strategy(), ErrorRetryStrategy::Fail);
    }
}
