//! Orders service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

/// `numeric_value_out_of_range`, raised when an accumulated quantity overflows `INTEGER`.
const NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("order not found")]
    NotFound,

    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("promo code is not valid today")]
    InvalidPromoCode,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for OrdersServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        if error
            .as_database_error()
            .and_then(DatabaseError::code)
            .is_some_and(|code| code == NUMERIC_VALUE_OUT_OF_RANGE)
        {
            return Self::InvalidData;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::UniqueViolation | ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_row_maps_to_not_found() {
        assert!(matches!(
            OrdersServiceError::from(Error::RowNotFound),
            OrdersServiceError::NotFound
        ));
    }

    #[test]
    fn pool_errors_stay_storage_errors() {
        assert!(matches!(
            OrdersServiceError::from(Error::PoolTimedOut),
            OrdersServiceError::Sql(_)
        ));
    }
}
