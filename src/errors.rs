//! Error taxonomy of the data layer.
//!
//! Repos classify diesel errors into this enum and wrap them with failure
//! context; services add their own context on top. Image resolution failure
//! is deliberately not represented here — it degrades to an empty string.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use validator::ValidationErrors;

#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "Not found")]
    NotFound,
    #[fail(display = "Uniqueness violation: {}", _0)]
    Uniqueness(String),
    #[fail(display = "Referential violation: {}", _0)]
    Referential(String),
    #[fail(display = "Validation error: {}", _0)]
    Validate(ValidationErrors),
    #[fail(display = "Parse error: {}", _0)]
    Parse(String),
    #[fail(display = "Database error: {}", _0)]
    Database(String),
    #[fail(display = "Connection error")]
    Connection,
}

impl From<DieselError> for Error {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => Error::Uniqueness(info.message().to_string()),
            DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => Error::Referential(info.message().to_string()),
            DieselError::NotFound => Error::NotFound,
            err => Error::Database(format!("{}", err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    use super::Error;

    #[test]
    fn unique_violation_is_classified_as_uniqueness() {
        let err = DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new("duplicate key value violates unique constraint \"industries_name_key\"".to_string()),
        );
        match Error::from(err) {
            Error::Uniqueness(_) => {}
            other => panic!("expected uniqueness violation, got {:?}", other),
        }
    }

    #[test]
    fn foreign_key_violation_is_classified_as_referential() {
        let err = DieselError::DatabaseError(
            DatabaseErrorKind::ForeignKeyViolation,
            Box::new("insert or update violates foreign key constraint".to_string()),
        );
        match Error::from(err) {
            Error::Referential(_) => {}
            other => panic!("expected referential violation, got {:?}", other),
        }
    }

    #[test]
    fn missing_row_is_classified_as_not_found() {
        match Error::from(DieselError::NotFound) {
            Error::NotFound => {}
            other => panic!("expected not found, got {:?}", other),
        }
    }
}
