mod product;
mod supplier;
mod transaction;
mod user;

pub use self::product::{ProductCommandRepository, ProductQueryRepository};
pub use self::supplier::SupplierRepository;
pub use self::transaction::TransactionQueryRepository;
pub use self::user::UserRepository;

use crate::errors::RepositoryError;
use sqlx::Error as SqlxError;

/// Translates Postgres constraint violations into domain errors; anything
/// else passes through as a database error.
pub(crate) fn map_constraint(err: SqlxError) -> RepositoryError {
    if let Some(db_err) = err.as_database_error() {
        match db_err.code().as_deref() {
            Some("23505") => return RepositoryError::AlreadyExists(db_err.message().to_string()),
            Some("23503") => return RepositoryError::ForeignKey(db_err.message().to_string()),
            _ => {}
        }
    }
    RepositoryError::Sqlx(err)
}
