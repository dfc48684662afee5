//! MySQL-specific database implementations
//!
//! MySQL implementations of the core repository traits using SQLx.

pub mod message_repository_impl;
pub mod user_repository_impl;
pub mod verification_repository_impl;

pub use message_repository_impl::MySqlMessageRepository;
pub use user_repository_impl::MySqlUserRepository;
pub use verification_repository_impl::MySqlVerificationRepository;

use mv_core::errors::DomainError;

/// Translate a SQLx error into a domain error.
///
/// Unique-key violations become `Conflict` carrying `conflict_message`;
/// everything else is `Internal`.
pub(crate) fn map_sqlx_error(context: &str, conflict_message: &str, err: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return DomainError::conflict(conflict_message);
        }
    }

    tracing::error!(error = %err, context, event = "db_query_failed", "Database query failed");
    DomainError::internal(format!("{}: {}", context, err))
}

/// Read a column, mapping failures into `DomainError::Internal`
pub(crate) fn column<'r, T>(row: &'r sqlx::mysql::MySqlRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::MySql> + sqlx::Type<sqlx::MySql>,
{
    sqlx::Row::try_get(row, name)
        .map_err(|e| DomainError::internal(format!("Failed to get {}: {}", name, e)))
}

pub(crate) fn parse_uuid(value: &str) -> Result<uuid::Uuid, DomainError> {
    uuid::Uuid::parse_str(value).map_err(|e| DomainError::internal(format!("Invalid UUID: {}", e)))
}
