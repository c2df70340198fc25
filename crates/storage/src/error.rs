use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    #[error("Unsupported sport modality: {0}")]
    UnsupportedSport(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn not_found(entity: &str, id: impl std::fmt::Display) -> Self {
        StorageError::NotFound(format!("{} {}", entity, id))
    }

    /// Short name of the variant, surfaced as the developer message of error bodies
    pub fn kind(&self) -> &'static str {
        match self {
            StorageError::Database(_) => "DatabaseError",
            StorageError::Migration(_) => "MigrationError",
            StorageError::NotFound(_) => "NotFoundException",
            StorageError::ConstraintViolation(_) => "ConflictException",
            StorageError::Unprocessable(_) => "UnprocessableEntityException",
            StorageError::UnsupportedSport(_) => "UnsupportedModalityException",
        }
    }

    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23505")
        )
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23503")
        )
    }

    /// Turn unique/foreign key violations into a `ConstraintViolation` carrying `message`
    pub fn on_constraint(self, message: &str) -> Self {
        if self.is_unique_violation() || self.is_foreign_key_violation() {
            StorageError::ConstraintViolation(message.to_string())
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity_and_id() {
        let err = StorageError::not_found("Team", 42);
        assert_eq!(err.to_string(), "Team 42 not found");
        assert_eq!(err.kind(), "NotFoundException");
    }

    #[test]
    fn on_constraint_leaves_other_errors_alone() {
        let err = StorageError::Unprocessable("nope".into()).on_constraint("conflict");
        assert!(matches!(err, StorageError::Unprocessable(_)));

        let err = StorageError::Database(sqlx::Error::RowNotFound).on_constraint("conflict");
        assert!(matches!(err, StorageError::Database(_)));
    }
}
