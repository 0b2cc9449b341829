/// Error types for the social data layer
use sqlx::error::ErrorKind;
use thiserror::Error;

/// SQLSTATE raised when a value exceeds its VARCHAR length
const STRING_DATA_RIGHT_TRUNCATION: &str = "22001";

#[derive(Error, Debug)]
pub enum StoreError {
    /// Unique, not-null or check constraint rejected the write, or the input
    /// failed validation before reaching the database.
    #[error("Constraint violation ({constraint}): {message}")]
    ConstraintViolation { constraint: String, message: String },

    /// A foreign key points at a row that does not exist.
    #[error("Referential integrity violation ({constraint}): {message}")]
    ReferentialIntegrity { constraint: String, message: String },

    #[error("Not found: {entity} {id}")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl StoreError {
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound { entity, id }
    }

    /// True for both unique/required violations and dangling references.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            Self::ConstraintViolation { .. } | Self::ReferentialIntegrity { .. }
        )
    }

    /// Name of the violated constraint, if any
    pub fn constraint(&self) -> Option<&str> {
        match self {
            Self::ConstraintViolation { constraint, .. }
            | Self::ReferentialIntegrity { constraint, .. } => Some(constraint),
            _ => None,
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let constraint = db_err
                .constraint()
                .map(str::to_string)
                .unwrap_or_else(|| "unknown".to_string());
            let message = db_err.message().to_string();

            match db_err.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => {
                    return Self::ConstraintViolation {
                        constraint,
                        message,
                    };
                }
                ErrorKind::ForeignKeyViolation => {
                    return Self::ReferentialIntegrity {
                        constraint,
                        message,
                    };
                }
                _ => {}
            }

            if db_err.code().as_deref() == Some(STRING_DATA_RIGHT_TRUNCATION) {
                return Self::ConstraintViolation {
                    constraint,
                    message,
                };
            }
        }

        Self::Database(err)
    }
}

impl From<validator::ValidationErrors> for StoreError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors.errors().keys().map(|k| k.to_string()).collect();
        fields.sort();

        Self::ConstraintViolation {
            constraint: fields.join(","),
            message: errors.to_string(),
        }
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
