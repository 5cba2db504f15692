use thiserror::Error;

/// Failures surfaced by the service layer
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("{entity} not found with id: {id}")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ServiceError {
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_entity_and_id() {
        let err = ServiceError::not_found("Customer", 42);
        assert_eq!(err.to_string(), "Customer not found with id: 42");
        assert!(err.is_not_found());
    }

    #[test]
    fn database_error_is_not_not_found() {
        let err = ServiceError::from(sqlx::Error::PoolTimedOut);
        assert!(!err.is_not_found());
    }
}
