use thiserror::Error;

use models::errors::ModelError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::NotFound(msg) => Self::NotFound(msg),
            ModelError::Db(msg) => Self::Db(msg),
        }
    }
}

impl ServiceError {
    /// True when the underlying row disappeared mid-operation.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_fault_maps_to_db() {
        let err: ServiceError = ModelError::Db("connection reset".into()).into();
        assert!(matches!(err, ServiceError::Db(ref msg) if msg == "connection reset"));
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "database error: connection reset");
    }

    #[test]
    fn vanished_row_maps_to_not_found() {
        let err: ServiceError = ModelError::not_found("product", 4).into();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "not found: product 4 not found");
    }
}
