use thiserror::Error;

/// The only failure the store reports: mutating an id that is not present.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{entity} not found with ID: {id}")]
    NotFound { entity: &'static str, id: u64 },
}

impl StoreError {
    pub fn not_found(entity: &'static str, id: u64) -> Self {
        Self::NotFound { entity, id }
    }
}

/// Errors surfaced by the service layer to transport adapters.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("unknown reference: {0}")]
    UnknownReference(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: u64) -> Self {
        Self::NotFound(format!("{} not found with ID: {}", entity, id))
    }

    pub fn unknown_reference(entity: &str, id: u64) -> Self {
        Self::UnknownReference(format!("{} not found with ID: {}", entity, id))
    }
}

impl From<StoreError> for ServiceError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { entity, id } => Self::not_found(entity, id),
        }
    }
}
