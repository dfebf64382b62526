use thiserror::Error;

#[derive(Debug, Error)]
pub enum AutoLoanError {
    #[cfg(feature = "manage")]
    #[error("Loan record not found: {id}")]
    RecordNotFound { id: uuid::Uuid },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for AutoLoanError {
    fn from(e: serde_json::Error) -> Self {
        AutoLoanError::SerializationError(e.to_string())
    }
}
