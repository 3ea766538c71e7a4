use thiserror::Error;

pub type EngineResult<T> = Result<T, EngineError>;

/// Error type that captures invalid engine input.
///
/// Every variant is recoverable: the caller corrects the offending value and
/// retries. Variants carry the entity id and field so an outer layer can
/// build a user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("{entity} {id}: invalid {field}: {reason}")]
    InvalidInput {
        entity: &'static str,
        id: String,
        field: &'static str,
        reason: String,
    },
    #[error("unknown periodicity `{0}`")]
    UnknownPeriodicity(String),
}

impl EngineError {
    pub fn invalid(
        entity: &'static str,
        id: impl ToString,
        field: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidInput {
            entity,
            id: id.to_string(),
            field,
            reason: reason.into(),
        }
    }

    /// Rebinds an `InvalidInput` error to the entity id it was raised for.
    /// Used by callers that know the owning entity better than the callee.
    pub fn with_id(self, id: impl ToString) -> Self {
        match self {
            Self::InvalidInput {
                entity,
                field,
                reason,
                ..
            } => Self::InvalidInput {
                entity,
                id: id.to_string(),
                field,
                reason,
            },
            other => other,
        }
    }
}
