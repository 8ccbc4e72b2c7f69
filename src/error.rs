use thiserror::Error;

/// Failures of the persistence collaborator. These are surfaced to callers
/// unchanged, wrapped in [`UnitError::Store`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to connect to the unit store: {0}")]
    Connection(#[from] diesel::ConnectionError),

    #[error("unit store query failed: {0}")]
    Query(#[from] diesel::result::Error),

    #[error("unit store task did not complete: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("unit store lock poisoned")]
    Poisoned,

    #[error("unit store has no identifiers left")]
    IdsExhausted,
}

#[derive(Debug, Error)]
pub enum UnitError {
    /// Malformed room or renter input
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("unit not found: {id}")]
    NotFound { id: String },

    /// A stored document that does not have the unit shape
    #[error("malformed unit document {id}: {source}")]
    MalformedDocument {
        id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl UnitError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(id: impl ToString) -> Self {
        Self::NotFound { id: id.to_string() }
    }
}
