use sea_orm::DbErr;
use thiserror::Error;

/// Entity-layer errors: input rejected before it reaches the store, or a
/// store failure flattened to its message for the service layer to classify.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ModelError {
    pub fn validation(msg: impl Into<String>) -> Self {
        ModelError::Validation(msg.into())
    }
}

impl From<DbErr> for ModelError {
    fn from(e: DbErr) -> Self {
        ModelError::Db(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_errors_flatten_to_their_message() {
        let e: ModelError = DbErr::Custom("connection reset".into()).into();
        assert!(matches!(e, ModelError::Db(ref m) if m.contains("connection reset")));
    }
}
