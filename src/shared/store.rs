//! Store error taxonomy shared by every Postgres adapter.
//!
//! The adapters translate `sea_orm::DbErr` into these four kinds in one
//! place so that application services and routes can match on intent
//! (missing row, denied, unreachable, everything else) instead of
//! parsing driver strings.

use sea_orm::DbErr;

#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Store error: {0}")]
    Unknown(String),
}

impl StoreError {
    /// Map a SeaORM error for an operation touching `entity`.
    pub fn from_db(entity: &'static str, err: DbErr) -> Self {
        match err {
            DbErr::RecordNotFound(_) | DbErr::RecordNotInserted | DbErr::RecordNotUpdated => {
                StoreError::NotFound { entity }
            }
            DbErr::Conn(e) => StoreError::Network(e.to_string()),
            DbErr::ConnectionAcquire(e) => StoreError::Network(e.to_string()),
            other => {
                let text = other.to_string();
                if text.contains("permission denied") {
                    StoreError::PermissionDenied(text)
                } else {
                    StoreError::Unknown(text)
                }
            }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}
