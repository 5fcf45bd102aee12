use std::sync::Arc;

use crate::accounts::application::domain::entities::{UserId, UserRole};
use crate::accounts::application::ports::outgoing::UserQuery;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RoleGuardError {
    #[error("Profile not found")]
    ProfileNotFound,

    #[error("Forbidden")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Looks up the caller's stored role before letting an admin-only
/// handler proceed. The token proves identity, the profile row decides
/// privilege.
pub struct RoleGuard {
    query: Arc<dyn UserQuery + Send + Sync>,
}

impl RoleGuard {
    pub fn new(query: Arc<dyn UserQuery + Send + Sync>) -> Self {
        Self { query }
    }

    pub async fn require_admin(&self, caller: UserId) -> Result<(), RoleGuardError> {
        let profile = self
            .query
            .get_profile(caller)
            .await
            .map_err(|err| RoleGuardError::RepositoryError(err.to_string()))?
            .ok_or(RoleGuardError::ProfileNotFound)?;

        if profile.role != UserRole::Admin {
            return Err(RoleGuardError::Forbidden);
        }

        Ok(())
    }
}
