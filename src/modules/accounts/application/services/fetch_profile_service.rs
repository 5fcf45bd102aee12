use async_trait::async_trait;
use std::sync::Arc;

use crate::accounts::application::domain::entities::UserId;
use crate::accounts::application::ports::incoming::use_cases::{
    FetchProfileError, FetchProfileUseCase,
};
use crate::accounts::application::ports::outgoing::{UserProfileRecord, UserQuery};

pub struct FetchProfileService {
    query: Arc<dyn UserQuery + Send + Sync>,
}

impl FetchProfileService {
    pub fn new(query: Arc<dyn UserQuery + Send + Sync>) -> Self {
        Self { query }
    }
}

#[async_trait]
impl FetchProfileUseCase for FetchProfileService {
    async fn execute(&self, id: UserId) -> Result<UserProfileRecord, FetchProfileError> {
        self.query
            .get_profile(id)
            .await
            .map_err(|err| FetchProfileError::RepositoryError(err.to_string()))?
            .ok_or(FetchProfileError::ProfileNotFound)
    }
}
