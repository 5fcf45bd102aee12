use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::veterinarians::application::ports::incoming::use_cases::{
    GetVeterinarianError, GetVeterinarianUseCase,
};
use crate::veterinarians::application::ports::outgoing::{VetQuery, VetRecord};

pub struct GetVeterinarianService {
    query: Arc<dyn VetQuery + Send + Sync>,
}

impl GetVeterinarianService {
    pub fn new(query: Arc<dyn VetQuery + Send + Sync>) -> Self {
        Self { query }
    }
}

#[async_trait]
impl GetVeterinarianUseCase for GetVeterinarianService {
    async fn execute(&self, id: Uuid) -> Result<VetRecord, GetVeterinarianError> {
        self.query
            .get_vet(id)
            .await
            .map_err(|err| GetVeterinarianError::RepositoryError(err.to_string()))?
            .ok_or(GetVeterinarianError::VetNotFound)
    }
}
