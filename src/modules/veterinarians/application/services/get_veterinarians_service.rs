use async_trait::async_trait;
use std::sync::Arc;

use crate::veterinarians::application::domain::entities::VerificationStatus;
use crate::veterinarians::application::ports::incoming::use_cases::{
    GetVeterinariansError, GetVeterinariansUseCase,
};
use crate::veterinarians::application::ports::outgoing::{VetQuery, VetRecord};

pub struct GetVeterinariansService {
    query: Arc<dyn VetQuery + Send + Sync>,
}

impl GetVeterinariansService {
    pub fn new(query: Arc<dyn VetQuery + Send + Sync>) -> Self {
        Self { query }
    }
}

#[async_trait]
impl GetVeterinariansUseCase for GetVeterinariansService {
    async fn execute(
        &self,
        status: Option<VerificationStatus>,
    ) -> Result<Vec<VetRecord>, GetVeterinariansError> {
        self.query
            .list_vets(status)
            .await
            .map_err(|err| GetVeterinariansError::RepositoryError(err.to_string()))
    }
}
