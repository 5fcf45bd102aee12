use std::sync::Arc;

use crate::veterinarians::application::ports::incoming::use_cases::{
    GetVeterinarianUseCase, GetVeterinariansUseCase, RegisterVetUseCase, ReviewVetUseCase,
    UpdateVetProfileUseCase,
};

#[derive(Clone)]
pub struct VetUseCases {
    pub register_vet: Arc<dyn RegisterVetUseCase + Send + Sync>,
    pub get_veterinarians: Arc<dyn GetVeterinariansUseCase + Send + Sync>,
    pub get_veterinarian: Arc<dyn GetVeterinarianUseCase + Send + Sync>,
    pub review_vet: Arc<dyn ReviewVetUseCase + Send + Sync>,
    pub update_vet_profile: Arc<dyn UpdateVetProfileUseCase + Send + Sync>,
}
