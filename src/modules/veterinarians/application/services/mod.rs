mod get_veterinarian_service;
mod get_veterinarians_service;
mod register_vet_service;
mod review_vet_service;
mod update_vet_profile_service;

pub use get_veterinarian_service::GetVeterinarianService;
pub use get_veterinarians_service::GetVeterinariansService;
pub use register_vet_service::RegisterVetService;
pub use review_vet_service::ReviewVetService;
pub use update_vet_profile_service::UpdateVetProfileService;
