pub mod get_veterinarian;
pub mod get_veterinarians;
pub mod register_vet;
pub mod review_vet;
pub mod update_vet_profile;

pub use get_veterinarian::get_veterinarian_handler;
pub use get_veterinarians::get_veterinarians_handler;
pub use register_vet::register_vet_handler;
pub use review_vet::review_vet_handler;
pub use update_vet_profile::update_vet_profile_handler;
