mod get_veterinarian_use_case;
mod get_veterinarians_use_case;
mod register_vet_use_case;
mod review_vet_use_case;
mod update_vet_profile_use_case;

pub use get_veterinarian_use_case::{GetVeterinarianError, GetVeterinarianUseCase};
pub use get_veterinarians_use_case::{GetVeterinariansError, GetVeterinariansUseCase};
pub use register_vet_use_case::{
    RegisterVetCommand, RegisterVetCommandError, RegisterVetError, RegisterVetUseCase,
};
pub use review_vet_use_case::{ReviewVetCommand, ReviewVetError, ReviewVetUseCase};
pub use update_vet_profile_use_case::{
    UpdateVetProfileCommand, UpdateVetProfileCommandError, UpdateVetProfileError,
    UpdateVetProfileUseCase,
};
