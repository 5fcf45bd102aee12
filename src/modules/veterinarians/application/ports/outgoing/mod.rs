mod vet_query;
mod vet_repository;

pub use vet_query::VetQuery;
pub use vet_repository::{
    NewVeterinarian, UpdateVetProfileData, VetRecord, VetRepository, VetRepositoryError,
};
