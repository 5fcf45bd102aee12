pub mod sea_orm_entity;
pub mod vet_query_postgres;
pub mod vet_repository_postgres;

pub use vet_query_postgres::VetQueryPostgres;
pub use vet_repository_postgres::VetRepositoryPostgres;
