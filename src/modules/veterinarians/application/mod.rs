pub mod domain;
pub mod ports;
pub mod services;
pub mod vet_use_cases;
