pub mod accounts;
pub mod appointments;
pub mod auth;
pub mod dashboard;
pub mod messaging;
pub mod veterinarians;
