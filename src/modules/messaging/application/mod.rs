pub mod domain;
pub mod messaging_use_cases;
pub mod ports;
pub mod services;
