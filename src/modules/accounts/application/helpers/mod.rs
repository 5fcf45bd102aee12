mod role_guard;

pub use role_guard::{RoleGuard, RoleGuardError};
