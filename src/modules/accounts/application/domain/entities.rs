use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a user profile.
///
/// This is the identity provider's subject id, not a value we mint:
/// profile rows are keyed by it so a bearer token maps straight to its
/// profile without a lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for UserId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<UserId> for Uuid {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("Unknown user role: {0}")]
pub struct ParseRoleError(pub String);

/// Role stored on the profile; the single source of truth for
/// role-based branching (dashboard selection, admin gating).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Farmer,
    PetOwner,
    Veterinarian,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Farmer => "farmer",
            UserRole::PetOwner => "pet_owner",
            UserRole::Veterinarian => "veterinarian",
            UserRole::Admin => "admin",
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "farmer" => Ok(UserRole::Farmer),
            "pet_owner" => Ok(UserRole::PetOwner),
            "veterinarian" => Ok(UserRole::Veterinarian),
            "admin" => Ok(UserRole::Admin),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}
