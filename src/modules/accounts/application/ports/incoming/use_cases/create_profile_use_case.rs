use async_trait::async_trait;
use email_address::EmailAddress;
use uuid::Uuid;

use crate::accounts::application::domain::entities::{UserId, UserRole};
use crate::accounts::application::ports::outgoing::UserProfileRecord;

//
// ──────────────────────────────────────────────────────────
// Create Profile Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateProfileCommand {
    id: UserId,
    name: String,
    email: String,
    role: UserRole,
    location: Option<String>,
    farm_type: Option<String>,
    bio: Option<String>,
    contact_number: Option<String>,
    vet_profile_id: Option<Uuid>,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateProfileCommandError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name too long")]
    NameTooLong,

    #[error("Email is not valid")]
    InvalidEmail,
}

impl CreateProfileCommand {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: UserId,
        name: String,
        email: String,
        role: UserRole,
        location: Option<String>,
        farm_type: Option<String>,
        bio: Option<String>,
        contact_number: Option<String>,
        vet_profile_id: Option<Uuid>,
    ) -> Result<Self, CreateProfileCommandError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(CreateProfileCommandError::EmptyName);
        }

        if name.len() > 100 {
            return Err(CreateProfileCommandError::NameTooLong);
        }

        let email = email.trim();
        if !EmailAddress::is_valid(email) {
            return Err(CreateProfileCommandError::InvalidEmail);
        }

        Ok(Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            role,
            location,
            farm_type,
            bio,
            contact_number,
            vet_profile_id,
        })
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn location(&self) -> Option<&String> {
        self.location.as_ref()
    }

    pub fn farm_type(&self) -> Option<&String> {
        self.farm_type.as_ref()
    }

    pub fn bio(&self) -> Option<&String> {
        self.bio.as_ref()
    }

    pub fn contact_number(&self) -> Option<&String> {
        self.contact_number.as_ref()
    }

    pub fn vet_profile_id(&self) -> Option<Uuid> {
        self.vet_profile_id
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateProfileError {
    #[error("Profile already exists")]
    ProfileAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateProfileCommand,
    ) -> Result<UserProfileRecord, CreateProfileError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_command(name: &str, email: &str) -> Result<CreateProfileCommand, CreateProfileCommandError> {
        CreateProfileCommand::new(
            UserId::from(Uuid::new_v4()),
            name.to_string(),
            email.to_string(),
            UserRole::Farmer,
            None,
            None,
            None,
            None,
            None,
        )
    }

    #[test]
    fn trims_name_and_email() {
        let cmd = base_command("  Asha  ", " asha@example.com ").unwrap();
        assert_eq!(cmd.name(), "Asha");
        assert_eq!(cmd.email(), "asha@example.com");
    }

    #[test]
    fn rejects_blank_name() {
        assert!(matches!(
            base_command("   ", "a@b.c"),
            Err(CreateProfileCommandError::EmptyName)
        ));
    }

    #[test]
    fn rejects_overlong_name() {
        let long = "x".repeat(101);
        assert!(matches!(
            base_command(&long, "a@b.c"),
            Err(CreateProfileCommandError::NameTooLong)
        ));
    }

    #[test]
    fn rejects_email_without_at() {
        assert!(matches!(
            base_command("Asha", "not-an-email"),
            Err(CreateProfileCommandError::InvalidEmail)
        ));
    }

    #[test]
    fn rejects_email_without_domain() {
        assert!(matches!(
            base_command("Asha", "someone@"),
            Err(CreateProfileCommandError::InvalidEmail)
        ));
    }
}
