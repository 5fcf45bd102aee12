use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::accounts::application::domain::entities::{UserId, UserRole};
use crate::accounts::application::ports::incoming::use_cases::{
    CreateProfileCommand, CreateProfileError, CreateProfileUseCase, DeleteUserError,
    DeleteUserUseCase, FetchProfileError, FetchProfileUseCase, UpdateProfileCommand,
    UpdateProfileError, UpdateProfileUseCase,
};
use crate::accounts::application::ports::outgoing::{UserProfileRecord, UserQuery};
use crate::appointments::application::domain::entities::AppointmentStatus;
use crate::appointments::application::ports::incoming::use_cases::{
    BookAppointmentCommand, BookAppointmentError, BookAppointmentUseCase, GetAppointmentError,
    GetAppointmentUseCase, GetUserAppointmentsError, GetUserAppointmentsUseCase,
    GetVetAppointmentsError, GetVetAppointmentsUseCase, TransitionAppointmentCommand,
    TransitionAppointmentError, TransitionAppointmentUseCase,
};
use crate::appointments::application::ports::outgoing::AppointmentRecord;
use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider,
};
use crate::dashboard::application::domain::entities::{ActivityItem, DashboardStats};
use crate::dashboard::application::ports::incoming::use_cases::{
    GetDashboardStatsError, GetDashboardStatsUseCase, GetRecentActivityError,
    GetRecentActivityUseCase,
};
use crate::messaging::application::domain::conversations::ConversationSummary;
use crate::messaging::application::ports::incoming::use_cases::{
    GetConversationsError, GetConversationsUseCase, GetThreadError, GetThreadUseCase,
    MarkMessageReadError, MarkMessageReadUseCase, SendMessageCommand, SendMessageError,
    SendMessageUseCase,
};
use crate::messaging::application::ports::outgoing::MessageRecord;
use crate::shared::store::StoreError;
use crate::veterinarians::application::domain::entities::VerificationStatus;
use crate::veterinarians::application::ports::incoming::use_cases::{
    GetVeterinarianError, GetVeterinarianUseCase, GetVeterinariansError, GetVeterinariansUseCase,
    RegisterVetCommand, RegisterVetError, RegisterVetUseCase, ReviewVetCommand, ReviewVetError,
    ReviewVetUseCase, UpdateVetProfileCommand, UpdateVetProfileError, UpdateVetProfileUseCase,
};
use crate::veterinarians::application::ports::outgoing::VetRecord;

//
// ──────────────────────────────────────────────────────────
// Token provider
// ──────────────────────────────────────────────────────────
//

/// Accepts any bearer token and resolves it to a fixed user id.
pub struct StubTokenProvider {
    user_id: Uuid,
}

impl StubTokenProvider {
    pub fn new(user_id: Uuid) -> Self {
        Self { user_id }
    }
}

impl TokenProvider for StubTokenProvider {
    fn generate_access_token(&self, _user_id: Uuid) -> Result<String, TokenError> {
        Ok("test-token".to_string())
    }

    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        let now = Utc::now().timestamp();
        Ok(TokenClaims {
            sub: self.user_id,
            exp: now + 3600,
            iat: now,
            nbf: now,
            token_type: "access".to_string(),
        })
    }
}

//
// ──────────────────────────────────────────────────────────
// Fixtures
// ──────────────────────────────────────────────────────────
//

pub fn sample_profile(id: UserId, role: UserRole) -> UserProfileRecord {
    UserProfileRecord {
        id,
        name: "Asha Putri".to_string(),
        email: "asha@example.com".to_string(),
        role,
        location: Some("Bandung, West Java".to_string()),
        farm_type: Some("dairy".to_string()),
        bio: None,
        contact_number: None,
        vet_profile_id: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn sample_vet(user_id: UserId) -> VetRecord {
    VetRecord {
        id: Uuid::new_v4(),
        user_id,
        qualifications: "DVM, Bogor Agricultural University".to_string(),
        specialization: "Large animal medicine".to_string(),
        service_regions: vec!["Bandung".to_string(), "Cimahi".to_string()],
        animal_types: vec!["cattle".to_string(), "goats".to_string()],
        verification_status: VerificationStatus::Pending,
        bio: None,
        contact_number: Some("+62-812-000-1234".to_string()),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn sample_appointment(user_id: UserId) -> AppointmentRecord {
    AppointmentRecord {
        id: Uuid::new_v4(),
        user_id,
        vet_id: Uuid::new_v4(),
        date_time: Utc::now(),
        status: AppointmentStatus::Pending,
        reason: "Calf vaccination".to_string(),
        notes: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn sample_message(sender: UserId, receiver: UserId) -> MessageRecord {
    MessageRecord {
        id: Uuid::new_v4(),
        sender_id: sender,
        receiver_id: receiver,
        content: "Is the 9am slot still open?".to_string(),
        sent_at: Utc::now(),
        read: false,
        appointment_id: None,
    }
}

//
// ──────────────────────────────────────────────────────────
// Role guard queries
// ──────────────────────────────────────────────────────────
//

/// Knows no profiles at all. Admin-gated routes fail closed with it.
pub struct DummyUserQuery;

#[async_trait]
impl UserQuery for DummyUserQuery {
    async fn get_profile(&self, _id: UserId) -> Result<Option<UserProfileRecord>, StoreError> {
        Ok(None)
    }

    async fn count_users(&self) -> Result<u64, StoreError> {
        unimplemented!("Not used in this test")
    }

    async fn recent_users(&self, _limit: u64) -> Result<Vec<UserProfileRecord>, StoreError> {
        unimplemented!("Not used in this test")
    }
}

/// Resolves exactly one caller to a profile with the given role.
pub struct FixedRoleUserQuery {
    pub user_id: Uuid,
    pub role: UserRole,
}

#[async_trait]
impl UserQuery for FixedRoleUserQuery {
    async fn get_profile(&self, id: UserId) -> Result<Option<UserProfileRecord>, StoreError> {
        if Uuid::from(id) == self.user_id {
            Ok(Some(sample_profile(id, self.role)))
        } else {
            Ok(None)
        }
    }

    async fn count_users(&self) -> Result<u64, StoreError> {
        unimplemented!("Not used in this test")
    }

    async fn recent_users(&self, _limit: u64) -> Result<Vec<UserProfileRecord>, StoreError> {
        unimplemented!("Not used in this test")
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case stubs
// ──────────────────────────────────────────────────────────
//

#[derive(Default, Clone)]
pub struct StubCreateProfileUseCase;

#[async_trait]
impl CreateProfileUseCase for StubCreateProfileUseCase {
    async fn execute(
        &self,
        _command: CreateProfileCommand,
    ) -> Result<UserProfileRecord, CreateProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubFetchProfileUseCase;

#[async_trait]
impl FetchProfileUseCase for StubFetchProfileUseCase {
    async fn execute(&self, _id: UserId) -> Result<UserProfileRecord, FetchProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateProfileUseCase;

#[async_trait]
impl UpdateProfileUseCase for StubUpdateProfileUseCase {
    async fn execute(
        &self,
        _command: UpdateProfileCommand,
    ) -> Result<UserProfileRecord, UpdateProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteUserUseCase;

#[async_trait]
impl DeleteUserUseCase for StubDeleteUserUseCase {
    async fn execute(&self, _id: UserId) -> Result<(), DeleteUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubRegisterVetUseCase;

#[async_trait]
impl RegisterVetUseCase for StubRegisterVetUseCase {
    async fn execute(&self, _command: RegisterVetCommand) -> Result<VetRecord, RegisterVetError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetVeterinariansUseCase;

#[async_trait]
impl GetVeterinariansUseCase for StubGetVeterinariansUseCase {
    async fn execute(
        &self,
        _status: Option<VerificationStatus>,
    ) -> Result<Vec<VetRecord>, GetVeterinariansError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetVeterinarianUseCase;

#[async_trait]
impl GetVeterinarianUseCase for StubGetVeterinarianUseCase {
    async fn execute(&self, _id: Uuid) -> Result<VetRecord, GetVeterinarianError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubReviewVetUseCase;

#[async_trait]
impl ReviewVetUseCase for StubReviewVetUseCase {
    async fn execute(&self, _command: ReviewVetCommand) -> Result<VetRecord, ReviewVetError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateVetProfileUseCase;

#[async_trait]
impl UpdateVetProfileUseCase for StubUpdateVetProfileUseCase {
    async fn execute(
        &self,
        _command: UpdateVetProfileCommand,
    ) -> Result<VetRecord, UpdateVetProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubBookAppointmentUseCase;

#[async_trait]
impl BookAppointmentUseCase for StubBookAppointmentUseCase {
    async fn execute(
        &self,
        _command: BookAppointmentCommand,
    ) -> Result<AppointmentRecord, BookAppointmentError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetAppointmentUseCase;

#[async_trait]
impl GetAppointmentUseCase for StubGetAppointmentUseCase {
    async fn execute(&self, _id: Uuid) -> Result<AppointmentRecord, GetAppointmentError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetUserAppointmentsUseCase;

#[async_trait]
impl GetUserAppointmentsUseCase for StubGetUserAppointmentsUseCase {
    async fn execute(
        &self,
        _user_id: UserId,
    ) -> Result<Vec<AppointmentRecord>, GetUserAppointmentsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetVetAppointmentsUseCase;

#[async_trait]
impl GetVetAppointmentsUseCase for StubGetVetAppointmentsUseCase {
    async fn execute(
        &self,
        _vet_id: Uuid,
    ) -> Result<Vec<AppointmentRecord>, GetVetAppointmentsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubTransitionAppointmentUseCase;

#[async_trait]
impl TransitionAppointmentUseCase for StubTransitionAppointmentUseCase {
    async fn execute(
        &self,
        _command: TransitionAppointmentCommand,
    ) -> Result<AppointmentRecord, TransitionAppointmentError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSendMessageUseCase;

#[async_trait]
impl SendMessageUseCase for StubSendMessageUseCase {
    async fn execute(
        &self,
        _command: SendMessageCommand,
    ) -> Result<MessageRecord, SendMessageError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetThreadUseCase;

#[async_trait]
impl GetThreadUseCase for StubGetThreadUseCase {
    async fn execute(
        &self,
        _viewer: UserId,
        _peer: UserId,
    ) -> Result<Vec<MessageRecord>, GetThreadError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetConversationsUseCase;

#[async_trait]
impl GetConversationsUseCase for StubGetConversationsUseCase {
    async fn execute(
        &self,
        _viewer: UserId,
    ) -> Result<Vec<ConversationSummary>, GetConversationsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubMarkMessageReadUseCase;

#[async_trait]
impl MarkMessageReadUseCase for StubMarkMessageReadUseCase {
    async fn execute(
        &self,
        _caller: UserId,
        _message_id: Uuid,
    ) -> Result<MessageRecord, MarkMessageReadError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetDashboardStatsUseCase;

#[async_trait]
impl GetDashboardStatsUseCase for StubGetDashboardStatsUseCase {
    async fn execute(&self) -> Result<DashboardStats, GetDashboardStatsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetRecentActivityUseCase;

#[async_trait]
impl GetRecentActivityUseCase for StubGetRecentActivityUseCase {
    async fn execute(&self, _limit: u64) -> Result<Vec<ActivityItem>, GetRecentActivityError> {
        unimplemented!("Not used in this test")
    }
}
