use actix_web::web;
use std::sync::Arc;
use uuid::Uuid;

use crate::accounts::application::account_use_cases::AccountUseCases;
use crate::accounts::application::domain::entities::UserRole;
use crate::accounts::application::helpers::RoleGuard;
use crate::accounts::application::ports::incoming::use_cases::{
    CreateProfileUseCase, DeleteUserUseCase, FetchProfileUseCase, UpdateProfileUseCase,
};
use crate::appointments::application::appointment_use_cases::AppointmentUseCases;
use crate::appointments::application::ports::incoming::use_cases::{
    BookAppointmentUseCase, GetAppointmentUseCase, GetUserAppointmentsUseCase,
    GetVetAppointmentsUseCase, TransitionAppointmentUseCase,
};
use crate::dashboard::application::dashboard_use_cases::DashboardUseCases;
use crate::dashboard::application::ports::incoming::use_cases::{
    GetDashboardStatsUseCase, GetRecentActivityUseCase,
};
use crate::messaging::application::messaging_use_cases::MessagingUseCases;
use crate::messaging::application::ports::incoming::use_cases::{
    GetConversationsUseCase, GetThreadUseCase, MarkMessageReadUseCase, SendMessageUseCase,
};
use crate::tests::support::stubs::*;
use crate::veterinarians::application::ports::incoming::use_cases::{
    GetVeterinarianUseCase, GetVeterinariansUseCase, RegisterVetUseCase, ReviewVetUseCase,
    UpdateVetProfileUseCase,
};
use crate::veterinarians::application::vet_use_cases::VetUseCases;
use crate::AppState;

pub struct TestAppStateBuilder {
    accounts: Option<AccountUseCases>,
    veterinarians: Option<VetUseCases>,
    appointments: Option<AppointmentUseCases>,
    messaging: Option<MessagingUseCases>,
    dashboard: Option<DashboardUseCases>,
    role_guard: Option<Arc<RoleGuard>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            accounts: Some(AccountUseCases {
                create_profile: Arc::new(StubCreateProfileUseCase),
                fetch_profile: Arc::new(StubFetchProfileUseCase),
                update_profile: Arc::new(StubUpdateProfileUseCase),
                delete_user: Arc::new(StubDeleteUserUseCase),
            }),
            veterinarians: Some(VetUseCases {
                register_vet: Arc::new(StubRegisterVetUseCase),
                get_veterinarians: Arc::new(StubGetVeterinariansUseCase),
                get_veterinarian: Arc::new(StubGetVeterinarianUseCase),
                review_vet: Arc::new(StubReviewVetUseCase),
                update_vet_profile: Arc::new(StubUpdateVetProfileUseCase),
            }),
            appointments: Some(AppointmentUseCases {
                book_appointment: Arc::new(StubBookAppointmentUseCase),
                get_appointment: Arc::new(StubGetAppointmentUseCase),
                get_user_appointments: Arc::new(StubGetUserAppointmentsUseCase),
                get_vet_appointments: Arc::new(StubGetVetAppointmentsUseCase),
                transition_appointment: Arc::new(StubTransitionAppointmentUseCase),
            }),
            messaging: Some(MessagingUseCases {
                send_message: Arc::new(StubSendMessageUseCase),
                get_thread: Arc::new(StubGetThreadUseCase),
                get_conversations: Arc::new(StubGetConversationsUseCase),
                mark_message_read: Arc::new(StubMarkMessageReadUseCase),
            }),
            dashboard: Some(DashboardUseCases {
                get_stats: Arc::new(StubGetDashboardStatsUseCase),
                get_recent_activity: Arc::new(StubGetRecentActivityUseCase),
            }),
            role_guard: Some(Arc::new(RoleGuard::new(Arc::new(DummyUserQuery)))),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_create_profile(
        mut self,
        uc: impl CreateProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        let accounts = self
            .accounts
            .as_mut()
            .expect("Account use cases must be initialized");
        accounts.create_profile = Arc::new(uc);
        self
    }

    pub fn with_fetch_profile(
        mut self,
        uc: impl FetchProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        let accounts = self
            .accounts
            .as_mut()
            .expect("Account use cases must be initialized");
        accounts.fetch_profile = Arc::new(uc);
        self
    }

    pub fn with_update_profile(
        mut self,
        uc: impl UpdateProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        let accounts = self
            .accounts
            .as_mut()
            .expect("Account use cases must be initialized");
        accounts.update_profile = Arc::new(uc);
        self
    }

    pub fn with_delete_user(mut self, uc: impl DeleteUserUseCase + Send + Sync + 'static) -> Self {
        let accounts = self
            .accounts
            .as_mut()
            .expect("Account use cases must be initialized");
        accounts.delete_user = Arc::new(uc);
        self
    }

    /// Wires the role guard to a query that resolves `user_id` to a
    /// profile with the given role.
    pub fn with_caller_role(mut self, user_id: Uuid, role: UserRole) -> Self {
        self.role_guard = Some(Arc::new(RoleGuard::new(Arc::new(FixedRoleUserQuery {
            user_id,
            role,
        }))));
        self
    }

    pub fn with_register_vet(
        mut self,
        uc: impl RegisterVetUseCase + Send + Sync + 'static,
    ) -> Self {
        let vets = self
            .veterinarians
            .as_mut()
            .expect("Vet use cases must be initialized");
        vets.register_vet = Arc::new(uc);
        self
    }

    pub fn with_get_veterinarians(
        mut self,
        uc: impl GetVeterinariansUseCase + Send + Sync + 'static,
    ) -> Self {
        let vets = self
            .veterinarians
            .as_mut()
            .expect("Vet use cases must be initialized");
        vets.get_veterinarians = Arc::new(uc);
        self
    }

    pub fn with_get_veterinarian(
        mut self,
        uc: impl GetVeterinarianUseCase + Send + Sync + 'static,
    ) -> Self {
        let vets = self
            .veterinarians
            .as_mut()
            .expect("Vet use cases must be initialized");
        vets.get_veterinarian = Arc::new(uc);
        self
    }

    pub fn with_review_vet(mut self, uc: impl ReviewVetUseCase + Send + Sync + 'static) -> Self {
        let vets = self
            .veterinarians
            .as_mut()
            .expect("Vet use cases must be initialized");
        vets.review_vet = Arc::new(uc);
        self
    }

    pub fn with_update_vet_profile(
        mut self,
        uc: impl UpdateVetProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        let vets = self
            .veterinarians
            .as_mut()
            .expect("Vet use cases must be initialized");
        vets.update_vet_profile = Arc::new(uc);
        self
    }

    pub fn with_book_appointment(
        mut self,
        uc: impl BookAppointmentUseCase + Send + Sync + 'static,
    ) -> Self {
        let appointments = self
            .appointments
            .as_mut()
            .expect("Appointment use cases must be initialized");
        appointments.book_appointment = Arc::new(uc);
        self
    }

    pub fn with_get_appointment(
        mut self,
        uc: impl GetAppointmentUseCase + Send + Sync + 'static,
    ) -> Self {
        let appointments = self
            .appointments
            .as_mut()
            .expect("Appointment use cases must be initialized");
        appointments.get_appointment = Arc::new(uc);
        self
    }

    pub fn with_get_user_appointments(
        mut self,
        uc: impl GetUserAppointmentsUseCase + Send + Sync + 'static,
    ) -> Self {
        let appointments = self
            .appointments
            .as_mut()
            .expect("Appointment use cases must be initialized");
        appointments.get_user_appointments = Arc::new(uc);
        self
    }

    pub fn with_get_vet_appointments(
        mut self,
        uc: impl GetVetAppointmentsUseCase + Send + Sync + 'static,
    ) -> Self {
        let appointments = self
            .appointments
            .as_mut()
            .expect("Appointment use cases must be initialized");
        appointments.get_vet_appointments = Arc::new(uc);
        self
    }

    pub fn with_transition_appointment(
        mut self,
        uc: impl TransitionAppointmentUseCase + Send + Sync + 'static,
    ) -> Self {
        let appointments = self
            .appointments
            .as_mut()
            .expect("Appointment use cases must be initialized");
        appointments.transition_appointment = Arc::new(uc);
        self
    }

    pub fn with_send_message(
        mut self,
        uc: impl SendMessageUseCase + Send + Sync + 'static,
    ) -> Self {
        let messaging = self
            .messaging
            .as_mut()
            .expect("Messaging use cases must be initialized");
        messaging.send_message = Arc::new(uc);
        self
    }

    pub fn with_get_thread(mut self, uc: impl GetThreadUseCase + Send + Sync + 'static) -> Self {
        let messaging = self
            .messaging
            .as_mut()
            .expect("Messaging use cases must be initialized");
        messaging.get_thread = Arc::new(uc);
        self
    }

    pub fn with_get_conversations(
        mut self,
        uc: impl GetConversationsUseCase + Send + Sync + 'static,
    ) -> Self {
        let messaging = self
            .messaging
            .as_mut()
            .expect("Messaging use cases must be initialized");
        messaging.get_conversations = Arc::new(uc);
        self
    }

    pub fn with_mark_message_read(
        mut self,
        uc: impl MarkMessageReadUseCase + Send + Sync + 'static,
    ) -> Self {
        let messaging = self
            .messaging
            .as_mut()
            .expect("Messaging use cases must be initialized");
        messaging.mark_message_read = Arc::new(uc);
        self
    }

    pub fn with_get_stats(
        mut self,
        uc: impl GetDashboardStatsUseCase + Send + Sync + 'static,
    ) -> Self {
        let dashboard = self
            .dashboard
            .as_mut()
            .expect("Dashboard use cases must be initialized");
        dashboard.get_stats = Arc::new(uc);
        self
    }

    /// Arc variant so the test can keep a handle on the mock and
    /// inspect what the handler passed to it.
    pub fn with_get_recent_activity_arc(
        mut self,
        uc: Arc<dyn GetRecentActivityUseCase + Send + Sync>,
    ) -> Self {
        let dashboard = self
            .dashboard
            .as_mut()
            .expect("Dashboard use cases must be initialized");
        dashboard.get_recent_activity = uc;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            accounts: self.accounts.unwrap(),
            veterinarians: self.veterinarians.unwrap(),
            appointments: self.appointments.unwrap(),
            messaging: self.messaging.unwrap(),
            dashboard: self.dashboard.unwrap(),
            role_guard: self.role_guard.unwrap(),
        })
    }
}
