use std::sync::Arc;

use crate::appointments::application::ports::incoming::use_cases::{
    BookAppointmentUseCase, GetAppointmentUseCase, GetUserAppointmentsUseCase,
    GetVetAppointmentsUseCase, TransitionAppointmentUseCase,
};

#[derive(Clone)]
pub struct AppointmentUseCases {
    pub book_appointment: Arc<dyn BookAppointmentUseCase + Send + Sync>,
    pub get_appointment: Arc<dyn GetAppointmentUseCase + Send + Sync>,
    pub get_user_appointments: Arc<dyn GetUserAppointmentsUseCase + Send + Sync>,
    pub get_vet_appointments: Arc<dyn GetVetAppointmentsUseCase + Send + Sync>,
    pub transition_appointment: Arc<dyn TransitionAppointmentUseCase + Send + Sync>,
}
