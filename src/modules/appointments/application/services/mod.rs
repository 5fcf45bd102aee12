mod book_appointment_service;
mod get_appointment_service;
mod get_user_appointments_service;
mod get_vet_appointments_service;
mod transition_appointment_service;

pub use book_appointment_service::BookAppointmentService;
pub use get_appointment_service::GetAppointmentService;
pub use get_user_appointments_service::GetUserAppointmentsService;
pub use get_vet_appointments_service::GetVetAppointmentsService;
pub use transition_appointment_service::TransitionAppointmentService;
