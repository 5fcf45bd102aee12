pub mod book_appointment;
pub mod get_appointment;
pub mod get_user_appointments;
pub mod get_vet_appointments;
pub mod transition_appointment;

pub use book_appointment::{book_appointment_handler, BookAppointmentRequest};
pub use get_appointment::get_appointment_handler;
pub use get_user_appointments::get_user_appointments_handler;
pub use get_vet_appointments::get_vet_appointments_handler;
pub use transition_appointment::{
    approve_appointment_handler, cancel_appointment_handler, complete_appointment_handler,
    confirm_appointment_handler, reschedule_appointment_handler,
};
