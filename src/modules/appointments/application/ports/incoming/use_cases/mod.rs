mod book_appointment_use_case;
mod get_appointment_use_case;
mod get_user_appointments_use_case;
mod get_vet_appointments_use_case;
mod transition_appointment_use_case;

pub use book_appointment_use_case::{
    BookAppointmentCommand, BookAppointmentCommandError, BookAppointmentError,
    BookAppointmentUseCase,
};
pub use get_appointment_use_case::{GetAppointmentError, GetAppointmentUseCase};
pub use get_user_appointments_use_case::{GetUserAppointmentsError, GetUserAppointmentsUseCase};
pub use get_vet_appointments_use_case::{GetVetAppointmentsError, GetVetAppointmentsUseCase};
pub use transition_appointment_use_case::{
    TransitionAppointmentCommand, TransitionAppointmentCommandError, TransitionAppointmentError,
    TransitionAppointmentUseCase,
};
