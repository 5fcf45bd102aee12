use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::accounts::adapter::incoming::web::routes::CreateProfileRequest;
use crate::appointments::adapter::incoming::web::routes::BookAppointmentRequest;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "VetLink API",
        version = "1.0.0",
        description = "API documentation for the VetLink appointment and messaging backend",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Profile endpoints
        crate::accounts::adapter::incoming::web::routes::create_profile::create_profile_handler,
        // fetch_own_profile_handler,
        // fetch_profile_handler,
        // update_profile_handler,
        // delete_user_handler,

        // Veterinarian endpoints
        // register_vet_handler,
        // get_veterinarians_handler,
        // get_veterinarian_handler,
        // review_vet_handler,
        // update_vet_profile_handler,

        // Appointment endpoints
        crate::appointments::adapter::incoming::web::routes::book_appointment::book_appointment_handler,
        // get_user_appointments_handler,
        // get_vet_appointments_handler,
        // get_appointment_handler,
        // approve_appointment_handler,
        // confirm_appointment_handler,
        // complete_appointment_handler,
        // cancel_appointment_handler,
        // reschedule_appointment_handler,

        // Messaging endpoints
        // send_message_handler,
        // get_thread_handler,
        // get_conversations_handler,
        // mark_message_read_handler,

        // Admin endpoints
        // get_stats_handler,
        // get_recent_activity_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,

            // Request DTOs
            CreateProfileRequest,
            BookAppointmentRequest
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "profile", description = "User profile endpoints"),
        (name = "veterinarians", description = "Veterinarian directory and verification endpoints"),
        (name = "appointments", description = "Appointment booking and lifecycle endpoints"),
        (name = "messages", description = "Direct messaging endpoints"),
        (name = "admin", description = "Admin dashboard endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            )
        }
    }
}
