pub mod modules;
pub use modules::accounts;
pub use modules::appointments;
pub use modules::auth;
pub use modules::dashboard;
pub use modules::messaging;
pub use modules::veterinarians;
pub mod api;
pub mod health;
pub mod shared;

// Test helpers module - only compiled with feature flag
#[cfg(feature = "test-helpers")]
mod test_helpers;

use crate::accounts::adapter::outgoing::{UserQueryPostgres, UserRepositoryPostgres};
use crate::accounts::application::account_use_cases::AccountUseCases;
use crate::accounts::application::helpers::RoleGuard;
use crate::accounts::application::ports::outgoing::{UserQuery, UserRepository};
use crate::accounts::application::services::{
    CreateProfileService, DeleteUserService, FetchProfileService, UpdateProfileService,
};
use crate::appointments::adapter::outgoing::{
    AppointmentQueryPostgres, AppointmentRepositoryPostgres,
};
use crate::appointments::application::appointment_use_cases::AppointmentUseCases;
use crate::appointments::application::ports::outgoing::{AppointmentQuery, AppointmentRepository};
use crate::appointments::application::services::{
    BookAppointmentService, GetAppointmentService, GetUserAppointmentsService,
    GetVetAppointmentsService, TransitionAppointmentService,
};
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::dashboard::application::dashboard_use_cases::DashboardUseCases;
use crate::dashboard::application::services::{GetDashboardStatsService, GetRecentActivityService};
use crate::messaging::adapter::outgoing::{MessageQueryPostgres, MessageRepositoryPostgres};
use crate::messaging::application::messaging_use_cases::MessagingUseCases;
use crate::messaging::application::ports::outgoing::{MessageQuery, MessageRepository};
use crate::messaging::application::services::{
    GetConversationsService, GetThreadService, MarkMessageReadService, SendMessageService,
};
use crate::veterinarians::adapter::outgoing::{VetQueryPostgres, VetRepositoryPostgres};
use crate::veterinarians::application::ports::outgoing::{VetQuery, VetRepository};
use crate::veterinarians::application::services::{
    GetVeterinarianService, GetVeterinariansService, RegisterVetService, ReviewVetService,
    UpdateVetProfileService,
};
use crate::veterinarians::application::vet_use_cases::VetUseCases;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub accounts: AccountUseCases,
    pub veterinarians: VetUseCases,
    pub appointments: AppointmentUseCases,
    pub messaging: MessagingUseCases,
    pub dashboard: DashboardUseCases,
    pub role_guard: Arc<RoleGuard>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // SAFETY GUARD: Prevent test-helpers in production
    #[cfg(feature = "test-helpers")]
    {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        if env == "production" {
            panic!("FATAL: test-helpers feature enabled in production environment!");
        }
        tracing::warn!("Test helper routes are ENABLED for environment: {}", env);
    }

    let env_name = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    let server_url = format!("{host}:{port}");
    println!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Outgoing adapters
    let user_repo: Arc<dyn UserRepository + Send + Sync> =
        Arc::new(UserRepositoryPostgres::new(Arc::clone(&db_arc)));
    let user_query: Arc<dyn UserQuery + Send + Sync> =
        Arc::new(UserQueryPostgres::new(Arc::clone(&db_arc)));
    let vet_repo: Arc<dyn VetRepository + Send + Sync> =
        Arc::new(VetRepositoryPostgres::new(Arc::clone(&db_arc)));
    let vet_query: Arc<dyn VetQuery + Send + Sync> =
        Arc::new(VetQueryPostgres::new(Arc::clone(&db_arc)));
    let appointment_repo: Arc<dyn AppointmentRepository + Send + Sync> =
        Arc::new(AppointmentRepositoryPostgres::new(Arc::clone(&db_arc)));
    let appointment_query: Arc<dyn AppointmentQuery + Send + Sync> =
        Arc::new(AppointmentQueryPostgres::new(Arc::clone(&db_arc)));
    let message_repo: Arc<dyn MessageRepository + Send + Sync> =
        Arc::new(MessageRepositoryPostgres::new(Arc::clone(&db_arc)));
    let message_query: Arc<dyn MessageQuery + Send + Sync> =
        Arc::new(MessageQueryPostgres::new(Arc::clone(&db_arc)));

    // Use cases
    let state = AppState {
        accounts: AccountUseCases {
            create_profile: Arc::new(CreateProfileService::new(Arc::clone(&user_repo))),
            fetch_profile: Arc::new(FetchProfileService::new(Arc::clone(&user_query))),
            update_profile: Arc::new(UpdateProfileService::new(Arc::clone(&user_repo))),
            delete_user: Arc::new(DeleteUserService::new(Arc::clone(&user_repo))),
        },
        veterinarians: VetUseCases {
            register_vet: Arc::new(RegisterVetService::new(Arc::clone(&vet_repo))),
            get_veterinarians: Arc::new(GetVeterinariansService::new(Arc::clone(&vet_query))),
            get_veterinarian: Arc::new(GetVeterinarianService::new(Arc::clone(&vet_query))),
            review_vet: Arc::new(ReviewVetService::new(Arc::clone(&vet_repo))),
            update_vet_profile: Arc::new(UpdateVetProfileService::new(
                Arc::clone(&vet_repo),
                Arc::clone(&vet_query),
            )),
        },
        appointments: AppointmentUseCases {
            book_appointment: Arc::new(BookAppointmentService::new(
                Arc::clone(&appointment_repo),
                Arc::clone(&vet_query),
            )),
            get_appointment: Arc::new(GetAppointmentService::new(Arc::clone(&appointment_query))),
            get_user_appointments: Arc::new(GetUserAppointmentsService::new(Arc::clone(
                &appointment_query,
            ))),
            get_vet_appointments: Arc::new(GetVetAppointmentsService::new(Arc::clone(
                &appointment_query,
            ))),
            transition_appointment: Arc::new(TransitionAppointmentService::new(
                Arc::clone(&appointment_repo),
                Arc::clone(&appointment_query),
            )),
        },
        messaging: MessagingUseCases {
            send_message: Arc::new(SendMessageService::new(Arc::clone(&message_repo))),
            get_thread: Arc::new(GetThreadService::new(Arc::clone(&message_query))),
            get_conversations: Arc::new(GetConversationsService::new(Arc::clone(&message_query))),
            mark_message_read: Arc::new(MarkMessageReadService::new(
                Arc::clone(&message_repo),
                Arc::clone(&message_query),
            )),
        },
        dashboard: DashboardUseCases {
            get_stats: Arc::new(GetDashboardStatsService::new(
                Arc::clone(&user_query),
                Arc::clone(&appointment_query),
                Arc::clone(&vet_query),
            )),
            get_recent_activity: Arc::new(GetRecentActivityService::new(
                Arc::clone(&user_query),
                Arc::clone(&appointment_query),
                Arc::clone(&vet_query),
            )),
        },
        role_guard: Arc::new(RoleGuard::new(Arc::clone(&user_query))),
    };

    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);

    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        let mut app = App::new()
            .app_data(crate::shared::api::custom_json_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", crate::api::openapi::ApiDoc::openapi()),
            )
            .configure(init_routes);

        // Conditionally add test routes
        #[cfg(feature = "test-helpers")]
        {
            app = app.configure(test_helpers::configure_routes);
        }

        app
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Profile
    cfg.service(crate::accounts::adapter::incoming::web::routes::create_profile_handler);
    cfg.service(crate::accounts::adapter::incoming::web::routes::fetch_own_profile_handler);
    cfg.service(crate::accounts::adapter::incoming::web::routes::fetch_profile_handler);
    cfg.service(crate::accounts::adapter::incoming::web::routes::update_profile_handler);
    cfg.service(crate::accounts::adapter::incoming::web::routes::delete_user_handler);
    // Veterinarians
    cfg.service(crate::veterinarians::adapter::incoming::web::routes::register_vet_handler);
    cfg.service(crate::veterinarians::adapter::incoming::web::routes::get_veterinarians_handler);
    cfg.service(crate::veterinarians::adapter::incoming::web::routes::get_veterinarian_handler);
    cfg.service(crate::veterinarians::adapter::incoming::web::routes::review_vet_handler);
    cfg.service(crate::veterinarians::adapter::incoming::web::routes::update_vet_profile_handler);
    // Appointments. The vet listing route is registered before the
    // by-id route so "vet" is not read as an appointment id.
    cfg.service(crate::appointments::adapter::incoming::web::routes::book_appointment_handler);
    cfg.service(crate::appointments::adapter::incoming::web::routes::get_user_appointments_handler);
    cfg.service(crate::appointments::adapter::incoming::web::routes::get_vet_appointments_handler);
    cfg.service(crate::appointments::adapter::incoming::web::routes::get_appointment_handler);
    cfg.service(crate::appointments::adapter::incoming::web::routes::approve_appointment_handler);
    cfg.service(crate::appointments::adapter::incoming::web::routes::confirm_appointment_handler);
    cfg.service(crate::appointments::adapter::incoming::web::routes::complete_appointment_handler);
    cfg.service(crate::appointments::adapter::incoming::web::routes::cancel_appointment_handler);
    cfg.service(
        crate::appointments::adapter::incoming::web::routes::reschedule_appointment_handler,
    );
    // Messaging
    cfg.service(crate::messaging::adapter::incoming::web::routes::send_message_handler);
    cfg.service(crate::messaging::adapter::incoming::web::routes::get_conversations_handler);
    cfg.service(crate::messaging::adapter::incoming::web::routes::mark_message_read_handler);
    cfg.service(crate::messaging::adapter::incoming::web::routes::get_thread_handler);
    // Admin dashboard
    cfg.service(crate::dashboard::adapter::incoming::web::routes::get_stats_handler);
    cfg.service(crate::dashboard::adapter::incoming::web::routes::get_recent_activity_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
