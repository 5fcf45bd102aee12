mod create_profile_service;
mod delete_user_service;
mod fetch_profile_service;
mod update_profile_service;

pub use create_profile_service::CreateProfileService;
pub use delete_user_service::DeleteUserService;
pub use fetch_profile_service::FetchProfileService;
pub use update_profile_service::UpdateProfileService;
