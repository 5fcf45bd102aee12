pub mod create_profile;
pub mod delete_user;
pub mod fetch_profile;
pub mod update_profile;

pub use create_profile::{create_profile_handler, CreateProfileRequest};
pub use delete_user::delete_user_handler;
pub use fetch_profile::{fetch_own_profile_handler, fetch_profile_handler};
pub use update_profile::update_profile_handler;
