mod create_profile_use_case;
mod delete_user_use_case;
mod fetch_profile_use_case;
mod update_profile_use_case;

pub use create_profile_use_case::{
    CreateProfileCommand, CreateProfileCommandError, CreateProfileError, CreateProfileUseCase,
};
pub use delete_user_use_case::{DeleteUserError, DeleteUserUseCase};
pub use fetch_profile_use_case::{FetchProfileError, FetchProfileUseCase};
pub use update_profile_use_case::{
    UpdateProfileCommand, UpdateProfileCommandError, UpdateProfileError, UpdateProfileUseCase,
};
