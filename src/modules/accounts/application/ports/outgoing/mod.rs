mod user_query;
mod user_repository;

pub use user_query::UserQuery;
pub use user_repository::{
    NewUserProfile, UpdateUserProfileData, UserProfileRecord, UserRepository,
    UserRepositoryError,
};
