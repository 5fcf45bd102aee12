use std::sync::Arc;

use crate::accounts::application::ports::incoming::use_cases::{
    CreateProfileUseCase, DeleteUserUseCase, FetchProfileUseCase, UpdateProfileUseCase,
};

#[derive(Clone)]
pub struct AccountUseCases {
    pub create_profile: Arc<dyn CreateProfileUseCase + Send + Sync>,
    pub fetch_profile: Arc<dyn FetchProfileUseCase + Send + Sync>,
    pub update_profile: Arc<dyn UpdateProfileUseCase + Send + Sync>,
    pub delete_user: Arc<dyn DeleteUserUseCase + Send + Sync>,
}
