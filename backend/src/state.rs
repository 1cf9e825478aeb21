//! Read-only state shared by every request handler.

use std::sync::Arc;

use crate::config::Config;
use crate::repositories::user_repository::{AdminUserRepository, UserRepository};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    /// State backed by the configured administrator credential.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let users = Arc::new(AdminUserRepository::new(config.clone()));
        Self { config, users }
    }
}
