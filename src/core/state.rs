// Application state (AppState)

use crate::core::config::Config;
use crate::core::error::ApiError;
use crate::stores::user_store::UserStore;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Shared application state
///
/// Handlers receive it as `State<Arc<AppState>>`. Every access to the user
/// store goes through the one `RwLock`; create and delete hold the write
/// guard for their whole check-then-mutate sequence.
pub struct AppState {
    /// User records
    pub users: Arc<RwLock<UserStore>>,

    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// State with the seeded user store
    pub fn new(config: Config) -> Self {
        Self::with_store(config, UserStore::with_seed())
    }

    pub fn with_store(config: Config, store: UserStore) -> Self {
        Self {
            users: Arc::new(RwLock::new(store)),
            config: Arc::new(config),
        }
    }

    pub fn read_users(&self) -> Result<RwLockReadGuard<'_, UserStore>, ApiError> {
        self.users.read().map_err(|_| ApiError::Unavailable)
    }

    pub fn write_users(&self) -> Result<RwLockWriteGuard<'_, UserStore>, ApiError> {
        self.users.write().map_err(|_| ApiError::Unavailable)
    }
}
