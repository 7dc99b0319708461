//! In-memory identity directory for tests and local development.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::{IdentityError, IdentityService, UserProfile};

/// Mock users service. Unknown ids fail the way a 404 from the real
/// service does.
#[derive(Debug, Clone)]
pub struct MockIdentityService {
    users: Arc<Mutex<HashMap<i64, UserProfile>>>,
    lookups: Arc<Mutex<Vec<(i64, Option<String>)>>>,
    recording: bool,
}

impl MockIdentityService {
    pub fn new() -> Self {
        Self {
            users: Arc::new(Mutex::new(HashMap::new())),
            lookups: Arc::new(Mutex::new(Vec::new())),
            recording: true,
        }
    }

    /// Create a mock that does not keep a lookup history.
    pub fn non_recording() -> Self {
        Self {
            recording: false,
            ..Self::new()
        }
    }

    /// Register a user with a derived email address.
    pub fn with_user(self, id: i64, username: &str) -> Self {
        self.insert(UserProfile {
            id,
            username: username.to_string(),
            email: format!("{}@example.com", username),
        });
        self
    }

    pub fn insert(&self, profile: UserProfile) {
        self.users
            .lock()
            .expect("users lock poisoned, prior test panicked")
            .insert(profile.id, profile);
    }

    /// Every `(user_id, bearer)` pair looked up so far, in call order.
    pub fn lookups(&self) -> Vec<(i64, Option<String>)> {
        self.lookups
            .lock()
            .expect("lookups lock poisoned, prior test panicked")
            .clone()
    }
}

#[async_trait::async_trait]
impl IdentityService for MockIdentityService {
    async fn fetch_user(
        &self,
        user_id: i64,
        bearer: Option<&str>,
    ) -> Result<UserProfile, IdentityError> {
        if self.recording {
            self.lookups
                .lock()
                .map_err(|e| IdentityError::Request(format!("lookups lock poisoned: {e}")))?
                .push((user_id, bearer.map(str::to_string)));
        }

        let users = self
            .users
            .lock()
            .map_err(|e| IdentityError::Request(format!("users lock poisoned: {e}")))?;

        users.get(&user_id).cloned().ok_or_else(|| {
            IdentityError::Response(format!("Users service returned 404 for user {}", user_id))
        })
    }
}

impl Default for MockIdentityService {
    fn default() -> Self {
        Self::new()
    }
}
