use std::collections::HashMap;

use crate::core::config::SeedUser;
use crate::core::error::ConfigError;
use crate::types::Credential;

pub(crate) trait CredentialStore: Send + Sync {
    fn lookup_by_username(&self, username: &str) -> Option<Credential>;
}

/// Credentials built once at startup and only read afterwards.
#[derive(Debug, Default)]
pub(crate) struct MemoryCredentialStore {
    users: HashMap<String, Credential>,
}

impl MemoryCredentialStore {
    pub(crate) fn from_seed(seed: &[SeedUser], cost: u32) -> Result<Self, ConfigError> {
        let mut users = HashMap::with_capacity(seed.len());

        for user in seed {
            if users.contains_key(&user.username) {
                return Err(ConfigError::DuplicateUser(user.username.clone()));
            }

            let credential = Credential {
                username: user.username.clone(),
                password_hash: bcrypt::hash(&user.password, cost)?,
                role: user.role,
            };

            users.insert(user.username.clone(), credential);
        }

        tracing::info!("Loaded {} users", users.len());

        Ok(Self { users })
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn lookup_by_username(&self, username: &str) -> Option<Credential> {
        self.users.get(username).cloned()
    }
}
