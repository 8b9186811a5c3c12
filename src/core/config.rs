use config::Config;
use serde::Deserialize;

use crate::core::error::ConfigError;
use crate::types::Role;

/// Ten years.
pub(crate) const MAX_TOKEN_TTL: u64 = 10 * 365 * 24 * 60 * 60;

#[derive(Debug, Deserialize, Clone)]
pub(crate) struct Args {
    pub(crate) port: u16,
    pub(crate) log_level: String,
    pub(crate) secret: String,
    pub(crate) users: String,
    /// Seconds; 0 issues tokens without an `exp` claim.
    pub(crate) token_ttl: u64,
    pub(crate) bcrypt_cost: u32,
    pub(crate) rate_limit: u64,
}

impl Args {
    pub(crate) fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("port", 8000)?
            .set_default("log_level", "info")?
            .set_default("token_ttl", 86400)?
            .set_default("bcrypt_cost", bcrypt::DEFAULT_COST)?
            .set_default("rate_limit", 50)?
            .add_source(config::File::with_name("sghss").required(false))
            .add_source(config::Environment::with_prefix("SGHSS"))
            .build()?;

        let args = config.try_deserialize::<Args>()?;
        args.validate()?;

        Ok(args)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.token_ttl > MAX_TOKEN_TTL {
            return Err(ConfigError::InvalidTokenTtl(self.token_ttl, MAX_TOKEN_TTL));
        }

        Ok(())
    }
}

#[derive(Clone)]
pub(crate) struct SeedUser {
    pub(crate) username: String,
    pub(crate) password: String,
    pub(crate) role: Role,
}

/// Parses `username:password:role` entries separated by commas. The password
/// may itself contain `:`.
pub(crate) fn parse_users(users: &str) -> Result<Vec<SeedUser>, ConfigError> {
    users
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let invalid = || ConfigError::InvalidUserEntry(redact(entry));

            let (username, rest) = entry.split_once(':').ok_or_else(invalid)?;
            let (password, role) = rest.rsplit_once(':').ok_or_else(invalid)?;

            if username.is_empty() || password.is_empty() {
                return Err(invalid());
            }

            Ok(SeedUser {
                username: username.to_owned(),
                password: password.to_owned(),
                role: role.parse()?,
            })
        })
        .collect()
}

fn redact(entry: &str) -> String {
    match entry.split_once(':') {
        Some((username, _)) => format!("{}:***", username),
        None => entry.to_owned(),
    }
}
