use serde::{Deserialize, Serialize};

use crate::types::{Credential, Role, Username};

pub(crate) const TOKEN_TYPE: &str = "bearer";

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct AccessToken {
    pub(crate) access_token: String,
    pub(crate) token_type: String,
}

impl AccessToken {
    pub(crate) fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: TOKEN_TYPE.to_owned(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub(crate) struct Principal {
    pub(crate) username: Username,
    pub(crate) role: Role,
}

impl From<&Credential> for Principal {
    fn from(credential: &Credential) -> Self {
        Self {
            username: credential.username.clone(),
            role: credential.role,
        }
    }
}

#[derive(Serialize)]
pub(crate) struct Status {
    pub(crate) message: &'static str,
}
