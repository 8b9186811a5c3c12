use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use crate::core::error::{ConfigError, Error};
use crate::store::credentials::CredentialStore;
use crate::types::response::AccessToken;
use crate::types::{Claims, Credential};

const ALGORITHM: Algorithm = Algorithm::HS256;

#[derive(Clone)]
pub(crate) struct AuthGateway {
    store: Arc<dyn CredentialStore>,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    token_ttl: Option<Duration>,
    dummy_hash: String,
}

impl std::fmt::Debug for AuthGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthGateway")
            .field("algorithm", &ALGORITHM)
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}

impl AuthGateway {
    pub(crate) fn new(
        store: Arc<dyn CredentialStore>,
        secret: &str,
        token_ttl: Option<Duration>,
        bcrypt_cost: u32,
    ) -> Result<Self, ConfigError> {
        let mut validation = Validation::new(ALGORITHM);

        match token_ttl {
            Some(_) => {
                validation.required_spec_claims =
                    HashSet::from(["exp".to_owned(), "sub".to_owned()]);
            }
            None => {
                validation.validate_exp = false;
                validation.required_spec_claims = HashSet::from(["sub".to_owned()]);
            }
        }

        Ok(Self {
            store,
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            token_ttl,
            dummy_hash: bcrypt::hash("", bcrypt_cost)?,
        })
    }

    /// Unknown users and wrong passwords fail the same way, and both pay for
    /// one bcrypt verification.
    pub(crate) fn authenticate(&self, username: &str, password: &str) -> Result<Credential, Error> {
        let Some(credential) = self.store.lookup_by_username(username) else {
            bcrypt::verify(password, &self.dummy_hash)?;
            return Err(Error::InvalidCredentials);
        };

        match bcrypt::verify(password, &credential.password_hash)? {
            true => Ok(credential),
            false => Err(Error::InvalidCredentials),
        }
    }

    pub(crate) fn issue_token(&self, credential: &Credential) -> Result<AccessToken, Error> {
        let current_time = Utc::now();

        let iat = current_time.timestamp() as u64;
        let exp = self.token_ttl.map(|ttl| iat.saturating_add(ttl.as_secs()));

        let claims = Claims {
            sub: credential.username.clone(),
            role: credential.role,
            iat,
            exp,
        };

        let token = jsonwebtoken::encode(&Header::new(ALGORITHM), &claims, &self.encoding_key)?;

        Ok(AccessToken::bearer(token))
    }

    pub(crate) fn decode_jwt(&self, token: &str) -> Result<Claims, Error> {
        match jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(token_data) => Ok(token_data.claims),
            Err(e) => {
                match e.kind() {
                    ErrorKind::ExpiredSignature => tracing::debug!("Expired token"),
                    _ => tracing::debug!("Rejected token: {}", e),
                }
                Err(Error::Unauthenticated)
            }
        }
    }

    pub(crate) fn validate_token(&self, token: &str) -> Result<Credential, Error> {
        let claims = self.decode_jwt(token)?;

        self.store
            .lookup_by_username(&claims.sub)
            .ok_or(Error::Unauthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SeedUser;
    use crate::store::credentials::MemoryCredentialStore;
    use crate::types::Role;
    use serde_json::json;

    const SECRET: &str = "test-secret";

    fn store() -> Arc<dyn CredentialStore> {
        let seed = [
            SeedUser {
                username: "admin".into(),
                password: "1234".into(),
                role: Role::Admin,
            },
            SeedUser {
                username: "ana".into(),
                password: "consulta".into(),
                role: Role::Clinician,
            },
        ];

        Arc::new(MemoryCredentialStore::from_seed(&seed, 4).unwrap())
    }

    fn gateway() -> AuthGateway {
        AuthGateway::new(store(), SECRET, Some(Duration::from_secs(3600)), 4).unwrap()
    }

    fn sign(claims: serde_json::Value, algorithm: Algorithm, secret: &str) -> String {
        jsonwebtoken::encode(
            &Header::new(algorithm),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_authenticate() {
        let gateway = gateway();

        let admin = gateway.authenticate("admin", "1234").unwrap();
        assert_eq!(admin.username, "admin");
        assert_eq!(admin.role, Role::Admin);

        let ana = gateway.authenticate("ana", "consulta").unwrap();
        assert_eq!(ana.role, Role::Clinician);
    }

    #[test]
    fn test_authenticate_failures_are_indistinguishable() {
        let gateway = gateway();

        let wrong_password = gateway.authenticate("admin", "wrong").unwrap_err();
        let unknown_user = gateway.authenticate("ghost", "x").unwrap_err();
        let swapped = gateway.authenticate("ana", "1234").unwrap_err();

        assert!(matches!(wrong_password, Error::InvalidCredentials));
        assert!(matches!(unknown_user, Error::InvalidCredentials));
        assert!(matches!(swapped, Error::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
    }

    #[test]
    fn test_token_round_trip() {
        let gateway = gateway();

        for (username, password) in [("admin", "1234"), ("ana", "consulta")] {
            let credential = gateway.authenticate(username, password).unwrap();
            let token = gateway.issue_token(&credential).unwrap();

            assert_eq!(token.token_type, "bearer");
            assert_eq!(gateway.validate_token(&token.access_token).unwrap(), credential);
        }
    }

    #[test]
    fn test_token_claims() {
        let gateway = gateway();
        let credential = gateway.authenticate("admin", "1234").unwrap();
        let token = gateway.issue_token(&credential).unwrap();

        let claims = gateway.decode_jwt(&token.access_token).unwrap();
        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.role, Role::Admin);
        assert_eq!(claims.exp, Some(claims.iat + 3600));
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let gateway = gateway();
        let credential = gateway.authenticate("admin", "1234").unwrap();
        let token = gateway.issue_token(&credential).unwrap().access_token;

        for i in 0..token.len() {
            let mut bytes = token.clone().into_bytes();
            bytes[i] = if bytes[i] == b'A' { b'B' } else { b'A' };
            let tampered = String::from_utf8(bytes).unwrap();

            assert!(
                matches!(gateway.validate_token(&tampered), Err(Error::Unauthenticated)),
                "tampering byte {} was accepted",
                i
            );
        }
    }

    #[test]
    fn test_token_signed_with_other_key_is_rejected() {
        let gateway = gateway();
        let exp = Utc::now().timestamp() + 3600;
        let token = sign(
            json!({ "sub": "admin", "role": "admin", "iat": 0, "exp": exp }),
            Algorithm::HS256,
            "another-secret",
        );

        assert!(matches!(gateway.validate_token(&token), Err(Error::Unauthenticated)));
    }

    #[test]
    fn test_token_with_other_algorithm_is_rejected() {
        let gateway = gateway();
        let exp = Utc::now().timestamp() + 3600;
        let token = sign(
            json!({ "sub": "admin", "role": "admin", "iat": 0, "exp": exp }),
            Algorithm::HS512,
            SECRET,
        );

        assert!(matches!(gateway.validate_token(&token), Err(Error::Unauthenticated)));
    }

    #[test]
    fn test_token_missing_claims_is_rejected() {
        let gateway = gateway();
        let exp = Utc::now().timestamp() + 3600;

        let no_role = sign(
            json!({ "sub": "admin", "iat": 0, "exp": exp }),
            Algorithm::HS256,
            SECRET,
        );
        let no_sub = sign(
            json!({ "role": "admin", "iat": 0, "exp": exp }),
            Algorithm::HS256,
            SECRET,
        );

        assert!(matches!(gateway.validate_token(&no_role), Err(Error::Unauthenticated)));
        assert!(matches!(gateway.validate_token(&no_sub), Err(Error::Unauthenticated)));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let gateway = gateway();
        let exp = Utc::now().timestamp() - 3600;
        let token = sign(
            json!({ "sub": "admin", "role": "admin", "iat": exp - 60, "exp": exp }),
            Algorithm::HS256,
            SECRET,
        );

        assert!(matches!(gateway.validate_token(&token), Err(Error::Unauthenticated)));
    }

    #[test]
    fn test_malformed_token_is_rejected() {
        let gateway = gateway();

        for token in ["", "not-a-token", "a.b.c", "...."] {
            assert!(matches!(gateway.validate_token(token), Err(Error::Unauthenticated)));
        }
    }

    #[test]
    fn test_unknown_subject_is_rejected() {
        let issuer = gateway();
        let credential = issuer.authenticate("admin", "1234").unwrap();
        let token = issuer.issue_token(&credential).unwrap().access_token;

        let empty_store: Arc<dyn CredentialStore> = Arc::new(MemoryCredentialStore::default());
        let validator =
            AuthGateway::new(empty_store, SECRET, Some(Duration::from_secs(3600)), 4).unwrap();

        assert!(matches!(validator.validate_token(&token), Err(Error::Unauthenticated)));
    }

    #[test]
    fn test_non_expiring_tokens() {
        let gateway = AuthGateway::new(store(), SECRET, None, 4).unwrap();
        let credential = gateway.authenticate("admin", "1234").unwrap();
        let token = gateway.issue_token(&credential).unwrap().access_token;

        assert!(gateway.decode_jwt(&token).unwrap().exp.is_none());
        assert_eq!(gateway.validate_token(&token).unwrap(), credential);

        // Tokens carrying only sub and role stay valid.
        let bare = sign(json!({ "sub": "admin", "role": "admin" }), Algorithm::HS256, SECRET);
        assert_eq!(gateway.validate_token(&bare).unwrap(), credential);
    }

    #[test]
    fn test_huge_ttl_saturates() {
        let gateway = AuthGateway::new(store(), SECRET, Some(Duration::from_secs(u64::MAX)), 4)
            .unwrap();
        let credential = gateway.authenticate("admin", "1234").unwrap();
        let token = gateway.issue_token(&credential).unwrap().access_token;

        assert_eq!(gateway.decode_jwt(&token).unwrap().exp, Some(u64::MAX));
        assert_eq!(gateway.validate_token(&token).unwrap(), credential);
    }

    #[test]
    fn test_expiring_gateway_requires_exp() {
        let gateway = gateway();
        let token = sign(json!({ "sub": "admin", "role": "admin" }), Algorithm::HS256, SECRET);

        assert!(matches!(gateway.validate_token(&token), Err(Error::Unauthenticated)));
    }
}
