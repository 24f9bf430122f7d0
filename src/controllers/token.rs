use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::error::Error;
use crate::types::Identity;

const ISSUER: &str = "acmeauth";

#[derive(Deserialize, Serialize, Debug)]
pub(crate) struct Claims {
    pub(crate) exp: usize,
    pub(crate) iat: usize,
    pub(crate) sub: String,
    pub(crate) iss: String,
}

/// Issues and verifies the stateless bearer tokens. The signing secret is
/// turned into keys once at startup and never leaves this struct.
#[derive(Clone)]
pub(crate) struct TokenController {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_seconds: i64,
}

impl std::fmt::Debug for TokenController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenController")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}

impl TokenController {
    pub(crate) fn new(secret: &str, ttl_seconds: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl_seconds,
        }
    }

    pub(crate) fn issue(&self, user: &Identity) -> Result<String, Error> {
        let current_time = Utc::now();
        let expiration_time = current_time + Duration::seconds(self.ttl_seconds);

        let claims = Claims {
            exp: expiration_time.timestamp() as usize,
            iat: current_time.timestamp() as usize,
            sub: user.id.to_string(),
            iss: ISSUER.into(),
        };

        Ok(jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &self.encoding_key,
        )?)
    }

    /// Decodes a presented token back to the subject user id. Malformed
    /// tokens, bad signatures, expired tokens, and subjects that aren't
    /// UUIDs all collapse to `NotAuthorized`.
    pub(crate) fn verify(&self, token: &str) -> Result<Uuid, Error> {
        let token_data =
            jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &Validation::default())
                .map_err(|_| Error::NotAuthorized)?;

        Uuid::parse_str(&token_data.claims.sub).map_err(|_| Error::NotAuthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    fn controller() -> TokenController {
        TokenController::new(SECRET, 3600)
    }

    fn alice() -> Identity {
        Identity {
            id: Uuid::new_v4(),
            username: "alice".into(),
        }
    }

    fn forge(sub: &str) -> String {
        let current_time = Utc::now();

        let claims = Claims {
            exp: (current_time + Duration::seconds(3600)).timestamp() as usize,
            iat: current_time.timestamp() as usize,
            sub: sub.into(),
            iss: ISSUER.into(),
        };

        jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn issue_then_verify_round_trips_the_user_id() {
        let tokens = controller();
        let user = alice();

        let token = tokens.issue(&user).unwrap();

        assert_eq!(tokens.verify(&token).unwrap(), user.id);
    }

    #[test]
    fn tampered_signature_is_rejected() {
        let tokens = controller();

        let token = tokens.issue(&alice()).unwrap();
        let (payload, signature) = token.rsplit_once('.').unwrap();
        let flipped = if signature.starts_with('A') { "B" } else { "A" };
        let tampered = format!("{}.{}{}", payload, flipped, &signature[1..]);

        assert!(matches!(tokens.verify(&tampered), Err(Error::NotAuthorized)));
    }

    #[test]
    fn token_signed_with_another_secret_is_rejected() {
        let tokens = controller();
        let others = TokenController::new("another-secret", 3600);

        let token = others.issue(&alice()).unwrap();

        assert!(matches!(tokens.verify(&token), Err(Error::NotAuthorized)));
    }

    #[test]
    fn garbage_input_is_rejected() {
        let tokens = controller();

        assert!(matches!(tokens.verify("garbage"), Err(Error::NotAuthorized)));
        assert!(matches!(tokens.verify(""), Err(Error::NotAuthorized)));
    }

    #[test]
    fn expired_token_is_rejected() {
        // Past the default 60s validation leeway.
        let tokens = TokenController::new(SECRET, -120);

        let token = tokens.issue(&alice()).unwrap();

        assert!(matches!(tokens.verify(&token), Err(Error::NotAuthorized)));
    }

    #[test]
    fn non_uuid_subject_is_rejected() {
        let tokens = controller();

        assert!(matches!(
            tokens.verify(&forge("not-a-uuid")),
            Err(Error::NotAuthorized)
        ));
        assert!(matches!(tokens.verify(&forge("")), Err(Error::NotAuthorized)));
    }

    #[test]
    fn payload_without_a_subject_is_rejected() {
        #[derive(Serialize)]
        struct NoSubject {
            exp: usize,
            iat: usize,
            iss: String,
        }

        let current_time = Utc::now();
        let claims = NoSubject {
            exp: (current_time + Duration::seconds(3600)).timestamp() as usize,
            iat: current_time.timestamp() as usize,
            iss: ISSUER.into(),
        };

        let token = jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert!(matches!(
            controller().verify(&token),
            Err(Error::NotAuthorized)
        ));
    }
}
