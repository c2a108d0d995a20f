use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::WebError;

/// Claims we care about from the identity provider's access token. The
/// subject is the user id; everything else the provider puts in the token
/// is ignored.
#[derive(Debug, Deserialize)]
struct Claims {
    sub: String,
    #[allow(dead_code)]
    exp: usize,
}

/// The authenticated user, injected into request extensions by
/// [`require_auth`].
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub Uuid);

/// Validates bearer tokens issued by the external identity provider. The
/// API never issues tokens itself; it only checks the signature and expiry
/// against the provider's shared secret.
#[derive(Clone)]
pub struct AuthVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl AuthVerifier {
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    fn verify(&self, token: &str) -> Result<Uuid, WebError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                tracing::warn!("Rejected bearer token: {}", e);
                WebError::Unauthorized
            })?;

        token_data
            .claims
            .sub
            .parse()
            .map_err(|_| WebError::Unauthorized)
    }
}

pub async fn require_auth(
    State(verifier): State<AuthVerifier>,
    mut req: Request,
    next: Next,
) -> Result<Response, WebError> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(WebError::Unauthorized)?;

    let user_id = verifier.verify(token)?;
    req.extensions_mut().insert(AuthUser(user_id));

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serde::Serialize;

    #[derive(Serialize)]
    struct TestClaims {
        sub: String,
        exp: usize,
    }

    fn token(secret: &str, sub: &str, exp: usize) -> String {
        encode(
            &Header::default(),
            &TestClaims { sub: sub.to_string(), exp },
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn far_future() -> usize {
        4102444800 // 2100-01-01
    }

    #[test]
    fn test_accepts_valid_token() {
        let verifier = AuthVerifier::new("secret");
        let user_id = Uuid::new_v4();
        let token = token("secret", &user_id.to_string(), far_future());

        assert_eq!(verifier.verify(&token).unwrap(), user_id);
    }

    #[test]
    fn test_rejects_wrong_secret() {
        let verifier = AuthVerifier::new("secret");
        let token = token("other", &Uuid::new_v4().to_string(), far_future());

        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn test_rejects_non_uuid_subject() {
        let verifier = AuthVerifier::new("secret");
        let token = token("secret", "not-a-uuid", far_future());

        assert!(verifier.verify(&token).is_err());
    }
}
