use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur while resolving the current session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Missing bearer token")]
    MissingToken,

    #[error("Invalid token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    #[error("Token subject is not a user id: {0}")]
    InvalidSubject(String),
}

/// Claims issued by the web app's session provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub exp: usize,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Identity of the signed-in user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub user_id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Verifies HS256 session tokens
pub struct SessionVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl SessionVerifier {
    pub fn new(secret: &str, leeway_secs: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = leeway_secs;

        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Resolve the user from an `Authorization` header value
    pub fn verify_header(&self, header: Option<&str>) -> Result<SessionUser, SessionError> {
        let token = header
            .and_then(|h| h.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(SessionError::MissingToken)?;

        self.verify(token)
    }

    pub fn verify(&self, token: &str) -> Result<SessionUser, SessionError> {
        let data = decode::<SessionClaims>(token, &self.key, &self.validation)?;
        let claims = data.claims;

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| SessionError::InvalidSubject(claims.sub.clone()))?;

        tracing::trace!("Verified session for user {}", user_id);

        Ok(SessionUser {
            user_id,
            name: claims.name,
            email: claims.email,
        })
    }
}
