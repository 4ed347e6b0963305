//! Bearer token verification and signing.
//!
//! Tokens are JWTs carrying a `permissions` array claim. Verification checks
//! the signature (HS256 shared secret or RS256 public key), expiry, issuer and
//! audience; anything else about the token is left to the guard.

use std::fmt;

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::AuthError;
use crate::config::ConfigError;

const INCORRECT_CLAIMS: &str = "Incorrect claims. Please, check the audience and issuer.";
const MISSING_PERMISSIONS: &str = "Permissions not included in JWT.";

/// Key material used to verify token signatures.
#[derive(Clone)]
pub enum VerificationKey {
    /// HMAC-SHA256 shared secret. Also allows this service to sign tokens.
    Hs256 { secret: String },
    /// RSA public key in PEM form, for tokens signed by an external issuer.
    Rs256 { public_key_pem: String },
}

impl VerificationKey {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            VerificationKey::Hs256 { .. } => Algorithm::HS256,
            VerificationKey::Rs256 { .. } => Algorithm::RS256,
        }
    }

    fn decoding_key(&self) -> Result<DecodingKey, jsonwebtoken::errors::Error> {
        match self {
            VerificationKey::Hs256 { secret } => Ok(DecodingKey::from_secret(secret.as_bytes())),
            VerificationKey::Rs256 { public_key_pem } => {
                DecodingKey::from_rsa_pem(public_key_pem.as_bytes())
            }
        }
    }
}

impl fmt::Debug for VerificationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Key material stays out of logs.
        match self {
            VerificationKey::Hs256 { .. } => f.write_str("Hs256(..)"),
            VerificationKey::Rs256 { .. } => f.write_str("Rs256(..)"),
        }
    }
}

/// Configuration for JWT validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Expected `iss` claim.
    pub issuer: String,
    /// Expected `aud` claim.
    pub audience: String,
    pub key: VerificationKey,
}

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var              | Required                 |
    /// |----------------------|--------------------------|
    /// | `JWT_ISSUER`         | yes                      |
    /// | `JWT_AUDIENCE`       | yes                      |
    /// | `JWT_SECRET`         | one of these two         |
    /// | `JWT_PUBLIC_KEY_PEM` | one of these two         |
    pub fn from_env() -> Result<Self, ConfigError> {
        let issuer = crate::config::required("JWT_ISSUER")?;
        let audience = crate::config::required("JWT_AUDIENCE")?;
        let secret = crate::config::optional("JWT_SECRET");
        let public_key_pem = crate::config::optional("JWT_PUBLIC_KEY_PEM");

        let key = match (secret, public_key_pem) {
            (Some(secret), None) => VerificationKey::Hs256 { secret },
            (None, Some(public_key_pem)) => {
                DecodingKey::from_rsa_pem(public_key_pem.as_bytes()).map_err(|e| {
                    ConfigError::Invalid {
                        var: "JWT_PUBLIC_KEY_PEM",
                        reason: e.to_string(),
                    }
                })?;
                VerificationKey::Rs256 { public_key_pem }
            }
            (Some(_), Some(_)) => {
                return Err(ConfigError::Invalid {
                    var: "JWT_SECRET",
                    reason: "set either JWT_SECRET or JWT_PUBLIC_KEY_PEM, not both".into(),
                })
            }
            (None, None) => return Err(ConfigError::Missing("JWT_SECRET or JWT_PUBLIC_KEY_PEM")),
        };

        Ok(Self {
            issuer,
            audience,
            key,
        })
    }
}

/// The `aud` claim, which issuers send either as a string or an array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Audience {
    One(String),
    Many(Vec<String>),
}

/// Decoded token payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject -- the caller's identity at the issuer. Optional; empty when absent.
    #[serde(default)]
    pub sub: String,
    pub iss: String,
    pub aud: Audience,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
    /// Granted permission strings. Required on every accepted token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
}

impl Claims {
    pub fn permissions(&self) -> &[String] {
        self.permissions.as_deref().unwrap_or_default()
    }
}

/// Verify a token and return its claims.
///
/// Fails with [`AuthError::InvalidToken`] on a bad signature, an expired token,
/// an issuer or audience mismatch, or a token without a `permissions` claim.
pub fn validate_token(token: &str, config: &JwtConfig) -> Result<Claims, AuthError> {
    let key = config.key.decoding_key().map_err(|e| {
        tracing::error!(error = %e, "Configured verification key is unusable");
        AuthError::unparseable()
    })?;

    let mut validation = Validation::new(config.key.algorithm());
    validation.set_issuer(&[&config.issuer]);
    validation.set_audience(&[&config.audience]);
    validation.set_required_spec_claims(&["exp", "iss", "aud"]);

    let claims = decode::<Claims>(token, &key, &validation)
        .map_err(classify)?
        .claims;

    if claims.permissions.is_none() {
        return Err(AuthError::invalid_claims(MISSING_PERMISSIONS));
    }
    Ok(claims)
}

fn classify(err: jsonwebtoken::errors::Error) -> AuthError {
    match err.kind() {
        ErrorKind::ExpiredSignature => AuthError::token_expired(),
        ErrorKind::InvalidIssuer | ErrorKind::InvalidAudience | ErrorKind::MissingRequiredClaim(_) => {
            AuthError::invalid_claims(INCORRECT_CLAIMS)
        }
        _ => AuthError::unparseable(),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TokenIssueError {
    #[error("signing tokens requires JWT_SECRET (HS256)")]
    UnsupportedKey,

    #[error("failed to encode token: {0}")]
    Encode(#[from] jsonwebtoken::errors::Error),
}

/// Sign arbitrary claims with the configured HS256 secret.
pub fn sign(claims: &Claims, config: &JwtConfig) -> Result<String, TokenIssueError> {
    let VerificationKey::Hs256 { secret } = &config.key else {
        return Err(TokenIssueError::UnsupportedKey);
    };
    Ok(encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?)
}

/// Issue a token for `subject` carrying `permissions`, valid for `ttl`.
///
/// The issuer and audience come from `config`, so the result passes
/// [`validate_token`] with the same configuration.
pub fn issue_token<S: AsRef<str>>(
    subject: &str,
    permissions: &[S],
    ttl: chrono::Duration,
    config: &JwtConfig,
) -> Result<String, TokenIssueError> {
    let now = chrono::Utc::now();
    let claims = Claims {
        sub: subject.to_string(),
        iss: config.issuer.clone(),
        aud: Audience::One(config.audience.clone()),
        exp: (now + ttl).timestamp(),
        iat: Some(now.timestamp()),
        jti: Some(Uuid::new_v4().to_string()),
        permissions: Some(permissions.iter().map(|p| p.as_ref().to_string()).collect()),
    };
    sign(&claims, config)
}
