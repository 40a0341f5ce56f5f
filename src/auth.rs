//! Bearer tokens for test identities.
//!
//! Tokens are signed with the HMAC secret of an injected [`AuthConfig`], the same way the
//! backend signs its own access tokens, so a token from [`JwtIssuer::get_jwt`] is accepted by
//! the backend under test when both share a configuration.

use std::str::FromStr;

use chrono::Utc;
use dioxus_logger::tracing;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{
    config::AuthConfig,
    constant::BEARER_PREFIX,
    error::{config::ConfigError, TestError},
    sample_data::USER_ADDRESS,
};

/// Token payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub aud: String,
    pub iss: String,
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Clone)]
pub struct JwtIssuer {
    config: AuthConfig,
}

impl JwtIssuer {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Build the payload for `address`, issued now and expiring after the configured lifetime.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Payload ready to sign
    /// - `Err(TestError::ConfigError)` - The configured `expiresIn` is not a valid lifetime, or
    ///   expires past the latest representable timestamp
    pub fn claims_for(&self, address: &str) -> Result<Claims, TestError> {
        let jwt = &self.config.jwt;
        let now = Utc::now();
        let expires_in = jwt.expires_in.to_duration()?;
        let expires_at = now
            .checked_add_signed(expires_in)
            .ok_or_else(|| ConfigError::InvalidValue {
                key: "authentication.jwt.expiresIn".to_string(),
                reason: format!("{:?} expires past the latest timestamp", jwt.expires_in),
            })?;

        Ok(Claims {
            user_id: address.to_string(),
            aud: jwt.audience.clone(),
            iss: jwt.issuer.clone(),
            sub: jwt.subject.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        })
    }

    /// Sign `claims` with the configured algorithm, secret and header options.
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded token without the `Bearer ` prefix
    /// - `Err(TestError::ConfigError)` - The secret is empty
    /// - `Err(TestError::JwtError)` - Unknown algorithm or signing failure
    pub fn sign(&self, claims: &Claims) -> Result<String, TestError> {
        let algorithm = self.algorithm()?;

        let mut header = Header::new(algorithm);
        if let Some(typ) = &self.config.jwt.header.typ {
            header.typ = Some(typ.clone());
        }
        header.kid = self.config.jwt.header.kid.clone();

        let key = EncodingKey::from_secret(self.secret()?);

        Ok(encode(&header, claims, &key)?)
    }

    /// Issue an `Authorization` header value for `address`.
    ///
    /// # Arguments
    /// - `address` - User address placed in the `userId` claim
    ///
    /// # Returns
    /// - `Ok(String)` - `"Bearer <token>"`
    /// - `Err(TestError)` - See [`JwtIssuer::claims_for`] and [`JwtIssuer::sign`]
    pub fn get_jwt(&self, address: &str) -> Result<String, TestError> {
        let claims = self.claims_for(address)?;
        let token = self.sign(&claims)?;

        tracing::trace!(user_id = %claims.user_id, exp = claims.exp, "Issued test token");

        Ok(format!("{BEARER_PREFIX}{token}"))
    }

    /// Verify a token issued with this configuration and return its payload.
    ///
    /// Accepts the token with or without the `Bearer ` prefix. Signature, expiry, audience,
    /// issuer and subject are all checked.
    pub fn decode(&self, token: &str) -> Result<Claims, TestError> {
        let token = token.strip_prefix(BEARER_PREFIX).unwrap_or(token);
        let jwt = &self.config.jwt;

        let mut validation = Validation::new(self.algorithm()?);
        validation.set_audience(&[&jwt.audience]);
        validation.set_issuer(&[&jwt.issuer]);
        validation.sub = Some(jwt.subject.clone());
        validation.set_required_spec_claims(&["exp", "aud", "iss", "sub"]);

        let key = DecodingKey::from_secret(self.secret()?);
        let data = decode::<Claims>(token, &key, &validation)?;

        Ok(data.claims)
    }

    fn algorithm(&self) -> Result<Algorithm, TestError> {
        Ok(Algorithm::from_str(&self.config.jwt.algorithm)?)
    }

    fn secret(&self) -> Result<&[u8], ConfigError> {
        if self.config.secret.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "authentication.secret".to_string(),
                reason: "secret must have a value".to_string(),
            });
        }

        Ok(self.config.secret.as_bytes())
    }
}

/// Issue a bearer token for `address`, or for [`USER_ADDRESS`] when `None`.
///
/// Shorthand for `JwtIssuer::new(config.clone()).get_jwt(..)`.
pub fn get_jwt(config: &AuthConfig, address: Option<&str>) -> Result<String, TestError> {
    JwtIssuer::new(config.clone()).get_jwt(address.unwrap_or(USER_ADDRESS))
}
