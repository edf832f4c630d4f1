use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::Serialize;

use super::claims::Claims;
use super::errors::JwtError;
use super::settings::JwtSettings;

/// JWT token handler for issuing and verifying bearer tokens.
///
/// Tokens are HMAC-signed with a symmetric secret. The algorithm and the
/// token lifetime come from [`JwtSettings`] and never change after
/// construction.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl: Duration,
}

impl JwtHandler {
    /// Create a new JWT handler from settings.
    ///
    /// # Arguments
    /// * `settings` - Secret, algorithm identifier and token lifetime
    ///
    /// # Returns
    /// JwtHandler instance
    ///
    /// # Errors
    /// * `MissingSecret` - Secret is empty
    /// * `UnsupportedAlgorithm` - Algorithm is not one of HS256, HS384, HS512
    /// * `InvalidExpiration` - Lifetime is zero, negative, or too large to
    ///   add to the current time
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(settings: &JwtSettings) -> Result<Self, JwtError> {
        if settings.secret.is_empty() {
            return Err(JwtError::MissingSecret);
        }
        let ttl = Duration::try_minutes(settings.expiration_minutes)
            .filter(|ttl| *ttl > Duration::zero())
            .filter(|ttl| Utc::now().checked_add_signed(*ttl).is_some())
            .ok_or(JwtError::InvalidExpiration(settings.expiration_minutes))?;

        let algorithm = parse_algorithm(&settings.algorithm)?;
        let secret = settings.secret.as_bytes();

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm,
            ttl,
        })
    }

    /// Configured token lifetime.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token for `subject` with the configured lifetime.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, subject: &str) -> Result<String, JwtError> {
        self.issue_with_ttl(subject, self.ttl)
    }

    /// Issue a token for `subject` expiring `ttl` from now.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue_with_ttl(&self, subject: &str, ttl: Duration) -> Result<String, JwtError> {
        self.issue_at(subject, ttl, Utc::now())
    }

    /// Issue a token as of an explicit instant.
    ///
    /// # Errors
    /// * `EncodingFailed` - Expiry is out of range or token encoding failed
    pub fn issue_at(
        &self,
        subject: &str,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Result<String, JwtError> {
        let claims = Claims::for_subject(subject, ttl, now).ok_or_else(|| {
            JwtError::EncodingFailed(format!("Expiry out of range for lifetime {}", ttl))
        })?;

        self.encode(&claims)
    }

    /// Verify a token and return its subject.
    ///
    /// # Errors
    /// * `InvalidToken` - Token is malformed, tampered, signed with another
    ///   algorithm, lacks a subject or expiry, or has expired
    pub fn verify(&self, token: &str) -> Result<String, JwtError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify a token as of an explicit instant.
    ///
    /// # Errors
    /// * `InvalidToken` - See [`JwtHandler::verify`]
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<String, JwtError> {
        let claims = self.decode(token)?;

        if claims.is_expired(now.timestamp()) {
            tracing::debug!(exp = ?claims.exp, "Token rejected: expired or missing exp");
            return Err(JwtError::InvalidToken);
        }

        match claims.sub {
            Some(subject) if !subject.is_empty() => Ok(subject),
            _ => {
                tracing::debug!("Token rejected: missing subject");
                Err(JwtError::InvalidToken)
            }
        }
    }

    fn encode<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    fn decode(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is checked against the caller's clock in `verify_at`.
        validation.required_spec_claims.clear();
        validation.validate_exp = false;
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| {
                tracing::debug!(reason = %e, "Token rejected");
                JwtError::InvalidToken
            })
    }
}

fn parse_algorithm(name: &str) -> Result<Algorithm, JwtError> {
    match name.trim().to_ascii_uppercase().as_str() {
        "HS256" => Ok(Algorithm::HS256),
        "HS384" => Ok(Algorithm::HS384),
        "HS512" => Ok(Algorithm::HS512),
        _ => Err(JwtError::UnsupportedAlgorithm(name.to_string())),
    }
}
