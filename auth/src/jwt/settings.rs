use std::fmt;

use serde::Deserialize;

/// Token signing configuration.
#[derive(Clone, Deserialize)]
pub struct JwtSettings {
    /// Symmetric signing secret
    pub secret: String,

    /// Signing algorithm identifier (HS256, HS384 or HS512)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    /// Token lifetime in minutes
    #[serde(default = "default_expiration_minutes")]
    pub expiration_minutes: i64,
}

impl JwtSettings {
    /// Settings with the default algorithm and lifetime.
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            algorithm: default_algorithm(),
            expiration_minutes: default_expiration_minutes(),
        }
    }
}

impl fmt::Debug for JwtSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtSettings")
            .field("secret", &"***")
            .field("algorithm", &self.algorithm)
            .field("expiration_minutes", &self.expiration_minutes)
            .finish()
    }
}

fn default_algorithm() -> String {
    "HS256".to_string()
}

fn default_expiration_minutes() -> i64 {
    1440
}
