use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Bearer token claims.
///
/// `sub` and `exp` are optional on the wire so a token lacking either can be
/// decoded and then rejected by the handler rather than failing inside the
/// deserializer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Claims {
    /// Subject (username)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Expiration time (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Issued at (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

impl Claims {
    /// Create new empty claims.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create claims for a subject that expire `ttl` after `now`.
    ///
    /// # Arguments
    /// * `subject` - Username the token speaks for
    /// * `ttl` - Token lifetime
    /// * `now` - Issue instant
    ///
    /// # Returns
    /// Claims with sub, exp and iat set, or `None` when `now + ttl` is out
    /// of the representable range
    pub fn for_subject(
        subject: impl ToString,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Option<Self> {
        let exp = now.checked_add_signed(ttl)?;

        Some(Self {
            sub: Some(subject.to_string()),
            exp: Some(exp.timestamp()),
            iat: Some(now.timestamp()),
        })
    }

    /// Set subject.
    pub fn with_subject(mut self, sub: impl ToString) -> Self {
        self.sub = Some(sub.to_string());
        self
    }

    /// Set expiration (Unix timestamp).
    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.exp = Some(exp);
        self
    }

    /// Set issued at (Unix timestamp).
    pub fn with_issued_at(mut self, iat: i64) -> Self {
        self.iat = Some(iat);
        self
    }

    /// Check if token is expired.
    ///
    /// A token is expired from its `exp` second onwards. Claims without an
    /// `exp` are treated as expired.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp.map_or(true, |exp| current_timestamp >= exp)
    }
}
