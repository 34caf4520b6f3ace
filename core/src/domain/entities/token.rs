//! Token claims entity for signed bearer tokens.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Claim keys owned by the codec; caller-supplied values under these keys
/// are superseded at issuance.
pub const RESERVED_CLAIM_KEYS: [&str; 4] = ["sub", "iat", "exp", "jti"];

/// Claims structure embedded in every issued token.
///
/// The four standard fields are stamped by the codec; everything the
/// caller supplies at issuance is flattened into the same JSON object
/// and returned verbatim on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (the authenticated principal)
    pub sub: String,

    /// Issued at timestamp (Unix seconds)
    pub iat: i64,

    /// Expiration timestamp (Unix seconds); valid strictly before this
    pub exp: i64,

    /// Token ID (unique per issued token)
    pub jti: String,

    /// Caller-supplied claims, flattened alongside the standard fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Claims {
    /// Creates new claims for a token issued now.
    ///
    /// Reserved keys in `extra` are dropped; the standard fields win.
    /// A fresh token ID is generated on every call, so two claim sets
    /// built from identical inputs never compare equal.
    pub fn new(subject: impl Into<String>, ttl: Duration, mut extra: Map<String, Value>) -> Self {
        let now = Utc::now();
        let expiry = now + ttl;

        for key in RESERVED_CLAIM_KEYS {
            extra.remove(key);
        }

        Self {
            sub: subject.into(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            jti: Uuid::new_v4().to_string(),
            extra,
        }
    }

    /// Checks if the claims have expired, with `leeway_secs` of tolerance.
    pub fn is_expired(&self, leeway_secs: u64) -> bool {
        let now = Utc::now().timestamp();
        now >= self.exp + leeway_secs as i64
    }

    /// Checks if the claims are currently valid (strictly before expiry).
    pub fn is_valid(&self, leeway_secs: u64) -> bool {
        !self.is_expired(leeway_secs)
    }

    /// Looks up a claim by key, covering standard and caller fields alike.
    pub fn get(&self, key: &str) -> Option<Value> {
        match key {
            "sub" => Some(Value::String(self.sub.clone())),
            "iat" => Some(Value::from(self.iat)),
            "exp" => Some(Value::from(self.exp)),
            "jti" => Some(Value::String(self.jti.clone())),
            _ => self.extra.get(key).cloned(),
        }
    }

    /// Expiration instant as a `DateTime`, if the timestamp is representable.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}
