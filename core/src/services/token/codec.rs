//! Stateless issuance and verification of signed, claim-bearing tokens.

use chrono::Duration;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde_json::{Map, Value};

use crate::domain::entities::token::Claims;
use crate::errors::TokenError;

use super::config::TokenCodecConfig;

/// Codec for signed bearer tokens.
///
/// The codec is immutable after construction and holds no state beyond
/// the keys derived from the configured secret, so a single instance is
/// safe for unrestricted concurrent use.
pub struct TokenCodec {
    algorithm: Algorithm,
    leeway_secs: u64,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    /// Creates a new token codec from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::InvalidInput` when the secret is empty or the
    /// algorithm is not in the symmetric HMAC family.
    pub fn new(config: TokenCodecConfig) -> Result<Self, TokenError> {
        if config.secret.is_empty() {
            return Err(TokenError::InvalidInput {
                message: "secret must not be empty".to_string(),
            });
        }
        if !matches!(
            config.algorithm,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
        ) {
            return Err(TokenError::InvalidInput {
                message: format!("unsupported signing algorithm: {:?}", config.algorithm),
            });
        }

        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.validate_exp = true;
        validation.leeway = config.leeway_secs;

        Ok(Self {
            algorithm: config.algorithm,
            leeway_secs: config.leeway_secs,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    /// Issues a signed token for `subject`, valid for `ttl`.
    ///
    /// The caller-supplied claims are embedded verbatim next to the
    /// standard fields (`sub`, `iat`, `exp`, a fresh `jti`). Two calls
    /// with identical arguments produce different tokens since the token
    /// ID is regenerated each time.
    ///
    /// # Errors
    ///
    /// * `TokenError::InvalidInput` - empty subject or non-positive TTL
    /// * `TokenError::GenerationFailed` - signing failed
    pub fn issue(
        &self,
        subject: &str,
        ttl: Duration,
        claims: Map<String, Value>,
    ) -> Result<String, TokenError> {
        if subject.is_empty() {
            return Err(TokenError::InvalidInput {
                message: "subject must not be empty".to_string(),
            });
        }
        if ttl <= Duration::zero() {
            return Err(TokenError::InvalidInput {
                message: "ttl must be positive".to_string(),
            });
        }

        let claims = Claims::new(subject, ttl, claims);
        self.encode_claims(&claims)
    }

    /// Decodes a token in a single parse-and-validate pass.
    ///
    /// Signature, shape, and expiry are all checked here; on success the
    /// embedded claims are returned, including the standard fields.
    ///
    /// # Errors
    ///
    /// * `TokenError::MalformedToken` - not parseable as a token
    /// * `TokenError::SignatureInvalid` - signature mismatch
    /// * `TokenError::Expired` - signature valid but past expiry
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        TokenError::SignatureInvalid
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidAlgorithm => {
                        TokenError::SignatureInvalid
                    }
                    _ => TokenError::MalformedToken,
                }
            })?;

        // Strict boundary: a token is valid strictly before its expiry
        if !token_data.claims.is_valid(self.leeway_secs) {
            return Err(TokenError::Expired);
        }

        Ok(token_data.claims)
    }

    /// Boolean verification gate: true only for a well-formed, correctly
    /// signed, unexpired token. Never panics on malformed input; all
    /// failure detail is swallowed (fail-closed).
    pub fn verify(&self, token: &str) -> bool {
        self.decode(token).is_ok()
    }

    /// Signs an already-assembled claims payload.
    pub(crate) fn encode_claims(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);
        encode(&header, claims, &self.encoding_key).map_err(|_| TokenError::GenerationFailed)
    }
}
