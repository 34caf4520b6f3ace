//! Unit tests for the token codec.

use chrono::{Duration, Utc};
use jsonwebtoken::Algorithm;
use serde_json::{json, Map, Value};

use crate::domain::entities::token::Claims;
use crate::errors::TokenError;
use crate::services::token::{TokenCodec, TokenCodecConfig};

fn test_codec() -> TokenCodec {
    TokenCodec::new(TokenCodecConfig::new("xfg")).unwrap()
}

fn sample_claims() -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("username".to_string(), json!("xfg"));
    map.insert("password".to_string(), json!("123"));
    map.insert("age".to_string(), json!(100));
    map
}

/// Encodes claims whose expiry already lies `secs_ago` in the past,
/// simulating a clock that advanced past the token's lifetime.
fn issue_expired(codec: &TokenCodec, secs_ago: i64) -> String {
    let mut claims = Claims::new("xfg", Duration::seconds(30), sample_claims());
    claims.iat = (Utc::now() - Duration::seconds(30 + secs_ago)).timestamp();
    claims.exp = (Utc::now() - Duration::seconds(secs_ago)).timestamp();
    codec.encode_claims(&claims).unwrap()
}

#[test]
fn test_round_trip() {
    let codec = test_codec();

    let token = codec
        .issue("xfg", Duration::milliseconds(30000), sample_claims())
        .unwrap();
    let claims = codec.decode(&token).unwrap();

    assert_eq!(claims.sub, "xfg");
    assert_eq!(claims.get("username"), Some(json!("xfg")));
    assert_eq!(claims.get("password"), Some(json!("123")));
    assert_eq!(claims.get("age"), Some(json!(100)));
    assert!(!claims.jti.is_empty());
    assert_eq!(claims.exp - claims.iat, 30);
}

#[test]
fn test_issued_tokens_are_fresh() {
    let codec = test_codec();

    let first = codec
        .issue("xfg", Duration::seconds(30), sample_claims())
        .unwrap();
    let second = codec
        .issue("xfg", Duration::seconds(30), sample_claims())
        .unwrap();

    assert_ne!(first, second);

    let first_claims = codec.decode(&first).unwrap();
    let second_claims = codec.decode(&second).unwrap();
    assert_ne!(first_claims.jti, second_claims.jti);
}

#[test]
fn test_issue_rejects_empty_subject() {
    let codec = test_codec();

    let result = codec.issue("", Duration::seconds(30), Map::new());

    assert!(matches!(result, Err(TokenError::InvalidInput { .. })));
}

#[test]
fn test_issue_rejects_non_positive_ttl() {
    let codec = test_codec();

    let zero = codec.issue("xfg", Duration::zero(), Map::new());
    assert!(matches!(zero, Err(TokenError::InvalidInput { .. })));

    let negative = codec.issue("xfg", Duration::seconds(-5), Map::new());
    assert!(matches!(negative, Err(TokenError::InvalidInput { .. })));
}

#[test]
fn test_fresh_token_verifies() {
    let codec = test_codec();

    let token = codec
        .issue("xfg", Duration::milliseconds(30000), sample_claims())
        .unwrap();

    assert!(codec.verify(&token));
}

#[test]
fn test_expired_token_rejected() {
    let codec = test_codec();

    // Issued 61 seconds ago with a 30 second lifetime
    let token = issue_expired(&codec, 31);

    assert!(!codec.verify(&token));
    assert_eq!(codec.decode(&token), Err(TokenError::Expired));
}

#[test]
fn test_leeway_tolerates_recent_expiry() {
    let strict = test_codec();
    let lenient = TokenCodec::new(TokenCodecConfig::new("xfg").with_leeway_secs(60)).unwrap();

    let token = issue_expired(&strict, 2);

    assert!(!strict.verify(&token));
    assert!(lenient.verify(&token));
}

#[test]
fn test_tamper_rejection() {
    let codec = test_codec();

    let token = codec
        .issue("xfg", Duration::seconds(30), sample_claims())
        .unwrap();
    assert!(codec.verify(&token));

    // Flip one character in each of the three segments
    let segment_starts: Vec<usize> = {
        let mut starts = vec![1];
        for (i, c) in token.char_indices() {
            if c == '.' {
                starts.push(i + 2);
            }
        }
        starts
    };

    for idx in segment_starts {
        let mut bytes = token.as_bytes().to_vec();
        bytes[idx] = if bytes[idx] == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(bytes).unwrap();
        assert!(!codec.verify(&tampered), "tampered at byte {}", idx);
    }
}

#[test]
fn test_wrong_secret_rejected() {
    let issuer = test_codec();
    let other = TokenCodec::new(TokenCodecConfig::new("different-secret")).unwrap();

    let token = issuer
        .issue("xfg", Duration::seconds(30), sample_claims())
        .unwrap();

    assert!(!other.verify(&token));
    assert_eq!(other.decode(&token), Err(TokenError::SignatureInvalid));
}

#[test]
fn test_malformed_input_is_safe() {
    let codec = test_codec();

    assert!(!codec.verify(""));
    assert!(!codec.verify("not a token at all"));
    assert!(!codec.verify("one.two"));

    assert_eq!(codec.decode(""), Err(TokenError::MalformedToken));
    assert_eq!(
        codec.decode("not a token at all"),
        Err(TokenError::MalformedToken)
    );

    // Truncated mid-signature
    let token = codec
        .issue("xfg", Duration::seconds(30), Map::new())
        .unwrap();
    let truncated = &token[..token.len() - 10];
    assert!(!codec.verify(truncated));
}

#[test]
fn test_cross_codec_verification_with_shared_secret() {
    let issuer = TokenCodec::new(TokenCodecConfig::new("shared")).unwrap();
    let verifier = TokenCodec::new(TokenCodecConfig::new("shared")).unwrap();

    let token = issuer
        .issue("xfg", Duration::seconds(30), sample_claims())
        .unwrap();

    assert!(verifier.verify(&token));
    assert_eq!(verifier.decode(&token).unwrap().sub, "xfg");
}

#[test]
fn test_codec_rejects_empty_secret() {
    let result = TokenCodec::new(TokenCodecConfig::new(""));

    assert!(matches!(result, Err(TokenError::InvalidInput { .. })));
}

#[test]
fn test_codec_rejects_asymmetric_algorithm() {
    let config = TokenCodecConfig::new("xfg").with_algorithm(Algorithm::RS256);

    let result = TokenCodec::new(config);

    assert!(matches!(result, Err(TokenError::InvalidInput { .. })));
}

#[test]
fn test_hs512_round_trip() {
    let config = TokenCodecConfig::new("xfg").with_algorithm(Algorithm::HS512);
    let codec = TokenCodec::new(config).unwrap();

    let token = codec
        .issue("xfg", Duration::seconds(30), sample_claims())
        .unwrap();

    assert!(codec.verify(&token));
    // An HS256 codec with the same secret must still reject it
    assert!(!test_codec().verify(&token));
}
