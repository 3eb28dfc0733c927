//! Compatibility checks against the `jsonwebtoken` HS256 implementation

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::Claims;
use crate::errors::TokenError;
use crate::services::token::{TokenService, TokenServiceConfig};

const SECRET: &str = "interop-secret";

fn create_service() -> TokenService {
    TokenService::new(TokenServiceConfig::new(SECRET)).unwrap()
}

#[test]
fn test_issued_token_decodes_with_jsonwebtoken() {
    let service = create_service();
    let token = service.issue(1, "player1").unwrap();

    let data = decode::<Claims>(
        &token,
        &DecodingKey::from_secret(SECRET.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .unwrap();

    assert_eq!(data.header.alg, Algorithm::HS256);
    assert_eq!(data.claims.user_id, 1);
    assert_eq!(data.claims.username, "player1");
    assert_eq!(data.claims.exp - data.claims.iat, 86_400);
}

#[test]
fn test_jsonwebtoken_token_verifies() {
    let service = create_service();
    let now = chrono::Utc::now().timestamp();
    let claims = Claims::new(2, "player2", now, 3_600);

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap();

    let user = service.verify(Some(&token)).unwrap();
    assert_eq!(user.user_id, 2);
    assert_eq!(user.username, "player2");
}

#[test]
fn test_jsonwebtoken_token_with_other_key_rejected() {
    let service = create_service();
    let now = chrono::Utc::now().timestamp();
    let claims = Claims::new(2, "player2", now, 3_600);

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(b"wrong-secret"),
    )
    .unwrap();

    assert_eq!(service.verify(Some(&token)), Err(TokenError::InvalidSignature));
}
