//! End-to-end token flow through the public crate API

use std::sync::Arc;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use gs_core::errors::TokenError;
use gs_core::services::token::{ManualClock, TokenService, TokenServiceConfig};
use gs_shared::config::TokenConfig;

const T: i64 = 1_720_000_000;

#[test]
fn test_issue_verify_expire_scenario() {
    let clock = Arc::new(ManualClock::new(T));
    let service = TokenService::with_clock(
        TokenServiceConfig::from(&TokenConfig::new("integration-secret")),
        clock.clone(),
    )
    .unwrap();

    let token = service.issue(1, "player1").unwrap();

    let claims_segment = token.split('.').nth(1).unwrap();
    let claims = String::from_utf8(URL_SAFE_NO_PAD.decode(claims_segment).unwrap()).unwrap();
    assert_eq!(
        claims,
        format!(
            r#"{{"userId":1,"username":"player1","iat":{},"exp":{}}}"#,
            T,
            T + 86_400
        )
    );

    clock.set(T + 10);
    let user = service.verify(Some(&token)).unwrap();
    assert_eq!(user.user_id, 1);
    assert_eq!(user.username, "player1");

    clock.set(T + 86_401);
    assert_eq!(service.verify(Some(&token)), Err(TokenError::ExpiredToken));

    // Claim helpers do not care about expiry
    assert_eq!(service.user_id_from_token(&token), Some(1));
    assert_eq!(service.username_from_token(&token), Some("player1".to_string()));
}

#[test]
fn test_signature_first_from_shared_config() {
    let config = TokenConfig::new("integration-secret").with_signature_first(true);
    let clock = Arc::new(ManualClock::new(T));
    let service =
        TokenService::with_clock(TokenServiceConfig::from(&config), clock.clone()).unwrap();

    let token = service.issue(2, "player2").unwrap();
    let forged = format!("{}AAAA", &token[..token.rfind('.').unwrap() + 1]);

    clock.set(T + 200_000);
    assert_eq!(service.verify(Some(&forged)), Err(TokenError::InvalidSignature));
    assert_eq!(service.verify(Some(&token)), Err(TokenError::ExpiredToken));
}

#[test]
fn test_distinct_secrets_do_not_accept_each_other() {
    let first = TokenService::new(TokenServiceConfig::new("first-secret")).unwrap();
    let second = TokenService::new(TokenServiceConfig::new("second-secret")).unwrap();

    let token = first.issue(5, "player5").unwrap();
    assert!(first.verify(Some(&token)).is_ok());
    assert_eq!(second.verify(Some(&token)), Err(TokenError::InvalidSignature));
}
