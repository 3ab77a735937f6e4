use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use jsonwebtoken::{encode, EncodingKey, Header};

use crate::core::config::AuthConfig;
use crate::features::auth::model::{AdminRole, Claims};
use crate::features::auth::JwtValidator;
use crate::features::prizes::repositories::InMemoryPrizeRepository;
use crate::features::prizes::{routes as prizes_routes, PrizeService};

pub const TEST_JWT_SECRET: &str = "test-secret-for-prizes";
pub const TEST_ADMIN_ROLE: &str = "admin";
pub const TEST_ISSUER: &str = "https://auth.prizes.test";

pub fn test_auth_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: TEST_JWT_SECRET.to_string(),
        issuer: None,
        audience: None,
        jwt_leeway: Duration::from_secs(5),
        admin_role: TEST_ADMIN_ROLE.to_string(),
    }
}

fn claims(sub: &str, roles: &[&str], ttl_secs: i64, issuer: Option<&str>) -> Claims {
    let now = chrono::Utc::now().timestamp();
    Claims {
        sub: sub.to_string(),
        exp: (now + ttl_secs).max(0) as u64,
        iat: Some(now as u64),
        iss: issuer.map(String::from),
        aud: None,
        roles: roles.iter().map(|r| r.to_string()).collect(),
        role: None,
    }
}

fn sign(secret: &str, claims: &Claims) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("failed to sign test token")
}

/// Mint an HS256 token expiring `ttl_secs` from now (negative for an already expired one)
pub fn issue_token(secret: &str, sub: &str, roles: &[&str], ttl_secs: i64) -> String {
    sign(secret, &claims(sub, roles, ttl_secs, None))
}

/// Mint an hour-long HS256 token carrying an `iss` claim
pub fn issue_token_from(secret: &str, issuer: &str, sub: &str, roles: &[&str]) -> String {
    sign(secret, &claims(sub, roles, 3600, Some(issuer)))
}

pub fn admin_token() -> String {
    issue_token(TEST_JWT_SECRET, "test-admin", &[TEST_ADMIN_ROLE], 3600)
}

pub fn member_token() -> String {
    issue_token(TEST_JWT_SECRET, "test-member", &["member"], 3600)
}

pub fn in_memory_prize_service() -> Arc<PrizeService> {
    Arc::new(PrizeService::new(Arc::new(InMemoryPrizeRepository::new())))
}

/// Prize routes wired with the real auth chain over the given service
pub fn prizes_app(service: Arc<PrizeService>) -> Router {
    prizes_app_with_auth(service, &test_auth_config())
}

pub fn prizes_app_with_auth(service: Arc<PrizeService>, auth: &AuthConfig) -> Router {
    let validator = Arc::new(JwtValidator::new(auth));
    prizes_routes::routes(service, validator, AdminRole::new(auth.admin_role.as_str()))
}
