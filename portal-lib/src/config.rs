pub fn init() {
    dotenv::dotenv().ok();
}

/// Secret used to sign and verify session tokens. A fixed fallback
/// keeps local development and tests running without a .env file.
pub fn get_jwt_secret() -> String {
    std::env::var("PORTAL_JWT_SECRET").unwrap_or_else(|_| {
        log::warn!("PORTAL_JWT_SECRET not found in environment, using development default");
        "portal-dev-secret".to_string()
    })
}

/// Token lifetime in seconds, default 24 hours.
pub fn get_token_ttl() -> i64 {
    std::env::var("PORTAL_TOKEN_TTL")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(86_400)
}
