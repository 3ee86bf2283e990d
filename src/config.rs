// === Durable slots ===
pub const POSTS_SLOT: &str = "vexel_posts";
pub const USERS_SLOT: &str = "vexel_users";
pub const CURRENT_USER_SLOT: &str = "vexel_current_user";
pub const AUTH_COOKIE_SLOT: &str = "vexel_auth";

// === Editing limits ===
pub const MAX_CAPTION_LENGTH: usize = 300;
pub const MAX_BIO_LENGTH: usize = 150;

// The one account whose password is actually checked.
pub const OFFICIAL_USERNAME: &str = "vexel";

pub fn official_password() -> String {
    std::env::var("VEXEL_OFFICIAL_PASSWORD").unwrap_or_else(|_| "asdf1234flol".to_string())
}

pub fn posts_per_load() -> usize {
    std::env::var("VEXEL_POSTS_PER_LOAD")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(5)
}

pub fn load_delay_ms() -> u64 {
    std::env::var("VEXEL_LOAD_DELAY_MS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(500)
}

pub fn auth_expiration_hours() -> i64 {
    std::env::var("VEXEL_AUTH_EXPIRATION_HOURS")
        .ok()
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(24)
}

pub fn remember_expiration_days() -> i64 {
    std::env::var("VEXEL_REMEMBER_EXPIRATION_DAYS")
        .ok()
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(365)
}
