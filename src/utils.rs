pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn cookie(name: &str, value: &str, secure: bool) -> String {
    let secure = if secure { " Secure;" } else { "" };
    format!("{name}={value}; HttpOnly; Max-Age=3600;{secure} Path=/; SameSite=Strict")
}

pub fn expired_cookie(name: &str) -> String {
    format!("{name}=; HttpOnly; Max-Age=0; Path=/; SameSite=Strict")
}

/// Rounds `numerator / denominator` to the nearest integer, halves away from zero.
pub fn rounded_ratio(numerator: u64, denominator: u64) -> u32 {
    if denominator == 0 {
        return 0;
    }
    (numerator as f64 / denominator as f64).round() as u32
}
