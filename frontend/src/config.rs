// Site-wide constants. Everything here is compiled in; the page reads no
// runtime environment.

pub const BRAND_NAME: &str = "Lade Stack";

/// Longest accepted waitlist address, counted in characters after trimming.
pub const MAX_EMAIL_LENGTH: usize = 255;

/// How long a toast stays on screen before dismissing itself.
pub const TOAST_DURATION_MS: u32 = 5_000;

/// Number of toasts kept on screen at once. A newer toast evicts the oldest.
pub const TOAST_LIMIT: usize = 1;

/// Fraction of a section that has to be inside the viewport before it fades in.
pub const REVEAL_AMOUNT: f64 = 0.3;

const GITHUB_URL: &str = "https://github.com";
const CONTACT_EMAIL: &str = "hello@ladestack.dev";

pub fn get_github_url() -> &'static str {
    GITHUB_URL
}

pub fn get_contact_href() -> String {
    format!("mailto:{}", CONTACT_EMAIL)
}
