//! Session cookie issuing and clearing.

use tower_cookies::cookie::SameSite;
use tower_cookies::{Cookie, Cookies};

/// Reads the session token the client presented, if any.
pub fn session_token(cookies: &Cookies, name: &str) -> Option<String> {
    cookies
        .get(name)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
}

/// Sets `name=<token>; HttpOnly; SameSite=Lax; Path=/`.
pub fn issue_session(cookies: &Cookies, name: &str, token: String) {
    cookies.add(base(name.to_string(), token).build());
}

/// Sets `name=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0`.
///
/// Emitted unconditionally, whether or not the client sent a cookie.
pub fn clear_session(cookies: &Cookies, name: &str) {
    cookies.add(
        base(name.to_string(), String::new())
            .max_age(time::Duration::ZERO)
            .build(),
    );
}

fn base(name: String, value: String) -> tower_cookies::cookie::CookieBuilder<'static> {
    Cookie::build((name, value))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
}
