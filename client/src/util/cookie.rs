//! Access-token cookie helpers.
//!
//! The token is persisted as `accessToken` with a fixed one-day window so the
//! server-side guard can read it on the next navigation. Values are
//! percent-encoded, matching how the server's cookie jar decodes them.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

use cookie::{Cookie, SameSite};

/// Shared with the server guard, which reads the same cookie.
pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";

/// Find a non-empty cookie value in a `Cookie`-style header (`a=1; b=2`).
#[must_use]
pub fn find_cookie(header: &str, name: &str) -> Option<String> {
    Cookie::split_parse_encoded(header)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value().to_owned())
        .filter(|value| !value.is_empty())
}

/// `Set-Cookie`-style string storing `token` for one day.
#[must_use]
pub fn access_token_cookie(token: &str) -> String {
    Cookie::build((ACCESS_TOKEN_COOKIE, token.to_owned()))
        .path("/")
        .max_age(time::Duration::days(1))
        .same_site(SameSite::Lax)
        .build()
        .encoded()
        .to_string()
}

#[must_use]
pub fn expired_access_token_cookie() -> String {
    Cookie::build((ACCESS_TOKEN_COOKIE, ""))
        .path("/")
        .max_age(time::Duration::ZERO)
        .same_site(SameSite::Lax)
        .build()
        .to_string()
}

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast as _;
    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

/// Current access token from `document.cookie`, if any.
#[must_use]
pub fn access_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let cookies = html_document()?.cookie().ok()?;
        find_cookie(&cookies, ACCESS_TOKEN_COOKIE)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist a freshly issued token. Blank tokens are skipped; the backend's
/// own `Set-Cookie` is relied on in that case.
pub fn store_access_token(token: &str) {
    if token.trim().is_empty() {
        return;
    }
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = html_document() {
            let _ = doc.set_cookie(&access_token_cookie(token));
        }
    }
}

pub fn clear_access_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = html_document() {
            let _ = doc.set_cookie(&expired_access_token_cookie());
        }
    }
}
