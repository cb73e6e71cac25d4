use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use shared::model::{SESSION_COOKIE, SessionToken};
use tracing::debug;

pub const LOGIN_PATH: &str = "/login";

/// Prefixes served without a session, matched on whole path segments.
const PUBLIC_PREFIXES: [&str; 4] = ["/login", "/api", "/static", "/public"];
const PUBLIC_PATHS: [&str; 3] = ["/favicon.ico", "/healthz", "/metrics"];

pub fn is_public_path(path: &str) -> bool {
    if PUBLIC_PATHS.contains(&path) {
        return true;
    }

    PUBLIC_PREFIXES.iter().any(|prefix| {
        path.strip_prefix(prefix)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    })
}

/// The visitor's session token. An empty cookie counts as no session.
pub fn session_from_jar(jar: &CookieJar) -> Option<SessionToken> {
    jar.get(SESSION_COOKIE)
        .map(|cookie| cookie.value().trim())
        .filter(|value| !value.is_empty())
        .map(SessionToken::new)
}

/// Redirects to the login page when a protected path is requested without a session
/// cookie. The cookie is only checked for presence; the API decides whether it is valid.
pub async fn auth_gate(cookie_jar: CookieJar, req: Request<Body>, next: Next) -> Response {
    let allowed = is_public_path(req.uri().path()) || session_from_jar(&cookie_jar).is_some();

    if !allowed {
        debug!("No session for {}, redirecting to {LOGIN_PATH}", req.uri().path());
        return Redirect::temporary(LOGIN_PATH).into_response();
    }

    next.run(req).await
}
