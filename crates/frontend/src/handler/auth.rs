use super::render;
use crate::{
    middleware::{LOGIN_PATH, PreferenceContext, session_from_jar},
    state::AppState,
    templates::{GoogleSignIn, LoginTemplate, PageChrome},
};
use axum::{
    Form, Router,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use client::preferences::Preferences;
use serde::Deserialize;
use shared::{
    domain::requests::{GoogleLoginRequest, LoginRequest},
    errors::{HttpError, ValidationError},
    model::{SESSION_COOKIE, SessionToken},
};
use std::sync::Arc;
use tracing::{info, warn};
use validator::Validate;

const REGISTER_MODE: &str = "register";
pub const GOOGLE_LOGIN_PATH: &str = "/login/google";
/// Double-submit token Google sends both as a cookie and as a form field.
const GOOGLE_CSRF_FIELD: &str = "g_csrf_token";

#[derive(Debug, Default, Deserialize)]
pub struct LoginQuery {
    pub mode: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    pub mode: Option<String>,
}

/// Posted by the Google Identity Services button in redirect mode.
#[derive(Debug, Default, Deserialize)]
pub struct GoogleCredentialForm {
    #[serde(default)]
    pub credential: String,
    #[serde(default)]
    pub g_csrf_token: String,
}

/// The form token must be non-empty and equal the cookie set by Google's script.
fn google_csrf_matches(jar: &CookieJar, form_token: &str) -> bool {
    !form_token.is_empty()
        && jar
            .get(GOOGLE_CSRF_FIELD)
            .is_some_and(|cookie| cookie.value() == form_token)
}

fn is_register(mode: Option<&str>) -> bool {
    mode == Some(REGISTER_MODE)
}

fn login_page(
    state: &AppState,
    prefs: &Preferences,
    register: bool,
    username: String,
    error: Option<String>,
) -> Result<Response, HttpError> {
    let page = if register {
        PageChrome::new(prefs, |t| t.register_title)
    } else {
        PageChrome::new(prefs, |t| t.login_title)
    }
    .without_nav();

    let template = LoginTemplate {
        page,
        register,
        username,
        error,
        google: state
            .config
            .google_client_id
            .clone()
            .map(|client_id| GoogleSignIn {
                client_id,
                login_uri: format!("{}{GOOGLE_LOGIN_PATH}", state.config.public_url),
            }),
    };

    Ok(render(template)?.into_response())
}

fn session_cookie(state: &AppState, session: SessionToken) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, session.into_inner()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(state.config.cookie_secure)
        .build()
}

pub async fn login_page_handler(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    PreferenceContext(prefs): PreferenceContext,
    Query(query): Query<LoginQuery>,
) -> Result<Response, HttpError> {
    if session_from_jar(&jar).is_some() {
        return Ok(Redirect::to("/").into_response());
    }

    login_page(
        &state,
        &prefs,
        is_register(query.mode.as_deref()),
        String::new(),
        None,
    )
}

pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    PreferenceContext(prefs): PreferenceContext,
    Form(form): Form<LoginForm>,
) -> Result<Response, HttpError> {
    let register = is_register(form.mode.as_deref());
    let request = LoginRequest {
        username: form.username.trim().to_string(),
        password: form.password,
    };

    if let Err(errors) = request.validate() {
        let err = ValidationError::from_errors(&errors, &["username", "password"]);
        return login_page(&state, &prefs, register, request.username, Some(err.to_string()));
    }

    let auth = &state.di_container.auth_clients;
    let result = if register {
        auth.register(&request).await
    } else {
        auth.login(&request).await
    };

    match result {
        Ok(session) => {
            let jar = jar.add(session_cookie(&state, session));
            Ok((jar, Redirect::to("/")).into_response())
        }
        Err(e) => {
            warn!("Sign-in for {} failed: {e}", request.username);
            login_page(&state, &prefs, register, request.username, Some(e.user_message()))
        }
    }
}

pub async fn google_login_handler(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    PreferenceContext(prefs): PreferenceContext,
    Form(form): Form<GoogleCredentialForm>,
) -> Result<Response, HttpError> {
    if !google_csrf_matches(&jar, &form.g_csrf_token) {
        warn!("Google sign-in rejected: CSRF token missing or mismatched");
        return Err(HttpError::BadRequest(
            "Failed to verify double submit cookie".to_string(),
        ));
    }

    let request = GoogleLoginRequest {
        id_token: form.credential,
    };

    if let Err(errors) = request.validate() {
        let err = ValidationError::from_errors(&errors, &["id_token"]);
        return login_page(&state, &prefs, false, String::new(), Some(err.to_string()));
    }

    match state.di_container.auth_clients.google(&request).await {
        Ok(session) => {
            let jar = jar.add(session_cookie(&state, session));
            Ok((jar, Redirect::to("/")).into_response())
        }
        Err(e) => {
            warn!("Google sign-in failed: {e}");
            login_page(&state, &prefs, false, String::new(), Some(e.user_message()))
        }
    }
}

pub async fn logout_handler(jar: CookieJar) -> impl IntoResponse {
    info!("Signing visitor out");
    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
    (jar, Redirect::to(LOGIN_PATH))
}

pub fn auth_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(LOGIN_PATH, get(login_page_handler).post(login_handler))
        .route(GOOGLE_LOGIN_PATH, post(google_login_handler))
        .route("/logout", post(logout_handler))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn google_csrf_requires_matching_cookie() {
        let jar = CookieJar::new().add((GOOGLE_CSRF_FIELD, "abc"));

        assert!(google_csrf_matches(&jar, "abc"));
        assert!(!google_csrf_matches(&jar, "xyz"));
        assert!(!google_csrf_matches(&jar, ""));
        assert!(!google_csrf_matches(&CookieJar::new(), "abc"));
    }
}
