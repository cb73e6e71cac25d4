use axum::{
    extract::FromRequestParts,
    http::{header::ACCEPT_LANGUAGE, request::Parts},
};
use axum_extra::extract::cookie::CookieJar;
use client::preferences::{LANG_KEY, Preferences, THEME_KEY};
use std::convert::Infallible;

const PREFERS_COLOR_SCHEME: &str = "sec-ch-prefers-color-scheme";

/// Language and theme for the current request, from the preference cookies with the
/// browser's headers as fallback.
#[derive(Debug, Clone, Copy)]
pub struct PreferenceContext(pub Preferences);

impl<S> FromRequestParts<S> for PreferenceContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let prefs = Preferences::resolve(
            jar.get(LANG_KEY).map(|c| c.value()),
            jar.get(THEME_KEY).map(|c| c.value()),
            header_str(parts, ACCEPT_LANGUAGE.as_str()),
            header_str(parts, PREFERS_COLOR_SCHEME),
        );

        Ok(Self(prefs))
    }
}

fn header_str<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    parts.headers.get(name).and_then(|value| value.to_str().ok())
}
