use super::render;
use crate::{
    i18n::language_name,
    middleware::PreferenceContext,
    state::AppState,
    templates::{Choice, PageChrome, PreferencesTemplate},
};
use axum::{
    Form, Router,
    response::{Html, IntoResponse, Redirect},
    routing::get,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use client::preferences::{LANG_KEY, Language, THEME_KEY, ThemeMode};
use serde::Deserialize;
use shared::errors::HttpError;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
pub struct PreferencesForm {
    #[serde(default)]
    pub lang: String,
    #[serde(default)]
    pub theme: String,
}

pub async fn preferences_page(
    PreferenceContext(prefs): PreferenceContext,
) -> Result<Html<String>, HttpError> {
    let page = PageChrome::new(&prefs, |t| t.preferences);

    let languages = Language::ALL
        .iter()
        .map(|lang| Choice {
            value: lang.code(),
            label: language_name(*lang),
            selected: *lang == prefs.language,
        })
        .collect();

    let themes = ThemeMode::ALL
        .iter()
        .map(|theme| Choice {
            value: theme.as_str(),
            label: page.t.theme_label(*theme),
            selected: *theme == prefs.theme,
        })
        .collect();

    render(PreferencesTemplate {
        page,
        languages,
        themes,
    })
}

fn preference_cookie(name: &'static str, value: &'static str) -> Cookie<'static> {
    Cookie::build((name, value)).path("/").permanent().build()
}

/// Stores the chosen language and theme. Unknown values are rejected rather than
/// silently falling back.
pub async fn save_preferences(
    jar: CookieJar,
    Form(form): Form<PreferencesForm>,
) -> Result<impl IntoResponse, HttpError> {
    let language = Language::parse(&form.lang)
        .ok_or_else(|| HttpError::BadRequest(format!("unsupported language '{}'", form.lang)))?;
    let theme = ThemeMode::parse(&form.theme)
        .ok_or_else(|| HttpError::BadRequest(format!("unsupported theme '{}'", form.theme)))?;

    debug!("Saving preferences: {} / {}", language.code(), theme.as_str());

    let jar = jar
        .add(preference_cookie(LANG_KEY, language.code()))
        .add(preference_cookie(THEME_KEY, theme.as_str()));

    Ok((jar, Redirect::to("/preferences")))
}

pub fn preference_routes() -> Router<Arc<AppState>> {
    Router::new().route("/preferences", get(preferences_page).post(save_preferences))
}
