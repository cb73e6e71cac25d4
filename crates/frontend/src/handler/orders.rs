//! Order pages reachable from the dashboard's action grid. They only describe the
//! action for now; the order endpoints are not wired up.

use super::render;
use crate::{
    i18n::Strings,
    middleware::PreferenceContext,
    state::AppState,
    templates::{PageChrome, PlaceholderTemplate},
};
use axum::{Router, response::Html, routing::get};
use shared::errors::HttpError;
use std::sync::Arc;

type Text = fn(&'static Strings) -> &'static str;

fn placeholder(
    PreferenceContext(prefs): PreferenceContext,
    title: Text,
    description: Text,
) -> Result<Html<String>, HttpError> {
    let page = PageChrome::new(&prefs, title);
    let description = description(page.t);

    render(PlaceholderTemplate { page, description })
}

pub async fn receive_page(prefs: PreferenceContext) -> Result<Html<String>, HttpError> {
    placeholder(prefs, |t| t.receive_title, |t| t.receive_desc)
}

pub async fn deliver_page(prefs: PreferenceContext) -> Result<Html<String>, HttpError> {
    placeholder(prefs, |t| t.deliver_title, |t| t.deliver_desc)
}

pub async fn edit_page(prefs: PreferenceContext) -> Result<Html<String>, HttpError> {
    placeholder(prefs, |t| t.edit_title, |t| t.edit_desc)
}

pub async fn status_page(prefs: PreferenceContext) -> Result<Html<String>, HttpError> {
    placeholder(prefs, |t| t.status_title, |t| t.status_desc)
}

pub async fn profile_page(prefs: PreferenceContext) -> Result<Html<String>, HttpError> {
    placeholder(prefs, |t| t.profile, |t| t.account_desc)
}

pub fn order_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/receive", get(receive_page))
        .route("/deliver", get(deliver_page))
        .route("/edit", get(edit_page))
        .route("/status", get(status_page))
        .route("/profile", get(profile_page))
}
