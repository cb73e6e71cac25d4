use super::render;
use crate::{
    middleware::PreferenceContext,
    state::AppState,
    templates::{ActionLink, HomeTemplate, PageChrome},
};
use axum::{Router, response::Html, routing::get};
use chrono::Local;
use client::dashboard::day_cards;
use shared::errors::HttpError;
use std::sync::Arc;

pub async fn home_page(
    PreferenceContext(prefs): PreferenceContext,
) -> Result<Html<String>, HttpError> {
    let page = PageChrome::new(&prefs, |t| t.home);
    let t = page.t;

    let actions = vec![
        ActionLink {
            href: "/receive",
            label: t.action_receive,
        },
        ActionLink {
            href: "/deliver",
            label: t.action_deliver,
        },
        ActionLink {
            href: "/edit",
            label: t.action_edit,
        },
        ActionLink {
            href: "/status",
            label: t.action_status,
        },
        ActionLink {
            href: "/stock",
            label: t.stock,
        },
    ];

    render(HomeTemplate {
        page,
        cards: day_cards(Local::now().date_naive()),
        actions,
    })
}

pub fn home_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(home_page))
        .route("/dashboard", get(home_page))
}
