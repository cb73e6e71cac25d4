use super::render;
use crate::{
    middleware::{PreferenceContext, session_from_jar},
    state::AppState,
    templates::{PageChrome, ProductOption, StockRowView, StockTemplate},
};
use axum::{
    Form, Router,
    extract::State,
    response::Html,
    routing::{get, post},
};
use axum_extra::extract::cookie::CookieJar;
use client::{
    flow::{AdjustmentForm, ProductForm},
    preferences::Preferences,
    presentation::classify,
    view::{LoadState, StockView},
};
use shared::{
    domain::requests::Direction,
    errors::HttpError,
    model::{ProductType, StockRow},
};
use std::sync::Arc;
use tracing::debug;

const UPDATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M";

async fn mount_view(state: &AppState, jar: &CookieJar) -> StockView {
    let api = state.di_container.stock_clients(session_from_jar(jar));
    StockView::mount(api).await
}

fn row_view(row: &StockRow) -> StockRowView {
    let status = classify(row.available_quantity);

    StockRowView {
        description: row.description.clone(),
        available: row.available_quantity,
        status_label: status.label(),
        status_class: status.css_class(),
        updated_at: row.updated_at.format(UPDATED_AT_FORMAT).to_string(),
    }
}

fn product_option(product: &ProductType, selected_id: &str) -> ProductOption {
    let id = product.id;

    ProductOption {
        id,
        label: format!("{} ({})", product.description, product.display_price()),
        selected: selected_id.trim() == id.to_string(),
    }
}

fn stock_page(view: StockView, prefs: &Preferences) -> Result<Html<String>, HttpError> {
    let load_error = match view.state() {
        LoadState::Error(message) => Some(message.clone()),
        LoadState::Loading | LoadState::Ready => None,
    };

    let selected = view.adjustment_dialog.form.product_type_id.as_str();
    let products = view
        .product_types()
        .iter()
        .map(|p| product_option(p, selected))
        .collect();
    let rows = view.stock().iter().map(row_view).collect();
    let subtracting = view.adjustment_dialog.form.direction == Direction::Subtract;

    render(StockTemplate {
        page: PageChrome::new(prefs, |t| t.stock_title),
        load_error,
        rows,
        products,
        subtracting,
        product_dialog: view.product_dialog.clone(),
        adjustment_dialog: view.adjustment_dialog.clone(),
    })
}

pub async fn stock_index(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    PreferenceContext(prefs): PreferenceContext,
) -> Result<Html<String>, HttpError> {
    let view = mount_view(&state, &jar).await;
    stock_page(view, &prefs)
}

/// Runs the product creation flow and re-renders the page. On failure the dialog is
/// rendered open with the submitted values and the error.
pub async fn create_product(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    PreferenceContext(prefs): PreferenceContext,
    Form(form): Form<ProductForm>,
) -> Result<Html<String>, HttpError> {
    let mut view = mount_view(&state, &jar).await;
    view.product_dialog.open();
    view.product_dialog.form = form;

    if let Err(e) = view.create_product().await {
        debug!("Product dialog left open: {}", e.user_message());
    }

    stock_page(view, &prefs)
}

pub async fn adjust_quantity(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    PreferenceContext(prefs): PreferenceContext,
    Form(form): Form<AdjustmentForm>,
) -> Result<Html<String>, HttpError> {
    let mut view = mount_view(&state, &jar).await;
    view.adjustment_dialog.open();
    view.adjustment_dialog.form = form;

    if let Err(e) = view.adjust_quantity().await {
        debug!("Adjustment dialog left open: {}", e.user_message());
    }

    stock_page(view, &prefs)
}

pub fn stock_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/stock", get(stock_index))
        .route("/stock/products", post(create_product))
        .route("/stock/adjust", post(adjust_quantity))
}
