//! In-process stand-in for the laundry API, bound to an ephemeral localhost port.

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde_json::json;
use shared::{
    domain::requests::{
        CreateProductTypeRequest, GoogleLoginRequest, LoginRequest, StockAdjustmentRequest,
    },
    model::{ProductType, StockRow},
};
use std::sync::{Arc, Mutex};

#[derive(Default)]
pub struct StubState {
    pub product_types: Vec<ProductType>,
    pub stock: Vec<StockRow>,
    pub users: Vec<(String, String)>,
    /// Serve `updated_at` without an offset, as a `timestamp` column does.
    pub naive_timestamps: bool,
    next_id: i64,
}

impl StubState {
    /// Adds a product type together with its stock row, as the real API does on creation.
    pub fn seed(&mut self, description: &str, unit_price_cents: i64, available: i64) -> i64 {
        self.next_id += 1;
        let id = self.next_id;
        self.product_types.push(ProductType {
            id,
            description: description.to_string(),
            unit_price_cents,
        });
        self.stock.push(StockRow {
            id: id + 1000,
            product_type_id: id,
            description: description.to_string(),
            available_quantity: available,
            updated_at: Utc::now(),
        });
        id
    }

    pub fn available(&self, product_type_id: i64) -> Option<i64> {
        self.stock
            .iter()
            .find(|row| row.product_type_id == product_type_id)
            .map(|row| row.available_quantity)
    }
}

type Shared = Arc<Mutex<StubState>>;

pub struct StubApi {
    pub base_url: String,
    pub state: Shared,
}

pub async fn spawn_stub_api() -> StubApi {
    let state: Shared = Arc::new(Mutex::new(StubState::default()));
    state
        .lock()
        .unwrap()
        .users
        .push(("admin".to_string(), "secret".to_string()));

    let app = Router::new()
        .route("/api/stock", get(list_stock))
        .route("/api/product-types", get(list_product_types).post(create_product_type))
        .route("/api/stock/add", post(add_stock))
        .route("/api/stock/subtract", post(subtract_stock))
        .route("/api/auth/login", post(login))
        .route("/api/auth/register", post(register))
        .route("/api/auth/google", post(google))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubApi {
        base_url: format!("http://{addr}"),
        state,
    }
}

fn detail(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "detail": message }))).into_response()
}

fn authenticated(headers: &HeaderMap) -> bool {
    headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|cookie| cookie.contains("session=tok-"))
}

fn with_session(username: &str) -> Response {
    let mut response = Json(json!({ "ok": true })).into_response();
    let cookie = format!("session=tok-{username}; HttpOnly; Path=/; SameSite=Lax");
    if let Ok(value) = HeaderValue::from_str(&cookie) {
        response.headers_mut().append(header::SET_COOKIE, value);
    }
    response
}

async fn list_stock(State(state): State<Shared>, headers: HeaderMap) -> Response {
    if !authenticated(&headers) {
        return detail(StatusCode::UNAUTHORIZED, "not authenticated");
    }
    let state = state.lock().unwrap();
    if !state.naive_timestamps {
        return Json(json!({ "data": state.stock })).into_response();
    }

    let rows: Vec<_> = state
        .stock
        .iter()
        .map(|row| {
            json!({
                "id": row.id,
                "product_type_id": row.product_type_id,
                "description": row.description,
                "available_quantity": row.available_quantity,
                "updated_at": row.updated_at.naive_utc().format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
            })
        })
        .collect();
    Json(json!({ "data": rows })).into_response()
}

async fn list_product_types(State(state): State<Shared>, headers: HeaderMap) -> Response {
    if !authenticated(&headers) {
        return detail(StatusCode::UNAUTHORIZED, "not authenticated");
    }
    let state = state.lock().unwrap();
    Json(json!({ "data": state.product_types })).into_response()
}

async fn create_product_type(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<CreateProductTypeRequest>,
) -> Response {
    if !authenticated(&headers) {
        return detail(StatusCode::UNAUTHORIZED, "not authenticated");
    }
    let mut state = state.lock().unwrap();
    if state
        .product_types
        .iter()
        .any(|p| p.description == body.description)
    {
        return detail(StatusCode::CONFLICT, "product type already exists");
    }
    let id = state.seed(&body.description, body.unit_price_cents, 0);
    let created = state
        .product_types
        .iter()
        .find(|p| p.id == id)
        .cloned();
    (StatusCode::CREATED, Json(json!({ "data": created }))).into_response()
}

async fn add_stock(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<StockAdjustmentRequest>,
) -> Response {
    if !authenticated(&headers) {
        return detail(StatusCode::UNAUTHORIZED, "not authenticated");
    }
    let mut state = state.lock().unwrap();
    match state
        .stock
        .iter_mut()
        .find(|row| row.product_type_id == body.product_type_id)
    {
        Some(row) => {
            row.available_quantity += body.quantity;
            row.updated_at = Utc::now();
            Json(json!({ "ok": true, "available_quantity": row.available_quantity }))
                .into_response()
        }
        None => detail(StatusCode::NOT_FOUND, "unknown product type"),
    }
}

async fn subtract_stock(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<StockAdjustmentRequest>,
) -> Response {
    if !authenticated(&headers) {
        return detail(StatusCode::UNAUTHORIZED, "not authenticated");
    }
    let mut state = state.lock().unwrap();
    match state
        .stock
        .iter_mut()
        .find(|row| row.product_type_id == body.product_type_id)
    {
        Some(row) if row.available_quantity < body.quantity => {
            detail(StatusCode::BAD_REQUEST, "insufficient stock")
        }
        Some(row) => {
            row.available_quantity -= body.quantity;
            row.updated_at = Utc::now();
            StatusCode::NO_CONTENT.into_response()
        }
        None => detail(StatusCode::NOT_FOUND, "unknown product type"),
    }
}

async fn login(State(state): State<Shared>, Json(body): Json<LoginRequest>) -> Response {
    let state = state.lock().unwrap();
    let known = state
        .users
        .iter()
        .any(|(user, pass)| *user == body.username && *pass == body.password);
    if known {
        with_session(&body.username)
    } else {
        detail(StatusCode::UNAUTHORIZED, "Invalid credentials")
    }
}

async fn register(State(state): State<Shared>, Json(body): Json<LoginRequest>) -> Response {
    let mut state = state.lock().unwrap();
    if state.users.iter().any(|(user, _)| *user == body.username) {
        return detail(StatusCode::CONFLICT, "duplicate key value violates unique constraint");
    }
    state.users.push((body.username.clone(), body.password));
    with_session(&body.username)
}

/// Accepts any id token of the form `google-<user>`.
async fn google(Json(body): Json<GoogleLoginRequest>) -> Response {
    match body.id_token.strip_prefix("google-") {
        Some(user) if !user.is_empty() => with_session(user),
        _ => detail(StatusCode::UNAUTHORIZED, "Invalid Google token"),
    }
}
