use axum::{
    Json, Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use frontend::{handler::AppRouter, state::AppState};
use serde_json::{Value, json};
use shared::config::Config;
use tokio::net::TcpListener;
use tower::ServiceExt;

fn signed_in(headers: &HeaderMap) -> bool {
    headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("session=tok-admin"))
}

async fn stock(headers: HeaderMap) -> Response {
    if !signed_in(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({"detail": "not authenticated"})))
            .into_response();
    }
    Json(json!({"data": [{
        "id": 11,
        "product_type_id": 1,
        "description": "Detergent",
        "available_quantity": 5,
        "updated_at": "2026-05-04T09:30:00Z"
    }]}))
    .into_response()
}

async fn product_types() -> Json<Value> {
    Json(json!({"data": [{"id": 1, "description": "Detergent", "unit_price_cents": 450}]}))
}

async fn subtract() -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({"detail": "insufficient stock"}))).into_response()
}

async fn login(Json(body): Json<Value>) -> Response {
    if body["username"] == "admin" && body["password"] == "secret" {
        (
            [(header::SET_COOKIE, "session=tok-admin; HttpOnly; Path=/")],
            Json(json!({"ok": true})),
        )
            .into_response()
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({"detail": "Invalid credentials"}))).into_response()
    }
}

async fn google(Json(body): Json<Value>) -> Response {
    if body["id_token"] == "google-ok" {
        (
            [(header::SET_COOKIE, "session=tok-google; HttpOnly; Path=/")],
            Json(json!({"ok": true})),
        )
            .into_response()
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({"detail": "Invalid Google token"}))).into_response()
    }
}

async fn spawn_api() -> String {
    let app = Router::new()
        .route("/api/stock", get(stock))
        .route("/api/product-types", get(product_types))
        .route("/api/stock/subtract", post(subtract))
        .route("/api/auth/login", post(login))
        .route("/api/auth/google", post(google));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn frontend() -> Router {
    let base = spawn_api().await;
    let config = Config::from_lookup(|key| match key {
        "API_BASE" => Some(base.clone()),
        "PUBLIC_URL" => Some("https://laundry.example.com".to_string()),
        "GOOGLE_CLIENT_ID" => Some("client-123".to_string()),
        _ => None,
    })
    .unwrap();
    AppRouter::build(AppState::new(config).unwrap())
}

fn form(uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }
    request.body(Body::from(body.to_string())).unwrap()
}

async fn html(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn sign_in_sets_http_only_session_cookie() {
    let app = frontend().await;

    let response = app
        .oneshot(form("/login", "username=admin&password=secret", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
    let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(cookie.starts_with("session=tok-admin"));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
}

#[tokio::test]
async fn wrong_password_shows_api_detail() {
    let app = frontend().await;

    let response = app
        .oneshot(form("/login", "username=admin&password=nope", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let page = html(response).await;
    assert!(page.contains("Invalid credentials"));
    assert!(page.contains(r#"value="admin""#));
}

#[tokio::test]
async fn stock_page_lists_classified_rows() {
    let app = frontend().await;

    let request = Request::builder()
        .uri("/stock")
        .header(header::COOKIE, "session=tok-admin")
        .body(Body::empty())
        .unwrap();
    let page = html(app.oneshot(request).await.unwrap()).await;

    assert!(page.contains("Detergent"));
    assert!(page.contains(r#"class="status-low""#));
    assert!(page.contains("Detergent (4.50)"));
}

#[tokio::test]
async fn rejected_subtraction_keeps_dialog_open_with_server_message() {
    let app = frontend().await;

    let response = app
        .oneshot(form(
            "/stock/adjust",
            "product_type_id=1&quantity=50&direction=subtract",
            Some("session=tok-admin"),
        ))
        .await
        .unwrap();

    let page = html(response).await;
    assert!(page.contains("insufficient stock"));
    assert!(page.contains(r#"value="50""#));
    assert!(page.contains(r#"value="subtract" checked"#));
}

#[tokio::test]
async fn expired_session_renders_load_error() {
    let app = frontend().await;

    let request = Request::builder()
        .uri("/stock")
        .header(header::COOKIE, "session=stale")
        .body(Body::empty())
        .unwrap();
    let page = html(app.oneshot(request).await.unwrap()).await;

    assert!(page.contains("not authenticated"));
}

fn set_cookies(response: &Response) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn login_page_points_google_at_absolute_callback() {
    let app = frontend().await;

    let request = Request::builder().uri("/login").body(Body::empty()).unwrap();
    let page = html(app.oneshot(request).await.unwrap()).await;

    assert!(page.contains(r#"data-client_id="client-123""#));
    assert!(page.contains(r#"data-login_uri="https://laundry.example.com/login/google""#));
}

#[tokio::test]
async fn google_credential_with_matching_csrf_signs_in() {
    let app = frontend().await;

    let response = app
        .oneshot(form(
            "/login/google",
            "credential=google-ok&g_csrf_token=c5rf",
            Some("g_csrf_token=c5rf"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
    let cookies = set_cookies(&response);
    assert!(cookies.iter().any(|c| c.starts_with("session=tok-google") && c.contains("HttpOnly")));
}

#[tokio::test]
async fn google_credential_without_matching_csrf_is_rejected() {
    let app = frontend().await;

    let response = app
        .clone()
        .oneshot(form(
            "/login/google",
            "credential=google-ok&g_csrf_token=c5rf",
            Some("g_csrf_token=other"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(set_cookies(&response).is_empty());

    let response = app
        .oneshot(form("/login/google", "credential=google-ok", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn rejected_google_token_shows_api_detail() {
    let app = frontend().await;

    let response = app
        .oneshot(form(
            "/login/google",
            "credential=forged&g_csrf_token=c5rf",
            Some("g_csrf_token=c5rf"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(html(response).await.contains("Invalid Google token"));
}

#[tokio::test]
async fn logout_clears_session_and_returns_to_login() {
    let app = frontend().await;

    let response = app
        .oneshot(form("/logout", "", Some("session=tok-admin")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/login");
    let cookies = set_cookies(&response);
    assert!(
        cookies
            .iter()
            .any(|c| c.starts_with("session=;") && c.contains("Max-Age=0") && c.contains("Path=/")),
        "{cookies:?}"
    );
}

#[tokio::test]
async fn saving_preferences_sets_persistent_cookies() {
    let app = frontend().await;

    let response = app
        .oneshot(form(
            "/preferences",
            "lang=fr&theme=dark",
            Some("session=tok-admin"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/preferences");

    let cookies = set_cookies(&response);
    for expected in ["lang=fr", "theme=dark"] {
        let cookie = cookies
            .iter()
            .find(|c| c.starts_with(expected))
            .unwrap_or_else(|| panic!("missing {expected} in {cookies:?}"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("Max-Age="));
    }
}

#[tokio::test]
async fn unknown_preference_values_are_rejected() {
    let app = frontend().await;

    let response = app
        .clone()
        .oneshot(form("/preferences", "lang=de&theme=dark", Some("session=tok-admin")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(set_cookies(&response).is_empty());

    let response = app
        .oneshot(form("/preferences", "lang=es&theme=neon", Some("session=tok-admin")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
