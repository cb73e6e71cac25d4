mod api_client;
mod auth;
mod stock;

pub use self::api_client::{ApiClient, RequestOptions, ResponseParts};
pub use self::auth::{AuthApiService, session_from_headers};
pub use self::stock::StockApiService;
