mod auth;
mod product_type;
mod stock;

pub use self::auth::{GoogleLoginRequest, LoginRequest};
pub use self::product_type::CreateProductTypeRequest;
pub use self::stock::{Direction, StockAdjustmentRequest};
