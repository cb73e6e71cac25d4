mod auth;
mod stock;

pub use self::auth::{AuthApiTrait, DynAuthApi};
pub use self::stock::{DynStockApi, StockApiTrait};
