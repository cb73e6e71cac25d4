mod product_type;
mod session;
mod stock;

pub use self::product_type::ProductType;
pub use self::session::{SESSION_COOKIE, SessionToken};
pub use self::stock::StockRow;
