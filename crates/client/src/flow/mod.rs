//! Product creation and quantity adjustment: validate the dialog's form, submit, and
//! refresh the owning [`StockView`](crate::view::StockView) on success.

mod adjustment;
mod price;
mod product;

pub use self::adjustment::{AdjustmentDialog, AdjustmentForm};
pub use self::price::parse_price_cents;
pub use self::product::{ProductDialog, ProductForm};
