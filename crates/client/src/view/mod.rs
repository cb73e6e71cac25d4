mod stock_view;

pub use self::stock_view::{LoadOutcome, LoadState, StockView, ViewHandle};
