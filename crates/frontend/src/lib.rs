pub mod di;
pub mod handler;
pub mod i18n;
pub mod middleware;
pub mod state;
pub mod templates;
