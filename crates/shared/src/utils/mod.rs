mod gracefullshutdown;
mod logs;
mod metrics;
mod parse_datetime;

pub use self::gracefullshutdown::shutdown_signal;
pub use self::logs::init_logger;
pub use self::metrics::{Method, Metrics, Status};
pub use self::parse_datetime::{deserialize_utc_datetime, parse_utc_datetime};
