mod api;
mod error;
mod flow;
mod http;
mod validation;

pub use self::api::ApiError;
pub use self::error::ErrorResponse;
pub use self::flow::FlowError;
pub use self::http::HttpError;
pub use self::validation::ValidationError;
