use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CreateProductTypeRequest {
    #[validate(length(min = 1, message = "description required"))]
    pub description: String,

    #[validate(range(min = 0, message = "price must be zero or greater"))]
    pub unit_price_cents: i64,
}
