use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Add,
    Subtract,
}

impl Direction {
    pub fn path(&self) -> &'static str {
        match self {
            Direction::Add => "/api/stock/add",
            Direction::Subtract => "/api/stock/subtract",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Add => "add",
            Direction::Subtract => "subtract",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of both `/api/stock/add` and `/api/stock/subtract`; the endpoint carries the direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct StockAdjustmentRequest {
    #[validate(range(min = 1, message = "product required"))]
    pub product_type_id: i64,

    #[validate(range(min = 1, message = "quantity must be greater than zero"))]
    pub quantity: i64,
}
