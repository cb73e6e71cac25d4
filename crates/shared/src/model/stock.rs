use crate::utils::deserialize_utc_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Quantity-on-hand record tied to one product type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRow {
    pub id: i64,
    pub product_type_id: i64,
    pub description: String,
    pub available_quantity: i64,
    /// Offset-less timestamps are read as UTC.
    #[serde(deserialize_with = "deserialize_utc_datetime")]
    pub updated_at: DateTime<Utc>,
}
