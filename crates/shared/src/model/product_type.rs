use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductType {
    pub id: i64,
    pub description: String,
    pub unit_price_cents: i64,
}

impl ProductType {
    /// Unit price as `units.cents`, e.g. 1201 -> "12.01".
    pub fn display_price(&self) -> String {
        let sign = if self.unit_price_cents < 0 { "-" } else { "" };
        let cents = self.unit_price_cents.unsigned_abs();
        format!("{sign}{}.{:02}", cents / 100, cents % 100)
    }
}
