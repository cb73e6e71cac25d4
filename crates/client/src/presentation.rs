pub const LOW_BELOW: i64 = 20;
pub const HEALTHY_FROM: i64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StockStatus {
    Low,
    Ok,
    Healthy,
}

impl StockStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::Low => "Low",
            StockStatus::Ok => "OK",
            StockStatus::Healthy => "Healthy",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            StockStatus::Low => "low",
            StockStatus::Ok => "ok",
            StockStatus::Healthy => "healthy",
        }
    }
}

pub fn classify(available: i64) -> StockStatus {
    if available < LOW_BELOW {
        StockStatus::Low
    } else if available < HEALTHY_FROM {
        StockStatus::Ok
    } else {
        StockStatus::Healthy
    }
}
