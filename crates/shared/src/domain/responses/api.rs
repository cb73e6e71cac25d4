use serde::{Deserialize, Serialize};

/// Success envelope used by every endpoint of the laundry API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
}
