use async_trait::async_trait;
use shared::{
    domain::requests::{CreateProductTypeRequest, Direction, StockAdjustmentRequest},
    errors::ApiError,
    model::{ProductType, StockRow},
};
use std::sync::Arc;

pub type DynStockApi = Arc<dyn StockApiTrait + Send + Sync>;

#[async_trait]
pub trait StockApiTrait {
    async fn list_stock(&self) -> Result<Vec<StockRow>, ApiError>;
    async fn list_product_types(&self) -> Result<Vec<ProductType>, ApiError>;
    async fn create_product_type(
        &self,
        req: &CreateProductTypeRequest,
    ) -> Result<ProductType, ApiError>;
    async fn adjust_stock(
        &self,
        direction: Direction,
        req: &StockAdjustmentRequest,
    ) -> Result<(), ApiError>;
}
