use crate::{
    abstract_trait::StockApiTrait,
    service::api_client::{ApiClient, RequestOptions},
};
use async_trait::async_trait;
use shared::{
    domain::{
        requests::{CreateProductTypeRequest, Direction, StockAdjustmentRequest},
        responses::ApiResponse,
    },
    errors::ApiError,
    model::{ProductType, StockRow},
};
use tracing::info;

#[derive(Debug, Clone)]
pub struct StockApiService {
    client: ApiClient,
}

impl StockApiService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StockApiTrait for StockApiService {
    async fn list_stock(&self) -> Result<Vec<StockRow>, ApiError> {
        let response: ApiResponse<Vec<StockRow>> = self.client.get_json("/api/stock").await?;
        Ok(response.data)
    }

    async fn list_product_types(&self) -> Result<Vec<ProductType>, ApiError> {
        let response: ApiResponse<Vec<ProductType>> =
            self.client.get_json("/api/product-types").await?;
        Ok(response.data)
    }

    async fn create_product_type(
        &self,
        req: &CreateProductTypeRequest,
    ) -> Result<ProductType, ApiError> {
        let response: ApiResponse<ProductType> =
            self.client.post_json("/api/product-types", req).await?;

        info!(
            "Created product type {} ({})",
            response.data.id, response.data.description
        );
        Ok(response.data)
    }

    async fn adjust_stock(
        &self,
        direction: Direction,
        req: &StockAdjustmentRequest,
    ) -> Result<(), ApiError> {
        let options = RequestOptions::post(req)?;
        self.client.request(direction.path(), options).await?;

        info!(
            "Stock {} of {} applied to product type {}",
            direction, req.quantity, req.product_type_id
        );
        Ok(())
    }
}
