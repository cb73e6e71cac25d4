use crate::view::StockView;
use serde::Deserialize;
use shared::{
    domain::requests::{Direction, StockAdjustmentRequest},
    errors::{FlowError, ValidationError},
    model::ProductType,
};
use tracing::{info, warn};
use validator::Validate;

const PRODUCT_REQUIRED: &str = "product required";
const QUANTITY_INVALID: &str = "quantity must be greater than zero";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AdjustmentForm {
    #[serde(default)]
    pub product_type_id: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub direction: Direction,
}

impl AdjustmentForm {
    /// The product must be one of `options`. Current stock is deliberately not consulted:
    /// over-subtraction is for the server to reject.
    pub fn to_request(
        &self,
        options: &[ProductType],
    ) -> Result<(Direction, StockAdjustmentRequest), ValidationError> {
        let product_type_id = self
            .product_type_id
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|id| options.iter().any(|p| p.id == *id))
            .ok_or_else(|| ValidationError::new(PRODUCT_REQUIRED))?;

        let quantity = self
            .quantity
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::new(QUANTITY_INVALID))?;

        let request = StockAdjustmentRequest {
            product_type_id,
            quantity,
        };

        request
            .validate()
            .map_err(|e| ValidationError::from_errors(&e, &["product_type_id", "quantity"]))?;

        Ok((self.direction, request))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjustmentDialog {
    pub open: bool,
    pub form: AdjustmentForm,
    pub error: Option<String>,
}

impl AdjustmentDialog {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.error = None;
    }

    fn reset_and_close(&mut self) {
        *self = Self::default();
    }

    fn fail(&mut self, err: FlowError) -> FlowError {
        self.open = true;
        self.error = Some(err.user_message());
        err
    }
}

impl StockView {
    /// Submits the adjustment dialog's form to the add or subtract endpoint.
    pub async fn adjust_quantity(&mut self) -> Result<(), FlowError> {
        let (direction, request) = match self
            .adjustment_dialog
            .form
            .to_request(self.product_types())
        {
            Ok(parsed) => parsed,
            Err(e) => return Err(self.adjustment_dialog.fail(e.into())),
        };

        match self.api.adjust_stock(direction, &request).await {
            Ok(()) => {
                info!(
                    "✅ Stock {direction} of {} on product type {}",
                    request.quantity, request.product_type_id
                );
                self.load_all().await;
                self.adjustment_dialog.reset_and_close();
                Ok(())
            }
            Err(e) => {
                warn!("Stock {direction} rejected: {e}");
                Err(self.adjustment_dialog.fail(e.into()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<ProductType> {
        vec![ProductType {
            id: 7,
            description: "Towel".into(),
            unit_price_cents: 300,
        }]
    }

    fn form(product: &str, quantity: &str, direction: Direction) -> AdjustmentForm {
        AdjustmentForm {
            product_type_id: product.into(),
            quantity: quantity.into(),
            direction,
        }
    }

    #[test]
    fn resolves_loaded_product() {
        let (direction, request) = form("7", " 5 ", Direction::Subtract)
            .to_request(&options())
            .unwrap();
        assert_eq!(direction, Direction::Subtract);
        assert_eq!(request.product_type_id, 7);
        assert_eq!(request.quantity, 5);
    }

    #[test]
    fn unknown_or_missing_product_is_rejected_first() {
        for product in ["", "8", "x"] {
            let err = form(product, "0", Direction::Add)
                .to_request(&options())
                .unwrap_err();
            assert_eq!(err.message(), PRODUCT_REQUIRED);
        }
    }

    #[test]
    fn non_positive_or_fractional_quantity_is_rejected() {
        for quantity in ["0", "-3", "2.5", ""] {
            let err = form("7", quantity, Direction::Add)
                .to_request(&options())
                .unwrap_err();
            assert_eq!(err.message(), QUANTITY_INVALID, "quantity {quantity:?}");
        }
    }
}
