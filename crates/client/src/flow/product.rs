use crate::{flow::price::parse_price_cents, view::StockView};
use serde::Deserialize;
use shared::{
    domain::requests::CreateProductTypeRequest,
    errors::{FlowError, ValidationError},
    model::ProductType,
};
use tracing::{info, warn};
use validator::Validate;

const PRICE_INVALID: &str = "price must be zero or greater";

/// Raw text of the "new product" form, exactly as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProductForm {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: String,
}

impl ProductForm {
    /// Validates the form, description first, and converts the price to cents.
    pub fn to_request(&self) -> Result<CreateProductTypeRequest, ValidationError> {
        let cents = parse_price_cents(&self.price);

        let request = CreateProductTypeRequest {
            description: self.description.trim().to_string(),
            unit_price_cents: cents.unwrap_or_default(),
        };

        request
            .validate()
            .map_err(|e| ValidationError::from_errors(&e, &["description", "unit_price_cents"]))?;

        if cents.is_none() {
            return Err(ValidationError::new(PRICE_INVALID));
        }

        Ok(request)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDialog {
    pub open: bool,
    pub form: ProductForm,
    pub error: Option<String>,
}

impl ProductDialog {
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

    /// Keeps the dialog open with the entered values and shows the error.
    fn fail(&mut self, err: FlowError) -> FlowError {
        self.open = true;
        self.error = Some(err.user_message());
        err
    }
}

impl StockView {
    /// Submits the product dialog's form. On success the view is reloaded and the dialog
    /// reset and closed; on any failure the dialog stays open with its values intact.
    pub async fn create_product(&mut self) -> Result<ProductType, FlowError> {
        let request = match self.product_dialog.form.to_request() {
            Ok(request) => request,
            Err(e) => return Err(self.product_dialog.fail(e.into())),
        };

        match self.api.create_product_type(&request).await {
            Ok(created) => {
                info!("✅ Product type {} created", created.id);
                self.load_all().await;
                self.product_dialog.reset_and_close();
                Ok(created)
            }
            Err(e) => {
                warn!("Product creation rejected: {e}");
                Err(self.product_dialog.fail(e.into()))
            }
        }
    }
}
