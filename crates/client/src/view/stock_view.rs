use crate::{
    abstract_trait::DynStockApi,
    flow::{AdjustmentDialog, ProductDialog},
};
use shared::model::{ProductType, StockRow};
use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};
use tracing::{debug, error, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    /// The view was unmounted while the fetches were in flight.
    Discarded,
}

/// Detached handle used to tear a view down from outside the task driving it.
#[derive(Debug, Clone)]
pub struct ViewHandle {
    generation: Arc<AtomicU64>,
}

impl ViewHandle {
    pub fn unmount(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

/// In-memory stock rows and product-type options, plus the two mutation dialogs.
///
/// Both collections are only ever replaced wholesale by [`StockView::load_all`].
pub struct StockView {
    pub(crate) api: DynStockApi,
    state: LoadState,
    stock: Vec<StockRow>,
    product_types: Vec<ProductType>,
    pub product_dialog: ProductDialog,
    pub adjustment_dialog: AdjustmentDialog,
    generation: Arc<AtomicU64>,
    mounted_generation: u64,
}

impl std::fmt::Debug for StockView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StockView")
            .field("state", &self.state)
            .field("stock", &self.stock.len())
            .field("product_types", &self.product_types.len())
            .finish()
    }
}

impl StockView {
    pub fn new(api: DynStockApi) -> Self {
        Self {
            api,
            state: LoadState::Loading,
            stock: Vec::new(),
            product_types: Vec::new(),
            product_dialog: ProductDialog::default(),
            adjustment_dialog: AdjustmentDialog::default(),
            generation: Arc::new(AtomicU64::new(0)),
            mounted_generation: 0,
        }
    }

    /// Creates the view and runs the initial [`StockView::load_all`].
    pub async fn mount(api: DynStockApi) -> Self {
        let mut view = Self::new(api);
        view.load_all().await;
        view
    }

    pub fn handle(&self) -> ViewHandle {
        ViewHandle {
            generation: self.generation.clone(),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.generation.load(Ordering::SeqCst) == self.mounted_generation
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn stock(&self) -> &[StockRow] {
        &self.stock
    }

    pub fn product_types(&self) -> &[ProductType] {
        &self.product_types
    }

    /// Fetches stock and product types concurrently and replaces both collections.
    ///
    /// A stock failure leaves the view in `Error` with both collections empty. A
    /// product-type failure alone only empties the picklist.
    pub async fn load_all(&mut self) -> LoadOutcome {
        self.state = LoadState::Loading;

        let (stock, product_types) =
            tokio::join!(self.api.list_stock(), self.api.list_product_types());

        if !self.is_mounted() {
            debug!("Stock view unmounted during load, discarding results");
            return LoadOutcome::Discarded;
        }

        match stock {
            Ok(rows) => {
                self.stock = rows;
                self.product_types = product_types.unwrap_or_else(|e| {
                    warn!("Failed to load product types, picklist left empty: {e}");
                    Vec::new()
                });
                self.state = LoadState::Ready;
                debug!(
                    "Stock view ready with {} rows and {} product types",
                    self.stock.len(),
                    self.product_types.len()
                );
            }
            Err(e) => {
                error!("❌ Failed to load stock: {e}");
                self.stock.clear();
                self.product_types.clear();
                self.state = LoadState::Error(e.user_message());
            }
        }

        LoadOutcome::Applied
    }
}
