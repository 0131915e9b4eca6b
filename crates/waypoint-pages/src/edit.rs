//! Product edit page controller with tabbed validation.

use std::collections::HashMap;

use tracing::debug;
use waypoint_catalog::{CatalogError, Product, ProductGateway};
use waypoint_core::MessageLog;
use waypoint_resolve::Resolved;

use crate::state::PageState;

const DEFAULT_TITLE: &str = "Product Edit";

/// Where edited products return to after save/delete.
const PRODUCTS_PATH: &str = "/products";

/// Tabs of the edit page. Each tab validates its own slice of the product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EditTab {
    /// Name and code.
    #[default]
    Info,
    /// Category and tags.
    Tags,
}

impl EditTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            EditTab::Info => "info",
            EditTab::Tags => "tags",
        }
    }
}

/// Derives the edit view state from a prefetched product.
///
/// The same controller serves create mode (blank product, id 0) and edit
/// mode. Validation state belongs to the current key's cycle and is
/// discarded when a navigation for another key begins, even though the
/// controller instance is reused.
#[derive(Debug, Default)]
pub struct ProductEditPage {
    page_title: String,
    product: Option<Product>,
    error_message: String,
    state: PageState,
    key: Option<String>,
    active_tab: EditTab,
    data_is_valid: HashMap<EditTab, bool>,
}

impl ProductEditPage {
    /// Create an idle controller.
    pub fn new() -> Self {
        Self {
            page_title: DEFAULT_TITLE.to_string(),
            ..Self::default()
        }
    }

    /// Start a new navigation cycle for a key, resetting the sub-form and
    /// validation state of the prior cycle.
    pub fn begin_navigation(&mut self, key: &str) {
        debug!(key, "edit page awaiting prefetch");
        self.page_title = DEFAULT_TITLE.to_string();
        self.product = None;
        self.error_message.clear();
        self.state = PageState::AwaitingPrefetch;
        self.key = Some(key.to_string());
        self.active_tab = EditTab::default();
        self.data_is_valid.clear();
    }

    /// Apply the prefetch result and derive view state.
    pub fn on_resolved(&mut self, resolved: Resolved<Product>) {
        let (product, error) = resolved.into_parts();
        self.error_message = error.unwrap_or_default();

        if !self.error_message.is_empty() {
            self.state = PageState::LoadFailed;
            return;
        }

        match product {
            Some(product) => {
                self.page_title = if product.is_new() {
                    "Add Product".to_string()
                } else {
                    format!("Edit Product: {}", product.product_name)
                };
                self.product = Some(product);
                self.state = PageState::Loaded;
                self.validate();
            }
            None => {
                self.page_title = "No product found".to_string();
                self.state = PageState::NotFound;
            }
        }
    }

    /// Switch the visible tab.
    pub fn set_active_tab(&mut self, tab: EditTab) {
        self.active_tab = tab;
    }

    /// Recompute per-tab validity from the product data.
    ///
    /// Validation runs against the data, not form inputs: the info tab
    /// requires a name of at least 3 characters and a non-empty code; the
    /// tags tab requires a category of at least 3 characters.
    pub fn validate(&mut self) {
        self.data_is_valid.clear();
        let Some(product) = &self.product else {
            return;
        };

        self.data_is_valid.insert(
            EditTab::Info,
            product.product_name.chars().count() >= 3 && !product.product_code.is_empty(),
        );
        self.data_is_valid
            .insert(EditTab::Tags, product.category.chars().count() >= 3);
    }

    /// Validity of one tab, or of the whole page when `tab` is `None`.
    pub fn is_valid(&self, tab: Option<EditTab>) -> bool {
        match tab {
            Some(tab) => self.data_is_valid.get(&tab).copied().unwrap_or(false),
            None => {
                !self.data_is_valid.is_empty() && self.data_is_valid.values().all(|valid| *valid)
            }
        }
    }

    /// Save the product: create when it has never been saved, update
    /// otherwise. Returns the redirect target on success.
    pub async fn save(
        &mut self,
        gateway: &dyn ProductGateway,
        messages: &mut MessageLog,
    ) -> Option<String> {
        self.validate();
        let Some(product) = self.product.clone() else {
            self.error_message = "Please correct the validation errors.".to_string();
            return None;
        };
        if !self.is_valid(None) {
            self.error_message = "Please correct the validation errors.".to_string();
            return None;
        }

        let name = product.product_name.clone();
        let is_new = product.is_new();
        let result: Result<Product, CatalogError> = if is_new {
            gateway.create_product(product).await
        } else {
            gateway.update_product(product).await
        };

        match result {
            Ok(saved) => {
                let message = if is_new {
                    format!("The new {name} was saved")
                } else {
                    format!("The updated {name} was saved")
                };
                messages.add(message);
                self.product = Some(saved);
                Some(PRODUCTS_PATH.to_string())
            }
            Err(error) => {
                self.error_message = error.to_string();
                None
            }
        }
    }

    /// Delete the product. Never-saved products are dropped without a
    /// gateway call. Returns the redirect target when the page should leave.
    pub async fn delete(
        &mut self,
        gateway: &dyn ProductGateway,
        messages: &mut MessageLog,
    ) -> Option<String> {
        let product = self.product.clone()?;
        let name = product.product_name.clone();

        if product.is_new() {
            // Never saved; nothing to delete on the backend.
            messages.add(format!("{name} was deleted"));
            return Some(PRODUCTS_PATH.to_string());
        }

        match gateway.delete_product(product.id).await {
            Ok(()) => {
                messages.add(format!("{name} was deleted"));
                Some(PRODUCTS_PATH.to_string())
            }
            Err(error) => {
                self.error_message = error.to_string();
                None
            }
        }
    }

    pub fn page_title(&self) -> &str {
        &self.page_title
    }

    pub fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    /// Mutable product access for form edits; call `validate` afterwards.
    pub fn product_mut(&mut self) -> Option<&mut Product> {
        self.product.as_mut()
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn state(&self) -> PageState {
        self.state
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn active_tab(&self) -> EditTab {
        self.active_tab
    }
}
