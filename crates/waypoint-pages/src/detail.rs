//! Product detail page controller.

use tracing::debug;
use waypoint_catalog::Product;
use waypoint_resolve::Resolved;

use crate::state::PageState;

const DEFAULT_TITLE: &str = "Product Detail";

/// Derives the detail view state from a prefetched product.
///
/// The controller instance is reused across navigations to the same route;
/// `begin_navigation` starts a fresh cycle and discards prior state.
#[derive(Debug, Default)]
pub struct ProductDetailPage {
    page_title: String,
    product: Option<Product>,
    error_message: String,
    state: PageState,
    key: Option<String>,
}

impl ProductDetailPage {
    /// Create an idle controller.
    pub fn new() -> Self {
        Self {
            page_title: DEFAULT_TITLE.to_string(),
            ..Self::default()
        }
    }

    /// Start a new navigation cycle for a key. Prior view state is replaced
    /// wholesale.
    pub fn begin_navigation(&mut self, key: &str) {
        debug!(key, "detail page awaiting prefetch");
        self.page_title = DEFAULT_TITLE.to_string();
        self.product = None;
        self.error_message.clear();
        self.state = PageState::AwaitingPrefetch;
        self.key = Some(key.to_string());
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
                self.page_title = format!("Product Detail: {}", product.product_name);
                self.product = Some(product);
                self.state = PageState::Loaded;
            }
            None => {
                self.page_title = "No product found".to_string();
                self.state = PageState::NotFound;
            }
        }
    }

    pub fn page_title(&self) -> &str {
        &self.page_title
    }

    pub fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn state(&self) -> PageState {
        self.state
    }

    /// The key of the current navigation cycle.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> Product {
        let mut product = Product::blank();
        product.id = 5;
        product.product_name = "Widget".to_string();
        product
    }

    #[test]
    fn test_loaded_derives_title_from_name() {
        let mut page = ProductDetailPage::new();
        page.begin_navigation("5");
        assert_eq!(page.state(), PageState::AwaitingPrefetch);

        page.on_resolved(Resolved::success(widget()));
        assert_eq!(page.state(), PageState::Loaded);
        assert_eq!(page.page_title(), "Product Detail: Widget");
        assert_eq!(page.error_message(), "");
    }

    #[test]
    fn test_failure_keeps_default_title() {
        let mut page = ProductDetailPage::new();
        page.begin_navigation("abc");
        page.on_resolved(Resolved::failure("Product id was not a number: abc"));

        assert_eq!(page.state(), PageState::LoadFailed);
        assert_eq!(page.page_title(), "Product Detail");
        assert_eq!(page.error_message(), "Product id was not a number: abc");
        assert!(page.product().is_none());
    }

    #[test]
    fn test_missing_resource_is_not_found() {
        let mut page = ProductDetailPage::new();
        page.begin_navigation("99");
        page.on_resolved(Resolved::missing());

        assert_eq!(page.state(), PageState::NotFound);
        assert_eq!(page.page_title(), "No product found");
    }

    #[test]
    fn test_new_cycle_replaces_prior_state() {
        let mut page = ProductDetailPage::new();
        page.begin_navigation("5");
        page.on_resolved(Resolved::success(widget()));

        page.begin_navigation("99");
        assert_eq!(page.state(), PageState::AwaitingPrefetch);
        assert_eq!(page.page_title(), "Product Detail");
        assert!(page.product().is_none());
        assert_eq!(page.key(), Some("99"));
    }
}
