//! Product list page controller.

use tracing::debug;
use waypoint_catalog::{CatalogError, Product};
use waypoint_core::QueryParams;

use crate::state::PageState;

/// Derives the list view from the full catalog, retaining the filter passed
/// as a query parameter across navigations.
#[derive(Debug, Default)]
pub struct ProductListPage {
    page_title: String,
    products: Vec<Product>,
    error_message: String,
    list_filter: Option<String>,
    show_image: bool,
    state: PageState,
}

impl ProductListPage {
    /// Create an idle controller.
    pub fn new() -> Self {
        Self {
            page_title: "Product List".to_string(),
            ..Self::default()
        }
    }

    /// Start a new navigation cycle, capturing `filterBy` and `showImage`
    /// query parameters.
    pub fn begin_navigation(&mut self, query: &QueryParams) {
        self.list_filter = query.get("filterBy").cloned();
        self.show_image = query
            .get("showImage")
            .is_some_and(|v| v == "true" || v.is_empty());
        self.products.clear();
        self.error_message.clear();
        self.state = PageState::AwaitingPrefetch;
        debug!(filter = ?self.list_filter, "list page awaiting products");
    }

    /// Apply the fetched catalog, normalized like a prefetch result.
    pub fn on_products(&mut self, result: Result<Vec<Product>, CatalogError>) {
        match result {
            Ok(products) => {
                self.products = products;
                self.state = PageState::Loaded;
            }
            Err(error) => {
                self.error_message = error.to_string();
                self.state = PageState::LoadFailed;
            }
        }
    }

    /// Products with the current filter applied (case-insensitive name match).
    pub fn filtered_products(&self) -> Vec<&Product> {
        match &self.list_filter {
            Some(filter) if !filter.is_empty() => {
                let needle = filter.to_lowercase();
                self.products
                    .iter()
                    .filter(|p| p.product_name.to_lowercase().contains(&needle))
                    .collect()
            }
            _ => self.products.iter().collect(),
        }
    }

    pub fn page_title(&self) -> &str {
        &self.page_title
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn list_filter(&self) -> Option<&str> {
        self.list_filter.as_deref()
    }

    pub fn show_image(&self) -> bool {
        self.show_image
    }

    pub fn state(&self) -> PageState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str) -> Product {
        let mut p = Product::blank();
        p.id = 1;
        p.product_name = name.to_string();
        p
    }

    #[test]
    fn test_filter_from_query_param() {
        let mut query = QueryParams::new();
        query.insert("filterBy".to_string(), "cart".to_string());

        let mut page = ProductListPage::new();
        page.begin_navigation(&query);
        page.on_products(Ok(vec![product("Garden Cart"), product("Hammer")]));

        let filtered = page.filtered_products();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].product_name, "Garden Cart");
    }

    #[test]
    fn test_no_filter_shows_all() {
        let mut page = ProductListPage::new();
        page.begin_navigation(&QueryParams::new());
        page.on_products(Ok(vec![product("Garden Cart"), product("Hammer")]));

        assert_eq!(page.filtered_products().len(), 2);
        assert_eq!(page.state(), PageState::Loaded);
    }

    #[test]
    fn test_fetch_error_is_absorbed() {
        let mut page = ProductListPage::new();
        page.begin_navigation(&QueryParams::new());
        page.on_products(Err(CatalogError::Backend("timeout".to_string())));

        assert_eq!(page.state(), PageState::LoadFailed);
        assert_eq!(page.error_message(), "timeout");
        assert!(page.products().is_empty());
    }

    #[test]
    fn test_show_image_query_param() {
        let mut query = QueryParams::new();
        query.insert("showImage".to_string(), "true".to_string());

        let mut page = ProductListPage::new();
        page.begin_navigation(&query);
        assert!(page.show_image());

        page.begin_navigation(&QueryParams::new());
        assert!(!page.show_image());
    }
}
