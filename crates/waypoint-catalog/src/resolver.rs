//! Prefetch gateway for single products.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};
use waypoint_resolve::{Resolve, Resolved};

use crate::product::Product;
use crate::store::ProductGateway;

/// Resolves the `:id` route key into a product before the page activates.
///
/// The key is validated before any fetch; a malformed key is rejected
/// locally with zero I/O. Fetch errors are absorbed into the failure
/// channel — callers never see an error escape this resolver.
pub struct ProductResolver<G: ?Sized> {
    gateway: Arc<G>,
}

impl<G: ?Sized> ProductResolver<G> {
    /// Create a resolver over a constructor-supplied gateway.
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl<G: ProductGateway + ?Sized> Resolve for ProductResolver<G> {
    type Resource = Product;

    async fn resolve(&self, key: &str) -> Resolved<Product> {
        let id = match key.parse::<u32>() {
            Ok(id) => id,
            Err(_) => {
                let message = format!("Product id was not a number: {key}");
                warn!(key, "rejecting prefetch before any fetch");
                return Resolved::failure(message);
            }
        };

        match self.gateway.product_by_id(id).await {
            Ok(Some(product)) => {
                debug!(id, name = %product.product_name, "prefetched product");
                Resolved::success(product)
            }
            Ok(None) => {
                debug!(id, "no product for id");
                Resolved::missing()
            }
            Err(error) => {
                let message = format!("Retrieval error: {error}");
                warn!(id, %error, "product fetch failed");
                Resolved::failure(message)
            }
        }
    }
}
