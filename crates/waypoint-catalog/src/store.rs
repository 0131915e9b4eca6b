//! Product gateway trait and the in-memory backend.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::CatalogError;
use crate::product::Product;

/// The fetch dependency behind the product resolver.
///
/// Implementations own any retry policy; the resolver above never retries.
#[async_trait]
pub trait ProductGateway: Send + Sync {
    /// Fetch a product by id. Id `0` yields a blank product (create mode);
    /// an unknown id yields `Ok(None)`.
    async fn product_by_id(&self, id: u32) -> Result<Option<Product>, CatalogError>;

    /// Fetch all products.
    async fn products(&self) -> Result<Vec<Product>, CatalogError>;

    /// Create a product. The catalog assigns the id.
    async fn create_product(&self, product: Product) -> Result<Product, CatalogError>;

    /// Update an existing product.
    async fn update_product(&self, product: Product) -> Result<Product, CatalogError>;

    /// Delete a product by id.
    async fn delete_product(&self, id: u32) -> Result<(), CatalogError>;
}

/// In-memory catalog backend.
///
/// Stands in for a real backend service during development and tests, with
/// an optional artificial latency so prefetch gating is observable.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    products: RwLock<Vec<Product>>,
    latency: Duration,
}

impl InMemoryCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog seeded with sample products.
    pub fn with_sample_data() -> Self {
        Self {
            products: RwLock::new(sample_products()),
            latency: Duration::ZERO,
        }
    }

    /// Simulate backend latency on every operation.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl ProductGateway for InMemoryCatalog {
    async fn product_by_id(&self, id: u32) -> Result<Option<Product>, CatalogError> {
        self.simulate_latency().await;
        if id == crate::product::NEW_PRODUCT_ID {
            return Ok(Some(Product::blank()));
        }
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn products(&self) -> Result<Vec<Product>, CatalogError> {
        self.simulate_latency().await;
        Ok(self.products.read().await.clone())
    }

    async fn create_product(&self, mut product: Product) -> Result<Product, CatalogError> {
        self.simulate_latency().await;
        let mut products = self.products.write().await;
        let next_id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        product.id = next_id;
        debug!(id = product.id, name = %product.product_name, "creating product");
        products.push(product.clone());
        Ok(product)
    }

    async fn update_product(&self, product: Product) -> Result<Product, CatalogError> {
        self.simulate_latency().await;
        let mut products = self.products.write().await;
        let slot = products
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or(CatalogError::ProductNotFound(product.id))?;
        debug!(id = product.id, name = %product.product_name, "updating product");
        *slot = product.clone();
        Ok(product)
    }

    async fn delete_product(&self, id: u32) -> Result<(), CatalogError> {
        self.simulate_latency().await;
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|p| p.id != id);
        if products.len() == before {
            return Err(CatalogError::ProductNotFound(id));
        }
        debug!(id, "deleted product");
        Ok(())
    }
}

/// Seed data for the in-memory catalog.
fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            product_name: "Leaf Rake".to_string(),
            product_code: "GDN-0011".to_string(),
            category: "Garden".to_string(),
            tags: vec!["rake".into(), "leaf".into(), "yard".into(), "home".into()],
            release_date: "March 19, 2021".to_string(),
            price: 19.95,
            description: "Leaf rake with 48-inch wooden handle".to_string(),
            star_rating: 3.2,
            image_url: "assets/images/leaf_rake.png".to_string(),
        },
        Product {
            id: 2,
            product_name: "Garden Cart".to_string(),
            product_code: "GDN-0023".to_string(),
            category: "Garden".to_string(),
            tags: vec!["barrow".into(), "cart".into(), "wheelbarrow".into()],
            release_date: "March 18, 2021".to_string(),
            price: 32.99,
            description: "15 gallon capacity rolling garden cart".to_string(),
            star_rating: 4.2,
            image_url: "assets/images/garden_cart.png".to_string(),
        },
        Product {
            id: 5,
            product_name: "Hammer".to_string(),
            product_code: "TBX-0048".to_string(),
            category: "Toolbox".to_string(),
            tags: vec!["tools".into(), "hammer".into(), "construction".into()],
            release_date: "May 21, 2021".to_string(),
            price: 8.9,
            description: "Curved claw steel hammer".to_string(),
            star_rating: 4.8,
            image_url: "assets/images/hammer.png".to_string(),
        },
        Product {
            id: 8,
            product_name: "Saw".to_string(),
            product_code: "TBX-0022".to_string(),
            category: "Toolbox".to_string(),
            tags: Vec::new(),
            release_date: "May 15, 2021".to_string(),
            price: 11.55,
            description: "15-inch steel blade hand saw".to_string(),
            star_rating: 3.7,
            image_url: "assets/images/saw.png".to_string(),
        },
        Product {
            id: 10,
            product_name: "Video Game Controller".to_string(),
            product_code: "GMG-0042".to_string(),
            category: "Gaming".to_string(),
            tags: Vec::new(),
            release_date: "October 15, 2020".to_string(),
            price: 35.95,
            description: "Standard two-button video game controller".to_string(),
            star_rating: 4.6,
            image_url: "assets/images/xbox-controller.png".to_string(),
        },
    ]
}
