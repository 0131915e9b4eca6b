//! The storefront navigator.
//!
//! Drives one navigation attempt end to end: parse the URL, match the route
//! table, run the prefetch gate when the route requires it, then hand the
//! terminal `Resolved` to the (reused) page controller. A newer attempt
//! supersedes an in-flight one; the superseded attempt's result never
//! reaches a controller.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;
use tracing::debug;

use waypoint_catalog::{Product, ProductGateway, ProductResolver};
use waypoint_core::{Message, MessageLog, NavigationRequest};
use waypoint_pages::{EditTab, PageState, ProductDetailPage, ProductEditPage, ProductListPage};
use waypoint_resolve::{resolve_gated, AttemptController, Resolved};
use waypoint_router::{RouteTable, RouterError};

use crate::routes::{storefront_routes, PageKind};

/// Errors that can occur while navigating.
#[derive(Error, Debug)]
pub enum NavigationError {
    /// The path matched no route.
    #[error(transparent)]
    Route(#[from] RouterError),

    /// A newer navigation superseded this one before its prefetch finished.
    #[error("Navigation superseded: {url}")]
    Superseded { url: String },
}

/// Snapshot of the page activated by a navigation.
#[derive(Debug, Clone, PartialEq)]
pub struct Activation {
    /// Which page was activated.
    pub page: PageKind,
    /// Derived page title.
    pub title: String,
    /// Page lifecycle state after activation.
    pub state: PageState,
    /// Error message shown by the page, empty when none.
    pub error_message: String,
    /// Active tab for the edit page.
    pub active_tab: Option<EditTab>,
}

impl Activation {
    fn static_page(page: PageKind, title: &str) -> Self {
        Self {
            page,
            title: title.to_string(),
            state: PageState::Loaded,
            error_message: String::new(),
            active_tab: None,
        }
    }

    fn from_list(list: &ProductListPage) -> Self {
        Self {
            page: PageKind::ProductList,
            title: list.page_title().to_string(),
            state: list.state(),
            error_message: list.error_message().to_string(),
            active_tab: None,
        }
    }

    fn from_detail(detail: &ProductDetailPage) -> Self {
        Self {
            page: PageKind::ProductDetail,
            title: detail.page_title().to_string(),
            state: detail.state(),
            error_message: detail.error_message().to_string(),
            active_tab: None,
        }
    }

    fn from_edit(edit: &ProductEditPage) -> Self {
        Self {
            page: PageKind::ProductEdit,
            title: edit.page_title().to_string(),
            state: edit.state(),
            error_message: edit.error_message().to_string(),
            active_tab: Some(edit.active_tab()),
        }
    }
}

/// Long-lived page controllers, reused across navigations.
#[derive(Debug, Default)]
struct PageSet {
    list: ProductListPage,
    detail: ProductDetailPage,
    edit: ProductEditPage,
}

/// The storefront application.
///
/// All collaborators are constructor-supplied; there is no process-wide
/// registry. `navigate` takes `&self` so a newer attempt can supersede one
/// still awaiting its prefetch.
pub struct Storefront {
    table: RouteTable<PageKind>,
    gateway: Arc<dyn ProductGateway>,
    resolver: ProductResolver<dyn ProductGateway>,
    attempts: Mutex<AttemptController>,
    pages: Mutex<PageSet>,
    messages: Mutex<MessageLog>,
}

impl Storefront {
    /// Create a storefront over a product gateway, using the default routes.
    pub fn new(gateway: Arc<dyn ProductGateway>) -> Self {
        Self::with_routes(storefront_routes(), gateway)
    }

    /// Create a storefront with a custom route table.
    pub fn with_routes(table: RouteTable<PageKind>, gateway: Arc<dyn ProductGateway>) -> Self {
        Self {
            table,
            resolver: ProductResolver::new(gateway.clone()),
            gateway,
            attempts: Mutex::new(AttemptController::new()),
            pages: Mutex::new(PageSet::default()),
            messages: Mutex::new(MessageLog::new()),
        }
    }

    /// Navigate to a URL. Completes only once the activated page has
    /// reached a terminal state; no partial page is ever observable.
    pub async fn navigate(&self, url: &str) -> Result<Activation, NavigationError> {
        let request = NavigationRequest::parse(url);
        let matched = self.table.match_path(&request.path)?;
        let page = matched.page().target;
        debug!(id = %request.id, path = %request.path, page = page.as_str(), "navigating");

        match page {
            PageKind::Welcome => Ok(Activation::static_page(PageKind::Welcome, "Welcome")),
            PageKind::NotFound => {
                Ok(Activation::static_page(PageKind::NotFound, "Page Not Found"))
            }
            PageKind::ProductList => {
                {
                    let mut pages = self.pages.lock().await;
                    pages.list.begin_navigation(&request.query);
                }
                let result = self.gateway.products().await;
                let mut pages = self.pages.lock().await;
                pages.list.on_products(result);
                Ok(Activation::from_list(&pages.list))
            }
            PageKind::ProductDetail => {
                let key = matched.param("id").unwrap_or_default().to_string();
                let resolved = self
                    .prefetch(url, &key, |pages| {
                        pages.detail.begin_navigation(&key);
                    })
                    .await?;
                let mut pages = self.pages.lock().await;
                pages.detail.on_resolved(resolved);
                Ok(Activation::from_detail(&pages.detail))
            }
            PageKind::ProductEdit => {
                let key = matched.param("id").unwrap_or_default().to_string();
                let tab = match matched.leaf().target {
                    PageKind::EditTags => EditTab::Tags,
                    _ => EditTab::Info,
                };
                let resolved = self
                    .prefetch(url, &key, |pages| {
                        pages.edit.begin_navigation(&key);
                        pages.edit.set_active_tab(tab);
                    })
                    .await?;
                let mut pages = self.pages.lock().await;
                pages.edit.on_resolved(resolved);
                Ok(Activation::from_edit(&pages.edit))
            }
            // Tab targets only appear beneath the edit page in the default
            // table; a standalone registration activates an empty edit shell.
            PageKind::EditInfo | PageKind::EditTags => {
                Ok(Activation::static_page(page, "Product Edit"))
            }
        }
    }

    /// Run the gated prefetch for one attempt, superseding any prior one.
    async fn prefetch(
        &self,
        url: &str,
        key: &str,
        begin: impl FnOnce(&mut PageSet),
    ) -> Result<Resolved<Product>, NavigationError> {
        let (attempt, registration) = self.attempts.lock().await.begin();
        {
            let mut pages = self.pages.lock().await;
            begin(&mut pages);
        }

        let Some(resolved) = resolve_gated(&self.resolver, key, registration).await else {
            return Err(NavigationError::Superseded {
                url: url.to_string(),
            });
        };

        let mut attempts = self.attempts.lock().await;
        if !attempts.is_current(attempt) {
            // Completed after a newer attempt began; discard the result.
            return Err(NavigationError::Superseded {
                url: url.to_string(),
            });
        }
        attempts.finish(attempt);
        Ok(resolved)
    }

    /// Save the edit page's product, then navigate to the redirect target.
    /// Returns `None` when the save did not go through (validation or
    /// gateway failure); the edit page carries the error message.
    pub async fn save_product(&self) -> Result<Option<Activation>, NavigationError> {
        let redirect = {
            let mut pages = self.pages.lock().await;
            let mut messages = self.messages.lock().await;
            pages.edit.save(self.gateway.as_ref(), &mut messages).await
        };
        match redirect {
            Some(path) => self.navigate(&path).await.map(Some),
            None => Ok(None),
        }
    }

    /// Delete the edit page's product, then navigate to the redirect target.
    pub async fn delete_product(&self) -> Result<Option<Activation>, NavigationError> {
        let redirect = {
            let mut pages = self.pages.lock().await;
            let mut messages = self.messages.lock().await;
            pages.edit.delete(self.gateway.as_ref(), &mut messages).await
        };
        match redirect {
            Some(path) => self.navigate(&path).await.map(Some),
            None => Ok(None),
        }
    }

    /// Mutate the edit page's form state (e.g. apply user input) and
    /// revalidate.
    pub async fn update_edit_form(&self, edit: impl FnOnce(&mut ProductEditPage)) {
        let mut pages = self.pages.lock().await;
        edit(&mut pages.edit);
        pages.edit.validate();
    }

    /// Titles of the products currently shown by the list page.
    pub async fn listed_product_names(&self) -> Vec<String> {
        let pages = self.pages.lock().await;
        pages
            .list
            .filtered_products()
            .iter()
            .map(|p| p.product_name.clone())
            .collect()
    }

    /// The edit page's current error message.
    pub async fn edit_error_message(&self) -> String {
        self.pages.lock().await.edit.error_message().to_string()
    }

    /// Snapshot of the operation message log.
    pub async fn messages(&self) -> Vec<Message> {
        self.messages.lock().await.messages().to_vec()
    }
}
