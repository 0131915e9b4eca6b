//! Storefront page kinds and route configuration.

use waypoint_router::{Route, RouteTable};

/// Pages of the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    /// Landing page.
    Welcome,
    /// Product list.
    ProductList,
    /// Product detail, gated on a product prefetch.
    ProductDetail,
    /// Product edit, gated on a product prefetch.
    ProductEdit,
    /// Info tab of the edit page.
    EditInfo,
    /// Tags tab of the edit page.
    EditTags,
    /// Wildcard fallback.
    NotFound,
}

impl PageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageKind::Welcome => "welcome",
            PageKind::ProductList => "product-list",
            PageKind::ProductDetail => "product-detail",
            PageKind::ProductEdit => "product-edit",
            PageKind::EditInfo => "edit-info",
            PageKind::EditTags => "edit-tags",
            PageKind::NotFound => "not-found",
        }
    }
}

/// The storefront route table.
///
/// Order matters: the wildcard must stay last so it only catches paths no
/// earlier route claims.
pub fn storefront_routes() -> RouteTable<PageKind> {
    RouteTable::from_routes(vec![
        Route::page("welcome", PageKind::Welcome),
        Route::redirect("", "welcome"),
        Route::group("products").with_children(vec![
            Route::page("", PageKind::ProductList),
            Route::page(":id", PageKind::ProductDetail).with_resolve(),
            Route::page(":id/edit", PageKind::ProductEdit)
                .with_resolve()
                .with_children(vec![
                    Route::redirect("", "info"),
                    Route::page("info", PageKind::EditInfo),
                    Route::page("tags", PageKind::EditTags),
                ]),
        ]),
        Route::page("**", PageKind::NotFound),
    ])
}
