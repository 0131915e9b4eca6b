//! End-to-end navigation tests against the in-memory catalog.

use std::sync::Arc;
use std::time::Duration;

use waypoint_app::{NavigationError, PageKind, Storefront};
use waypoint_catalog::InMemoryCatalog;
use waypoint_pages::{EditTab, PageState};

fn storefront() -> Storefront {
    Storefront::new(Arc::new(InMemoryCatalog::with_sample_data()))
}

#[tokio::test]
async fn root_redirects_to_welcome() {
    let app = storefront();
    let activation = app.navigate("/").await.unwrap();
    assert_eq!(activation.page, PageKind::Welcome);
    assert_eq!(activation.title, "Welcome");
}

#[tokio::test]
async fn product_list_loads_catalog() {
    let app = storefront();
    let activation = app.navigate("/products").await.unwrap();
    assert_eq!(activation.page, PageKind::ProductList);
    assert_eq!(activation.state, PageState::Loaded);
    assert_eq!(app.listed_product_names().await.len(), 5);
}

#[tokio::test]
async fn product_list_honors_filter_query() {
    let app = storefront();
    app.navigate("/products?filterBy=cart").await.unwrap();
    assert_eq!(app.listed_product_names().await, vec!["Garden Cart"]);
}

#[tokio::test]
async fn detail_derives_title_from_prefetched_product() {
    let app = storefront();
    let activation = app.navigate("/products/5").await.unwrap();
    assert_eq!(activation.page, PageKind::ProductDetail);
    assert_eq!(activation.title, "Product Detail: Hammer");
    assert_eq!(activation.state, PageState::Loaded);
}

#[tokio::test]
async fn malformed_key_fails_without_fetch() {
    let app = storefront();
    let activation = app.navigate("/products/abc").await.unwrap();
    assert_eq!(activation.state, PageState::LoadFailed);
    assert_eq!(activation.error_message, "Product id was not a number: abc");
    assert_eq!(activation.title, "Product Detail");
}

#[tokio::test]
async fn unknown_id_is_not_found() {
    let app = storefront();
    let activation = app.navigate("/products/99").await.unwrap();
    assert_eq!(activation.state, PageState::NotFound);
    assert_eq!(activation.title, "No product found");
}

#[tokio::test]
async fn bare_edit_path_lands_on_info_tab_in_add_mode() {
    let app = storefront();
    let activation = app.navigate("/products/0/edit").await.unwrap();
    assert_eq!(activation.page, PageKind::ProductEdit);
    assert_eq!(activation.title, "Add Product");
    assert_eq!(activation.active_tab, Some(EditTab::Info));
}

#[tokio::test]
async fn edit_tags_path_selects_tags_tab() {
    let app = storefront();
    let activation = app.navigate("/products/5/edit/tags").await.unwrap();
    assert_eq!(activation.title, "Edit Product: Hammer");
    assert_eq!(activation.active_tab, Some(EditTab::Tags));
}

#[tokio::test]
async fn unmatched_path_activates_not_found_page() {
    let app = storefront();
    let activation = app.navigate("/no/such/page").await.unwrap();
    assert_eq!(activation.page, PageKind::NotFound);
    assert_eq!(activation.title, "Page Not Found");
}

#[tokio::test]
async fn newer_navigation_supersedes_inflight_one() {
    let catalog = InMemoryCatalog::with_sample_data().with_latency(Duration::from_millis(200));
    let app = Arc::new(Storefront::new(Arc::new(catalog)));

    let slow = {
        let app = app.clone();
        tokio::spawn(async move { app.navigate("/products/1").await })
    };
    // Let the first attempt reach its fetch before superseding it.
    tokio::time::sleep(Duration::from_millis(50)).await;

    let activation = app.navigate("/products/2").await.unwrap();
    assert_eq!(activation.title, "Product Detail: Garden Cart");

    let superseded = slow.await.unwrap();
    assert!(matches!(
        superseded,
        Err(NavigationError::Superseded { url }) if url == "/products/1"
    ));
}

#[tokio::test]
async fn save_new_product_logs_message_and_returns_to_list() {
    let app = storefront();
    app.navigate("/products/0/edit").await.unwrap();
    app.update_edit_form(|edit| {
        let product = edit.product_mut().unwrap();
        product.product_name = "Wheelbarrow".to_string();
        product.product_code = "GDN-0100".to_string();
        product.category = "Garden".to_string();
    })
    .await;

    let activation = app.save_product().await.unwrap().unwrap();
    assert_eq!(activation.page, PageKind::ProductList);
    assert!(app
        .listed_product_names()
        .await
        .contains(&"Wheelbarrow".to_string()));
    assert_eq!(
        app.messages().await.last().unwrap().text,
        "The new Wheelbarrow was saved"
    );
}

#[tokio::test]
async fn save_invalid_product_stays_on_edit_page() {
    let app = storefront();
    app.navigate("/products/0/edit").await.unwrap();

    let outcome = app.save_product().await.unwrap();
    assert!(outcome.is_none());
    assert_eq!(
        app.edit_error_message().await,
        "Please correct the validation errors."
    );
}

#[tokio::test]
async fn delete_product_removes_it_from_the_list() {
    let app = storefront();
    app.navigate("/products/5/edit").await.unwrap();

    let activation = app.delete_product().await.unwrap().unwrap();
    assert_eq!(activation.page, PageKind::ProductList);
    assert!(!app
        .listed_product_names()
        .await
        .contains(&"Hammer".to_string()));
    assert_eq!(app.messages().await.last().unwrap().text, "Hammer was deleted");
}

#[tokio::test]
async fn edit_validation_resets_when_key_changes() {
    let app = storefront();
    app.navigate("/products/5/edit").await.unwrap();
    app.update_edit_form(|edit| {
        assert!(edit.is_valid(None));
    })
    .await;

    // Same route, different key: the controller is reused but its
    // validation state starts over for the blank product.
    app.navigate("/products/0/edit").await.unwrap();
    app.update_edit_form(|edit| {
        assert!(!edit.is_valid(None));
        assert_eq!(edit.key(), Some("0"));
    })
    .await;
}
