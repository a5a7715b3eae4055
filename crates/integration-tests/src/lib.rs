//! Integration tests for Menu Cart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p menu-cart-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_cart` - Menu and cart fragment routes
//! - `storefront_checkout` - Checkout and order placement flow
//!
//! The helpers below build a storefront router around an in-memory
//! catalogue and drive it with `tower::ServiceExt::oneshot`, so no network
//! or filesystem access is needed.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, Request, StatusCode, header};
use menu_cart_core::Catalogue;
use menu_cart_storefront::config::StorefrontConfig;
use menu_cart_storefront::state::AppState;
use tower::ServiceExt;

/// Catalogue used by the integration tests.
pub const CATALOGUE_JSON: &str = r#"[
    {"id": 1, "name": "A", "price": 10.00, "description": "First item", "imgUrl": "a.png"},
    {"id": 2, "name": "B", "price": 2.50, "description": "Second item", "imgUrl": "b.png"}
]"#;

/// A running-in-memory storefront.
pub struct TestStorefront {
    pub state: AppState,
}

/// Response status, headers and body text.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestStorefront {
    /// Storefront with [`CATALOGUE_JSON`] installed.
    pub async fn new() -> Self {
        Self::with_catalogue(CATALOGUE_JSON).await
    }

    /// Storefront with the given catalogue resource installed.
    pub async fn with_catalogue(json: &str) -> Self {
        let ctx = Self::without_catalogue();
        let catalogue = Catalogue::from_json(json.as_bytes()).unwrap();
        ctx.state
            .storefront()
            .lock()
            .await
            .populate_catalogue(catalogue)
            .unwrap();
        ctx
    }

    /// Storefront whose catalogue never loaded.
    #[must_use]
    pub fn without_catalogue() -> Self {
        Self {
            state: AppState::new(StorefrontConfig::default()),
        }
    }

    fn router(&self) -> Router {
        menu_cart_storefront::app(self.state.clone())
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        TestResponse {
            status,
            headers,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }

    /// Issue a GET.
    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    /// Issue a form-encoded POST.
    pub async fn post_form(&self, uri: &str, form: &str) -> TestResponse {
        self.send(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Press "+" on an item.
    pub async fn add(&self, item_id: &str) -> TestResponse {
        self.post_form("/cart/add", &format!("item_id={item_id}"))
            .await
    }

    /// Press "-" on an item.
    pub async fn remove(&self, item_id: &str) -> TestResponse {
        self.post_form("/cart/remove", &format!("item_id={item_id}"))
            .await
    }

    /// Total units currently in the cart.
    pub async fn total_quantity(&self) -> u64 {
        self.state.storefront().lock().await.cart().total_quantity()
    }
}
