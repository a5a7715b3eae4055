//! Integration tests for checkout and order placement.

use axum::http::StatusCode;
use menu_cart_core::{CheckoutState, ItemId};
use menu_cart_integration_tests::TestStorefront;

#[tokio::test]
async fn test_checkout_empty_cart_shows_message_only() {
    let ctx = TestStorefront::new().await;

    let response = ctx.get("/checkout").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Your cart is empty"));
    assert!(!response.body.contains("place-order-btn"));
    assert!(!response.body.contains("Subtotal"));
}

#[tokio::test]
async fn test_checkout_summary() {
    let ctx = TestStorefront::new().await;
    ctx.add("1").await;
    ctx.add("1").await;

    let response = ctx.get("/checkout").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("$10.00 x2"));
    assert!(response.body.contains("Subtotal: $20.00"));
    assert!(response.body.contains("Tax: $2.76"));
    assert!(response.body.contains("Total: $22.76"));
    assert!(response.body.contains("place-order-btn"));
    assert_eq!(
        ctx.state.storefront().lock().await.state(),
        CheckoutState::Populated
    );
}

#[tokio::test]
async fn test_checkout_lines_follow_cart_order() {
    let ctx = TestStorefront::new().await;
    ctx.add("2").await;
    ctx.add("1").await;

    let body = ctx.get("/checkout").await.body;

    let second = body.find("checkout-item-2").unwrap();
    let first = body.find("checkout-item-1").unwrap();
    assert!(second < first);
}

#[tokio::test]
async fn test_place_order_clears_cart() {
    let ctx = TestStorefront::new().await;
    ctx.add("1").await;
    ctx.add("2").await;
    ctx.get("/checkout").await;

    let response = ctx.post_form("/checkout/place-order", "").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Order placed, thank you!"));
    assert!(response.body.contains("Your cart is empty"));
    assert!(response.body.contains("Checkout (0)"));
    assert!(response.body.contains(r#"id="amt-1""#));
    assert!(response.body.contains(r#"id="amt-2""#));
    assert_eq!(ctx.total_quantity().await, 0);

    let checkout = ctx.get("/checkout").await;
    assert!(checkout.body.contains("Your cart is empty"));
    assert!(!checkout.body.contains("place-order-btn"));
}

#[tokio::test]
async fn test_place_order_twice_confirms_twice() {
    let ctx = TestStorefront::new().await;
    ctx.add("1").await;

    let first = ctx.post_form("/checkout/place-order", "").await;
    let second = ctx.post_form("/checkout/place-order", "").await;

    assert!(first.body.contains("Order placed, thank you!"));
    assert!(second.body.contains("Order placed, thank you!"));
    assert_eq!(ctx.total_quantity().await, 0);
}

#[tokio::test]
async fn test_checkout_with_inconsistent_cart_is_server_error() {
    let ctx = TestStorefront::new().await;
    {
        // The HTTP hooks refuse unknown ids, so reach past them.
        let mut storefront = ctx.state.storefront().lock().await;
        let mut view = menu_cart_storefront::view::HtmxView::new();
        storefront.on_add_clicked(&ItemId::from("ghost"), &mut view);
    }

    let response = ctx.get("/checkout").await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body, "Internal server error");

    // The session survives the failed interaction.
    assert_eq!(ctx.get("/").await.status, StatusCode::OK);
}

#[tokio::test]
async fn test_checkout_amount_overflow_is_server_error() {
    let ctx = TestStorefront::with_catalogue(
        r#"[{"id": 1, "name": "Gold", "price": 50000000000000000000000000000, "description": "", "imgUrl": ""}]"#,
    )
    .await;
    ctx.add("1").await;
    ctx.add("1").await;

    let response = ctx.get("/checkout").await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body, "Internal server error");
    assert_eq!(
        ctx.state.storefront().lock().await.state(),
        CheckoutState::Empty
    );

    // Removing a unit brings the cart back into range.
    ctx.remove("1").await;
    assert_eq!(ctx.get("/checkout").await.status, StatusCode::OK);
}
