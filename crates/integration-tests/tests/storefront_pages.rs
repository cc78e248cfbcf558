//! Integration tests for the storefront pages, driven in-process.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use swift_menu_core::{MenuItemPatch, ShopInfoPatch, default_shop_data};
use swift_menu_integration_tests::{TestContext, get};

// =============================================================================
// Pages
// =============================================================================

#[tokio::test]
async fn test_health() {
    let ctx = TestContext::new();
    let (status, body) = ctx.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn test_home_shows_shop_and_featured_dishes() {
    let ctx = TestContext::new();
    let (status, body) = ctx.get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Swift Menu Kitchen"));
    assert!(body.contains("12 Market Road"));
    assert!(body.contains("Veg Momos"));
    assert!(body.contains("Masala Chai"));
    // Not featured.
    assert!(!body.contains("Veg Chowmein"));
}

#[tokio::test]
async fn test_menu_lists_every_dish() {
    let ctx = TestContext::new();
    let (status, body) = ctx.get("/menu").await;

    assert_eq!(status, StatusCode::OK);
    for item in default_shop_data().menu_items {
        assert!(body.contains(&item.name), "missing {}", item.name);
    }
    assert!(body.contains("/menu/momo-1/order"));
}

#[tokio::test]
async fn test_menu_category_filter() {
    let ctx = TestContext::new();
    let (status, body) = ctx.get("/menu?category=momos").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Veg Momos"));
    assert!(body.contains("Fried Momos"));
    assert!(!body.contains("Masala Chai"));
}

#[tokio::test]
async fn test_menu_unknown_category_is_not_found() {
    let ctx = TestContext::new();
    let (status, _) = ctx.get("/menu?category=Desserts").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_menu_renders_without_images() {
    let ctx = TestContext::new();
    std::fs::create_dir_all(ctx.assets_dir()).unwrap();
    std::fs::write(ctx.assets_dir().join("momos.jpg"), b"jpeg").unwrap();

    let (status, body) = ctx.get("/menu").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("/assets/momos.jpg"));
    assert!(body.contains("menu-card-placeholder"));
}

#[tokio::test]
async fn test_order_dialog_links() {
    let ctx = TestContext::new();
    let (status, body) = ctx.get("/menu/momo-1/order").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(
        "https://wa.me/9779800000000?text=Hi%21%20I%27d%20like%20to%20order%20Veg%20Momos"
    ));
    assert!(body.contains("sms:+9779800000000?body=Hi%21"));
    assert!(body.contains("tel:+9779800000000"));
}

#[tokio::test]
async fn test_order_unknown_dish_is_not_found() {
    let ctx = TestContext::new();
    let (status, _) = ctx.get("/menu/pizza-9/order").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_api_shop_returns_document() {
    let ctx = TestContext::new();
    let (status, body) = ctx.get("/api/shop").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["shopInfo"]["name"], "Swift Menu Kitchen");
    assert_eq!(json["menuItems"][0]["id"], "momo-1");
    assert_eq!(json["menuItems"][0]["price"], 120.0);
}

// =============================================================================
// Editor commits are visible to the storefront
// =============================================================================

#[tokio::test]
async fn test_contact_page_shows_saved_phone() {
    let ctx = TestContext::new();
    let mut editor = ctx.unlocked_editor();
    editor
        .patch_shop_info(ShopInfoPatch {
            phone: Some("+9779812345678".to_string()),
            ..ShopInfoPatch::default()
        })
        .unwrap();

    // Unsaved edits are not visible.
    let (_, body) = ctx.get("/contact").await;
    assert!(!body.contains("+9779812345678"));

    editor.save().unwrap();
    let (status, body) = ctx.get("/contact").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("tel:+9779812345678"));
}

#[tokio::test]
async fn test_unfeatured_dish_leaves_home_page() {
    let ctx = TestContext::new();
    let mut editor = ctx.unlocked_editor();
    editor
        .patch_item(
            4,
            MenuItemPatch {
                featured: Some(false),
                ..MenuItemPatch::default()
            },
        )
        .unwrap();
    editor.save().unwrap();

    let (_, body) = ctx.get("/").await;
    assert!(!body.contains("Masala Chai"));
    assert!(body.contains("Veg Momos"));
}

// =============================================================================
// Edits from another process
// =============================================================================

#[tokio::test]
async fn test_contact_page_shows_phone_saved_by_separate_store() {
    let ctx = TestContext::new();
    let storefront = ctx.storefront();

    let (_, body) = get(storefront.clone(), "/contact").await;
    assert!(!body.contains("+9779812345678"));

    // The CLI opens its own store over the same data directory.
    let mut editor = ctx.separate_editor();
    editor
        .patch_shop_info(ShopInfoPatch {
            phone: Some("+9779812345678".to_string()),
            ..ShopInfoPatch::default()
        })
        .unwrap();
    editor.save().unwrap();

    let (status, body) = get(storefront, "/contact").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("tel:+9779812345678"));
    assert_eq!(ctx.store.get().shop_info.phone, "+9779812345678");
}

#[tokio::test]
async fn test_menu_drops_dish_removed_by_separate_store() {
    let ctx = TestContext::new();
    let mut editor = ctx.separate_editor();
    let removed = editor.remove_item(3).unwrap();
    assert_eq!(removed.name, "Veg Chowmein");
    editor.save().unwrap();

    let (_, body) = ctx.get("/menu").await;
    assert!(!body.contains("Veg Chowmein"));
    assert!(body.contains("Veg Momos"));
}

#[tokio::test]
async fn test_refresh_on_request_can_be_disabled() {
    let ctx = TestContext::new();
    let mut config = ctx.storefront_config();
    config.refresh_on_request = false;
    let storefront = ctx.storefront_with(config);

    let mut editor = ctx.separate_editor();
    editor
        .patch_shop_info(ShopInfoPatch {
            phone: Some("+9779812345678".to_string()),
            ..ShopInfoPatch::default()
        })
        .unwrap();
    editor.save().unwrap();

    let (_, body) = get(storefront, "/contact").await;
    assert!(!body.contains("+9779812345678"));
}
