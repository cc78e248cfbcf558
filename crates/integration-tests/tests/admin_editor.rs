//! Integration tests for the admin editor against a file-backed store.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::sync::Arc;

use secrecy::SecretString;
use swift_menu_admin::{Confirmation, EditorError};
use swift_menu_core::{
    DataSource, FileStorage, MenuItem, MenuItemId, Price, ShopDataStore, ShopInfoPatch,
    ValidationError, default_shop_data,
};
use swift_menu_integration_tests::TestContext;

fn dish(id: &str, name: &str, price: u32) -> MenuItem {
    MenuItem {
        id: MenuItemId::new(id),
        name: name.to_string(),
        price: Price::from_units(price),
        ..MenuItem::default()
    }
}

// =============================================================================
// Unlock
// =============================================================================

#[test]
fn test_wrong_passcode_leaves_editor_locked() {
    let ctx = TestContext::new();
    let mut editor = ctx.editor();

    let err = editor.unlock(&SecretString::from("wrong-passcode")).unwrap_err();
    assert!(matches!(err, EditorError::InvalidPasscode));
    assert!(!editor.is_unlocked());
    assert!(editor.draft().is_err());
    assert_eq!(ctx.store.get(), default_shop_data());
    assert!(!ctx.data_dir().join("swiftMenuPro.shopData.json").exists());
}

#[test]
fn test_session_flag_survives_new_editor() {
    let ctx = TestContext::new();
    let _ = ctx.unlocked_editor();

    // Same session directory: starts unlocked without a passcode.
    let mut editor = ctx.editor();
    assert!(editor.is_unlocked());

    editor.lock();
    assert!(!ctx.editor().is_unlocked());
}

// =============================================================================
// Save
// =============================================================================

#[test]
fn test_duplicate_id_save_keeps_original_dish() {
    let ctx = TestContext::new();
    let mut editor = ctx.unlocked_editor();

    editor.add_item(dish("momo-1", "Chicken Momos", 150)).unwrap();
    let err = editor.save().unwrap_err();
    assert!(matches!(
        err,
        EditorError::Validation(ValidationError::DuplicateId(_))
    ));
    assert_eq!(err.to_string(), "duplicate id detected: momo-1");

    let momos: Vec<_> = ctx
        .store
        .get()
        .menu_items
        .into_iter()
        .filter(|item| item.id.as_str() == "momo-1")
        .collect();
    assert_eq!(momos.len(), 1);
    assert_eq!(momos[0].name, "Veg Momos");
}

#[test]
fn test_saved_document_is_persisted_and_reloaded() {
    let ctx = TestContext::new();
    let mut editor = ctx.unlocked_editor();

    editor.add_item(dish("thukpa-1", "Veg Thukpa", 180)).unwrap();
    editor
        .patch_shop_info(ShopInfoPatch {
            phone: Some("+9779811111111".to_string()),
            ..ShopInfoPatch::default()
        })
        .unwrap();
    editor.save().unwrap();
    assert_eq!(&ctx.store.get(), editor.draft().unwrap());

    // A fresh store over the same directory restores the saved document.
    let reopened = ShopDataStore::open(FileStorage::new(ctx.data_dir()));
    assert_eq!(reopened.source(), DataSource::Persisted);
    assert_eq!(reopened.get(), ctx.store.get());
    assert!(reopened.get().find_item("thukpa-1").is_some());
}

#[test]
fn test_corrupt_persisted_document_falls_back_to_default() {
    let ctx = TestContext::new();
    std::fs::create_dir_all(ctx.data_dir()).unwrap();
    std::fs::write(
        ctx.data_dir().join("swiftMenuPro.shopData.json"),
        r#"{ "shopInfo": "oops" }"#,
    )
    .unwrap();

    let store = ShopDataStore::open(FileStorage::new(ctx.data_dir()));
    assert_eq!(store.source(), DataSource::Default);
    assert_eq!(store.get(), default_shop_data());
}

// =============================================================================
// Reset, clear, import and export
// =============================================================================

#[test]
fn test_reset_restores_default() {
    let ctx = TestContext::new();
    let mut editor = ctx.unlocked_editor();
    editor.remove_item(0).unwrap();
    editor.save().unwrap();
    assert_ne!(ctx.store.get(), default_shop_data());

    assert!(matches!(
        editor.reset(Confirmation::Declined),
        Err(EditorError::NotConfirmed(_))
    ));
    assert_ne!(ctx.store.get(), default_shop_data());

    editor.reset(Confirmation::Confirmed).unwrap();
    assert_eq!(ctx.store.get(), default_shop_data());
}

#[test]
fn test_clear_local_edits_removes_persisted_file() {
    let ctx = TestContext::new();
    let mut editor = ctx.unlocked_editor();
    editor.remove_item(0).unwrap();
    editor.save().unwrap();
    let file = ctx.data_dir().join("swiftMenuPro.shopData.json");
    assert!(file.exists());

    editor.clear_local_edits(Confirmation::Confirmed).unwrap();
    assert!(!file.exists());
    assert_eq!(ctx.store.get(), default_shop_data());
}

#[test]
fn test_import_without_menu_items_array_is_rejected() {
    let ctx = TestContext::new();
    let mut editor = ctx.unlocked_editor();
    let before = ctx.store.get();

    let raw = r#"{ "shopInfo": { "name": "Other" }, "menuItems": { "momo-1": {} } }"#;
    let err = editor.import(raw).unwrap_err();
    assert!(matches!(err, EditorError::Shape(_)));
    assert_eq!(ctx.store.get(), before);
}

#[test]
fn test_export_then_import_in_another_session() {
    let source = TestContext::new();
    let mut editor = source.unlocked_editor();
    editor
        .patch_shop_info(ShopInfoPatch {
            name: Some("Lakeside Momo House".to_string()),
            ..ShopInfoPatch::default()
        })
        .unwrap();
    let path = source.root().join("shopData-export.json");
    std::fs::write(&path, editor.export().unwrap()).unwrap();

    let target = TestContext::new();
    let mut other = target.unlocked_editor();
    other
        .import(&std::fs::read_to_string(&path).unwrap())
        .unwrap();
    assert_eq!(target.store.get().shop_info.name, "Lakeside Momo House");
    assert_eq!(other.draft().unwrap(), &target.store.get());
}

#[test]
fn test_store_is_shared_between_editors() {
    let ctx = TestContext::new();
    let mut first = ctx.unlocked_editor();
    let second = ctx.editor();

    first.add_item(dish("lassi-1", "Sweet Lassi", 90)).unwrap();
    first.save().unwrap();

    let store = Arc::clone(&ctx.store);
    assert!(store.get().find_item("lassi-1").is_some());
    // The second editor copied its draft before the save.
    assert!(second.draft().unwrap().find_item("lassi-1").is_none());
}
