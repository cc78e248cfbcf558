//! Admin editor commands.
//!
//! # Usage
//!
//! ```bash
//! # Unlock once per session, then edit without repeating the passcode
//! swift-menu admin unlock --passcode "$ADMIN_PASSCODE"
//! swift-menu admin set-info --phone "+9779800000001"
//! swift-menu admin add-item --id thukpa-1 --name "Veg Thukpa" --price 180
//! swift-menu admin lock
//!
//! # Or unlock inline for a single command
//! swift-menu admin --passcode "$ADMIN_PASSCODE" export --output backup.json
//! ```
//!
//! Every edit command patches the draft and then saves it, so a rejected
//! save leaves the stored document unchanged.
//!
//! # Environment Variables
//!
//! - `ADMIN_PASSCODE` - Passcode that unlocks the editor
//! - `SHOP_DATA_DIR` - Directory holding the persisted shop document
//! - `ADMIN_SESSION_DIR` - Directory holding the unlock flag

use std::path::{Path, PathBuf};

use clap::Args;
use secrecy::SecretString;
use swift_menu_admin::{AdminConfig, AdminEditor, Confirmation};
use swift_menu_core::{ImageSlug, MenuItem, MenuItemId, MenuItemPatch, Price, ShopInfoPatch};

use super::{CliError, open_store};

/// Shop information fields; every flag is optional.
#[derive(Debug, Default, Args)]
pub struct ShopInfoArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub tagline: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    /// WhatsApp number in international format without `+`
    #[arg(long)]
    pub whatsapp: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub opening_hours: Option<String>,
    #[arg(long)]
    pub map_embed_url: Option<String>,
    #[arg(long)]
    pub facebook: Option<String>,
    #[arg(long)]
    pub instagram: Option<String>,
    #[arg(long)]
    pub twitter: Option<String>,
}

impl From<ShopInfoArgs> for ShopInfoPatch {
    fn from(args: ShopInfoArgs) -> Self {
        Self {
            name: args.name,
            tagline: args.tagline,
            address: args.address,
            phone: args.phone,
            whatsapp: args.whatsapp,
            email: args.email,
            opening_hours: args.opening_hours,
            map_embed_url: args.map_embed_url,
            facebook: args.facebook,
            instagram: args.instagram,
            twitter: args.twitter,
        }
    }
}

/// A new dish.
#[derive(Debug, Args)]
pub struct NewItemArgs {
    #[arg(long)]
    pub id: String,
    #[arg(long)]
    pub name: String,
    #[arg(long, default_value = "")]
    pub description: String,
    #[arg(long, default_value = "0")]
    pub price: Price,
    /// Image slug, resolved to `assets/{slug}.jpg`
    #[arg(long, default_value = "")]
    pub image: String,
    #[arg(long, default_value = "")]
    pub category: String,
    #[arg(long)]
    pub featured: bool,
}

impl From<NewItemArgs> for MenuItem {
    fn from(args: NewItemArgs) -> Self {
        Self {
            id: MenuItemId::new(args.id),
            name: args.name,
            description: args.description,
            price: args.price,
            image: ImageSlug::new(args.image),
            category: args.category,
            featured: args.featured,
        }
    }
}

/// Dish fields to change; every flag is optional.
#[derive(Debug, Default, Args)]
pub struct ItemPatchArgs {
    #[arg(long)]
    pub id: Option<String>,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub price: Option<Price>,
    #[arg(long)]
    pub image: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub featured: Option<bool>,
}

impl From<ItemPatchArgs> for MenuItemPatch {
    fn from(args: ItemPatchArgs) -> Self {
        Self {
            id: args.id.map(MenuItemId::new),
            name: args.name,
            description: args.description,
            price: args.price,
            image: args.image.map(ImageSlug::new),
            category: args.category,
            featured: args.featured,
        }
    }
}

/// Load the admin configuration and build an editor over the file store.
///
/// A `passcode` unlocks the editor inline; otherwise it is unlocked only if
/// the session flag is already set.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or the passcode is
/// wrong.
pub fn open_editor(
    data_dir: Option<PathBuf>,
    passcode: Option<&str>,
) -> Result<AdminEditor, CliError> {
    let mut config = AdminConfig::from_env()?;
    if let Some(dir) = data_dir {
        config.data_dir = dir;
    }

    let store = open_store(&config.data_dir);
    let mut editor = AdminEditor::from_config(store, &config);
    if let Some(passcode) = passcode {
        editor.unlock(&SecretString::from(passcode.to_owned()))?;
    }
    Ok(editor)
}

/// Unlock the editor for this session.
///
/// # Errors
///
/// Returns [`CliError::MissingPasscode`] without a passcode, or the editor's
/// error if it does not match.
pub fn unlock(data_dir: Option<PathBuf>, passcode: Option<&str>) -> Result<(), CliError> {
    let passcode = passcode.ok_or(CliError::MissingPasscode)?;
    open_editor(data_dir, Some(passcode))?;
    tracing::info!("Admin session unlocked");
    Ok(())
}

/// End the admin session.
pub fn lock(mut editor: AdminEditor) {
    editor.lock();
    tracing::info!("Admin session locked");
}

/// Patch shop information and save.
///
/// # Errors
///
/// Returns [`CliError::NothingToUpdate`] for an empty patch, or the editor's
/// error if the draft cannot be saved.
pub fn set_info(editor: &mut AdminEditor, args: ShopInfoArgs) -> Result<(), CliError> {
    let patch = ShopInfoPatch::from(args);
    if patch.is_empty() {
        return Err(CliError::NothingToUpdate);
    }

    editor.patch_shop_info(patch)?;
    editor.save()?;
    tracing::info!("Shop information updated");
    Ok(())
}

/// Append a dish and save.
///
/// # Errors
///
/// Returns the editor's error if the dish is incomplete or its id is taken.
pub fn add_item(editor: &mut AdminEditor, args: NewItemArgs) -> Result<(), CliError> {
    let item = MenuItem::from(args);
    let id = item.id.clone();

    editor.add_item(item)?;
    editor.save()?;
    tracing::info!("Added dish {id}");
    Ok(())
}

/// Patch the dish at `index` and save.
///
/// # Errors
///
/// Returns [`CliError::NothingToUpdate`] for an empty patch, or the editor's
/// error if the index is out of range or the result fails validation.
pub fn update_item(
    editor: &mut AdminEditor,
    index: usize,
    args: ItemPatchArgs,
) -> Result<(), CliError> {
    let patch = MenuItemPatch::from(args);
    if patch.is_empty() {
        return Err(CliError::NothingToUpdate);
    }

    editor.patch_item(index, patch)?;
    editor.save()?;
    tracing::info!("Updated dish at position {index}");
    Ok(())
}

/// Remove the dish at `index` and save.
///
/// # Errors
///
/// Returns the editor's error if the index is out of range.
pub fn remove_item(editor: &mut AdminEditor, index: usize) -> Result<(), CliError> {
    let removed = editor.remove_item(index)?;
    editor.save()?;
    tracing::info!("Removed dish {} ({})", removed.id, removed.name);
    Ok(())
}

/// Write the draft as pretty JSON to `output`.
///
/// # Errors
///
/// Returns an error if the editor is locked or the file cannot be written.
pub async fn export(editor: &AdminEditor, output: &Path) -> Result<(), CliError> {
    let json = editor.export()?;
    tokio::fs::write(output, json)
        .await
        .map_err(|source| CliError::Io {
            action: "failed to write",
            path: output.to_path_buf(),
            source,
        })?;
    tracing::info!("Exported shop data to {}", output.display());
    Ok(())
}

/// Replace the whole document with the contents of `input`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, or the editor rejects it.
/// The stored document is unchanged in that case.
pub async fn import(editor: &mut AdminEditor, input: &Path) -> Result<(), CliError> {
    let raw = tokio::fs::read_to_string(input)
        .await
        .map_err(|source| CliError::Io {
            action: "failed to read",
            path: input.to_path_buf(),
            source,
        })?;

    editor.import(&raw)?;
    tracing::info!("Imported shop data from {}", input.display());
    Ok(())
}

/// Reset to the bundled default.
///
/// # Errors
///
/// Returns an error unless `confirmed` is set and the editor is unlocked.
pub fn reset(editor: &mut AdminEditor, confirmed: bool) -> Result<(), CliError> {
    editor.reset(Confirmation::from(confirmed))?;
    tracing::info!("Shop data reset to default");
    Ok(())
}

/// Remove the persisted copy so the bundled default is used.
///
/// # Errors
///
/// Returns an error unless `confirmed` is set and the editor is unlocked.
pub fn clear_local(editor: &mut AdminEditor, confirmed: bool) -> Result<(), CliError> {
    editor.clear_local_edits(Confirmation::from(confirmed))?;
    tracing::info!("Local edits cleared");
    Ok(())
}
