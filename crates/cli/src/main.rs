//! Swift Menu CLI - menu viewer and admin editor.
//!
//! # Usage
//!
//! ```bash
//! # Read-only views
//! swift-menu shop show
//! swift-menu menu list --category Momos
//! swift-menu menu order momo-1
//!
//! # Admin editing (needs ADMIN_PASSCODE in the environment or .env)
//! swift-menu admin unlock --passcode "$ADMIN_PASSCODE"
//! swift-menu admin set-info --phone "+9779800000001"
//! swift-menu admin export --output shopData-export.json
//! swift-menu admin import backup.json
//! swift-menu admin reset --yes
//! swift-menu admin lock
//! ```
//!
//! # Commands
//!
//! - `shop` - Show shop information
//! - `menu` - List dishes and order links
//! - `admin` - Edit the shop document

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use swift_menu_admin::EXPORT_FILE_NAME;

mod commands;

use commands::CliError;
use commands::admin::{ItemPatchArgs, NewItemArgs, ShopInfoArgs};

#[derive(Parser)]
#[command(name = "swift-menu")]
#[command(author, version, about = "Swift Menu CLI tools")]
struct Cli {
    /// Directory holding the persisted shop document (default: $SHOP_DATA_DIR or data)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show shop information
    Shop {
        #[command(subcommand)]
        action: ShopAction,
    },
    /// Browse the menu
    Menu {
        #[command(subcommand)]
        action: MenuAction,
    },
    /// Edit the shop document
    Admin {
        /// Unlock the editor for this command
        #[arg(long, global = true)]
        passcode: Option<String>,

        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum ShopAction {
    /// Show name, contact details and opening hours
    Show,
}

#[derive(Subcommand)]
enum MenuAction {
    /// List dishes with their positions
    List {
        /// Only featured dishes
        #[arg(long)]
        featured: bool,

        /// Only dishes in this category
        #[arg(long)]
        category: Option<String>,
    },
    /// Show the WhatsApp, SMS and call links for a dish
    Order {
        /// Dish id, e.g. momo-1
        id: String,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Unlock the editor for this session
    Unlock,
    /// End the admin session
    Lock,
    /// Update shop information
    SetInfo(ShopInfoArgs),
    /// Add a dish
    AddItem(NewItemArgs),
    /// Update the dish at a position (see `menu list`)
    UpdateItem {
        index: usize,

        #[command(flatten)]
        fields: ItemPatchArgs,
    },
    /// Remove the dish at a position (see `menu list`)
    RemoveItem { index: usize },
    /// Write the shop document to a JSON file
    Export {
        #[arg(short, long, default_value = EXPORT_FILE_NAME)]
        output: PathBuf,
    },
    /// Replace the shop document with a JSON file
    Import { file: PathBuf },
    /// Reset the shop document to the bundled default
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
    /// Remove saved edits so the bundled default is used
    ClearLocal {
        /// Confirm clearing
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file if present (ignore errors if not found)
    let _ = dotenvy::dotenv();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "swift_menu_cli=info".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Shop { action } => match action {
            ShopAction::Show => {
                let store = commands::open_store(&commands::resolve_data_dir(cli.data_dir));
                commands::shop::show(&store);
            }
        },
        Commands::Menu { action } => {
            let store = commands::open_store(&commands::resolve_data_dir(cli.data_dir));
            match action {
                MenuAction::List { featured, category } => {
                    commands::menu::list(&store, featured, category.as_deref());
                }
                MenuAction::Order { id } => commands::menu::order(&store, &id)?,
            }
        }
        Commands::Admin { passcode, action } => {
            run_admin(cli.data_dir, passcode.as_deref(), action).await?;
        }
    }
    Ok(())
}

async fn run_admin(
    data_dir: Option<PathBuf>,
    passcode: Option<&str>,
    action: AdminAction,
) -> Result<(), CliError> {
    use commands::admin;

    if matches!(action, AdminAction::Unlock) {
        return admin::unlock(data_dir, passcode);
    }

    let mut editor = admin::open_editor(data_dir, passcode)?;
    match action {
        AdminAction::Unlock => {}
        AdminAction::Lock => admin::lock(editor),
        AdminAction::SetInfo(args) => admin::set_info(&mut editor, args)?,
        AdminAction::AddItem(args) => admin::add_item(&mut editor, args)?,
        AdminAction::UpdateItem { index, fields } => {
            admin::update_item(&mut editor, index, fields)?;
        }
        AdminAction::RemoveItem { index } => admin::remove_item(&mut editor, index)?,
        AdminAction::Export { output } => admin::export(&editor, &output).await?,
        AdminAction::Import { file } => admin::import(&mut editor, &file).await?,
        AdminAction::Reset { yes } => admin::reset(&mut editor, yes)?,
        AdminAction::ClearLocal { yes } => admin::clear_local(&mut editor, yes)?,
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_inline_passcode_after_action() {
        let cli = Cli::try_parse_from([
            "swift-menu",
            "admin",
            "set-info",
            "--phone",
            "+9779800000001",
            "--passcode",
            "adminFood@2025",
        ])
        .unwrap();

        let Commands::Admin { passcode, action } = cli.command else {
            panic!("expected admin command");
        };
        assert_eq!(passcode.as_deref(), Some("adminFood@2025"));
        let AdminAction::SetInfo(args) = action else {
            panic!("expected set-info");
        };
        assert_eq!(args.phone.as_deref(), Some("+9779800000001"));
    }

    #[test]
    fn test_export_defaults_output_file() {
        let cli = Cli::try_parse_from(["swift-menu", "admin", "export"]).unwrap();
        let Commands::Admin {
            action: AdminAction::Export { output },
            ..
        } = cli.command
        else {
            panic!("expected export");
        };
        assert_eq!(output, PathBuf::from("shopData-export.json"));
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let result = Cli::try_parse_from([
            "swift-menu",
            "admin",
            "add-item",
            "--id",
            "x-1",
            "--name",
            "X",
            "--price=-5",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_update_item_takes_index_and_fields() {
        let cli = Cli::try_parse_from([
            "swift-menu",
            "admin",
            "update-item",
            "2",
            "--featured",
            "false",
        ])
        .unwrap();
        let Commands::Admin {
            action: AdminAction::UpdateItem { index, fields },
            ..
        } = cli.command
        else {
            panic!("expected update-item");
        };
        assert_eq!(index, 2);
        assert_eq!(fields.featured, Some(false));
    }
}
