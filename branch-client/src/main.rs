//! branch-admin - command line front-end for branch management

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;

use branch_client::draft_file::load_draft_with_image;
use branch_client::{BranchApi, BranchSubmitter, ClientConfig, Navigator, logger};
use shared::models::{BranchStatus, MenuType};

#[derive(Parser)]
#[command(name = "branch-admin", version, about = "Manage restaurant branches")]
struct Cli {
    /// Backend base URL (overrides BRANCH_API_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Bearer token (overrides BRANCH_API_TOKEN)
    #[arg(long)]
    token: Option<String>,

    /// Log level for this tool (RUST_LOG takes precedence)
    #[arg(long)]
    log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List branches
    Branches,
    /// Show one branch
    Branch { id: i64 },
    /// List a branch's menus
    Menus {
        id: i64,
        /// Include inactive menus
        #[arg(long)]
        include_all: bool,
        /// Only show menus of this type (BREAKFAST, LUNCH, DINNER, DESSERT)
        #[arg(long = "type")]
        menu_type: Option<MenuType>,
    },
    /// List active staff who can manage a branch
    Managers,
    /// Show a reservation
    Reservation { id: i64 },
    /// Delete a branch
    Delete { id: i64 },
    /// Create a branch from a JSON draft
    Create {
        draft: PathBuf,
        /// Image to upload and attach
        #[arg(long)]
        image: Option<PathBuf>,
        /// Override the draft's status (ACTIVE, INACTIVE)
        #[arg(long)]
        status: Option<BranchStatus>,
    },
}

/// Prints the route the web front-end would open
struct PrintNavigator;

impl Navigator for PrintNavigator {
    fn navigate(&self, route: &str) {
        tracing::info!(route, "Navigate");
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logger::init_logger_with(cli.log_level.as_deref(), cli.log_json);

    let mut config = ClientConfig::from_env();
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(token) = cli.token {
        config = config.with_token(token);
    }
    tracing::debug!(base_url = %config.base_url, "Using backend");

    let api = BranchApi::new(config.build_http_client()?);

    match cli.command {
        Command::Branches => print_json(&api.list_branches().await?)?,
        Command::Branch { id } => print_json(&api.get_branch(id).await?)?,
        Command::Menus {
            id,
            include_all,
            menu_type,
        } => {
            let mut menus = api.branch_menus(id, include_all).await?;
            if let Some(menu_type) = menu_type {
                menus.retain(|m| m.menu_type == menu_type);
            }
            print_json(&menus)?
        }
        Command::Managers => print_json(&api.branch_managers().await?)?,
        Command::Reservation { id } => print_json(&api.reservation(id).await?)?,
        Command::Delete { id } => {
            api.delete_branch(id).await?;
            println!("Branch {id} deleted");
        }
        Command::Create {
            draft,
            image,
            status,
        } => {
            let mut draft = load_draft_with_image(&draft, image.as_deref())
                .with_context(|| format!("Failed to read draft {}", draft.display()))?;
            if let Some(status) = status {
                draft.status = status;
            }
            let mut submitter =
                BranchSubmitter::with_navigator(api, config.build_uploader()?, PrintNavigator);
            let branch = submitter.submit(&draft).await?;
            print_json(&branch)?;
        }
    }

    Ok(())
}
