//! BizFolio CLI - console over the inventory services.
//!
//! # Usage
//!
//! ```bash
//! # Sign in with the demo account
//! bf login -e demo@bizfolio.com -p password
//!
//! # Organize the catalog
//! bf folders list
//! bf folders create -n "Winter Collection" -c Apparel --tag winter
//! bf products list --folder f1
//!
//! # Maintain the company profile
//! bf company show
//! bf company update --json '{"logoUrl":"https://acme.com/logo.png"}'
//!
//! # Dashboard figures
//! bf stats
//! ```
//!
//! # Environment Variables
//!
//! - `BIZFOLIO_DATA_DIR` - Data directory (default: `.bizfolio`)
//! - `BIZFOLIO_LATENCY_MS` - Simulated latency per operation (default: 0)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use bizfolio_store::Config;

mod commands;

use commands::Console;

#[derive(Parser)]
#[command(name = "bf")]
#[command(author, version, about = "BizFolio inventory console")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in with an email and password
    Login {
        /// Account email address
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Register a new account
    Register {
        /// Account email address
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Sign out and clear the stored session
    Logout,
    /// Show the currently signed-in user
    Whoami,
    /// Company profile operations
    Company {
        #[command(subcommand)]
        action: CompanyAction,
    },
    /// Folder operations
    Folders {
        #[command(subcommand)]
        action: FolderAction,
    },
    /// Product operations
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Show dashboard figures
    Stats,
}

#[derive(Subcommand)]
enum CompanyAction {
    /// Show the company profile
    Show,
    /// Merge a JSON patch into the profile
    Update {
        /// Partial profile as JSON, e.g. '{"legalName":"Acme Ltd."}'
        #[arg(long)]
        json: String,
    },
}

#[derive(Subcommand)]
enum FolderAction {
    /// List all folders with live product counts
    List,
    /// Create a folder
    Create {
        /// Folder name
        #[arg(short, long)]
        name: String,

        /// Category, e.g. Apparel or Digital
        #[arg(short, long)]
        category: String,

        /// Description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Tags (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Publication status (Draft or Published)
        #[arg(long, default_value = "Draft")]
        status: String,
    },
    /// Merge a JSON patch into a folder
    Update {
        /// Folder id
        id: String,

        /// Partial folder as JSON, e.g. '{"status":"Published"}'
        #[arg(long)]
        json: String,
    },
    /// Delete a folder and every product in it
    Delete {
        /// Folder id
        id: String,
    },
}

#[derive(Subcommand)]
enum ProductAction {
    /// List products, optionally limited to one folder
    List {
        /// Folder id to filter by
        #[arg(long)]
        folder: Option<String>,
    },
    /// Create a product from a JSON document
    Create {
        /// Full product input as JSON, e.g.
        /// '{"folderId":"f1","name":"Cap","sku":"CAP-001"}'
        #[arg(long)]
        json: String,
    },
    /// Merge a JSON patch into a product
    Update {
        /// Product id
        id: String,

        /// Partial product as JSON, e.g. '{"stock":12}'
        #[arg(long)]
        json: String,
    },
    /// Delete a product
    Delete {
        /// Product id
        id: String,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CliError> {
    let config = Config::from_env()?;
    let console = Console::open(&config)?;

    match cli.command {
        Commands::Login { email, password } => {
            commands::auth::login(&console, &email, &password).await?;
        }
        Commands::Register { email, password } => {
            commands::auth::register(&console, &email, &password).await?;
        }
        Commands::Logout => commands::auth::logout(&console).await?,
        Commands::Whoami => commands::auth::whoami(&console).await?,
        Commands::Company { action } => match action {
            CompanyAction::Show => commands::company::show(&console).await?,
            CompanyAction::Update { json } => commands::company::update(&console, &json).await?,
        },
        Commands::Folders { action } => match action {
            FolderAction::List => commands::folders::list(&console).await?,
            FolderAction::Create {
                name,
                category,
                description,
                tags,
                status,
            } => {
                commands::folders::create(&console, name, category, description, tags, &status)
                    .await?;
            }
            FolderAction::Update { id, json } => {
                commands::folders::update(&console, &id, &json).await?;
            }
            FolderAction::Delete { id } => commands::folders::delete(&console, &id).await?,
        },
        Commands::Products { action } => match action {
            ProductAction::List { folder } => {
                commands::products::list(&console, folder.as_deref()).await?;
            }
            ProductAction::Create { json } => commands::products::create(&console, &json).await?,
            ProductAction::Update { id, json } => {
                commands::products::update(&console, &id, &json).await?;
            }
            ProductAction::Delete { id } => commands::products::delete(&console, &id).await?,
        },
        Commands::Stats => commands::stats::dashboard(&console).await?,
    }
    Ok(())
}
