use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use stickerdesk_infrastructure::DeskPaths;

mod commands;
mod logging;

use commands::context::AppContext;

#[derive(Parser)]
#[command(name = "stickerdesk")]
#[command(about = "stickerdesk - manage sticker images on the admin backend", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding config, session storage and logs
    #[arg(long, global = true, env = "STICKERDESK_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Send notices to the log instead of the terminal
    #[arg(long, short, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in with an admin account
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "STICKERDESK_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show who the current session belongs to
    Whoami,
    /// Create a local session without contacting the backend
    SignUp {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "STICKERDESK_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// List stickers one page at a time
    List {
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Upload an image as a new sticker
    Upload {
        /// Image file to upload
        file: Option<PathBuf>,
        /// Label stored with the sticker
        #[arg(long, default_value = "")]
        code: String,
    },
    /// Delete a sticker by id
    Delete {
        id: String,
        /// Page to show after the delete
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = DeskPaths::new(cli.data_dir.as_deref());
    let _log_guard = logging::init(&paths)?;

    let ctx = AppContext::build(&paths, cli.config.as_deref(), cli.quiet)?;

    match cli.command {
        Commands::Login { email, password } => commands::auth::login(&ctx, email, password).await?,
        Commands::Logout => commands::auth::logout(&ctx).await?,
        Commands::Whoami => commands::auth::whoami(&ctx).await?,
        Commands::SignUp {
            first_name,
            last_name,
            email,
            password,
        } => commands::auth::sign_up(&ctx, first_name, last_name, email, password).await?,
        Commands::List { page } => commands::stickers::list(&ctx, page).await?,
        Commands::Upload { file, code } => {
            commands::stickers::upload(&ctx, file.as_deref(), &code).await?
        }
        Commands::Delete { id, page } => commands::stickers::delete(&ctx, &id, page).await?,
    }

    Ok(())
}
