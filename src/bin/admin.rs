//! CLI administration tool for user-service.
//!
//! Provides commands for inspecting and maintaining the user table without
//! going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Apply pending migrations
//! cargo run --bin admin -- db migrate
//!
//! # List all users
//! cargo run --bin admin -- users list
//!
//! # Remove every user (asks for confirmation unless --yes)
//! cargo run --bin admin -- users truncate
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `DATABASE_URL` or the `DB_*` components.

use user_service::config;
use user_service::domain::context::RequestContext;
use user_service::domain::repositories::UserRepository;
use user_service::infrastructure::persistence::{PgUserRepository, create_pool};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing user-service.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Inspect and maintain users
    Users {
        #[command(subcommand)]
        action: UsersAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// User maintenance subcommands.
#[derive(Subcommand)]
enum UsersAction {
    /// List all users ordered by id
    List,

    /// Delete every user
    Truncate {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = create_pool(&config)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Users { action } => handle_users_action(action, pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches user maintenance commands.
async fn handle_users_action(action: UsersAction, pool: PgPool) -> Result<()> {
    let repo = PgUserRepository::new(Arc::new(pool));

    match action {
        UsersAction::List => list_users(&repo).await?,
        UsersAction::Truncate { yes } => truncate_users(&repo, yes).await?,
    }

    Ok(())
}

/// Prints every user as a table.
async fn list_users(repo: &PgUserRepository) -> Result<()> {
    println!("{}", "👥 Users".bright_blue().bold());
    println!();

    let users = repo
        .list(RequestContext::background())
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    if users.is_empty() {
        println!("  {}", "No users stored".yellow());
        println!();
        return Ok(());
    }

    println!("  {:<10} {}", "ID".bold(), "NAME".bold());
    for user in &users {
        println!(
            "  {:<10} {}",
            user.id.to_string().bright_black(),
            user.name.cyan()
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Deletes every user after confirmation.
///
/// # Safety
///
/// - Requires confirmation (default: No) unless `--yes` is passed
/// - Cannot be undone: rows are removed, not flagged
async fn truncate_users(repo: &PgUserRepository, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Truncate Users".bright_blue().bold());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Permanently delete every user?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    repo.truncate(RequestContext::background())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to truncate users: {}", e))?;

    println!("{}", "✅ All users deleted".green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let users_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!(
                "  Users:      {}",
                users_count.to_string().bright_green().bold()
            );
            println!();
        }
        DbAction::Migrate => {
            println!("{}", "📦 Applying migrations...".bright_blue());

            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Failed to migrate")?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}
