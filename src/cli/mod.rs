//! CLI module for the StockChef command-line client.
//!
//! Provides subcommands for working with a StockChef server:
//! - `status` - Check server health
//! - `login` / `register` / `logout` / `whoami` - Session management
//! - `dashboard` - Inventory and saved recipes side by side
//! - `inventory list|add|remove|scan|import` - Manage stocked items
//! - `recipes list|show|suggest|save|cook|remove` - Manage saved recipes
//! - `preferences show|set` - Dietary and cuisine preferences
//! - `config check` - Validate configuration file

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

use crate::api::{validation, ApiClient, ApiError};
use crate::config::Config;
use crate::dashboard::{self, Dashboard, SuggestOutcome};
use crate::history::{RecipeHistory, MAX_RECIPES_PER_USER};
use crate::models::{InventoryItem, PreferenceUpdate, Recipe, RegisterRequest, UserProfile};
use crate::session::{SessionStore, SuggestionCache};

/// CLI arguments structure
#[derive(Parser, Debug)]
#[command(name = "stockchef")]
#[command(author, version, about = "Terminal client for the StockChef recipe and inventory service", long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "stockchef.toml")]
    pub config: PathBuf,

    /// Override log level
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// API URL to connect to (overrides the config file)
    #[arg(long, env = "STOCKCHEF_API_URL")]
    pub api_url: Option<String>,

    /// Bearer token (overrides the stored session)
    #[arg(long, env = "STOCKCHEF_TOKEN")]
    pub token: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check server health
    Status,

    /// Log in and store the session token
    Login {
        /// Account email
        email: String,
        /// Account password (can also be set via STOCKCHEF_PASSWORD)
        #[arg(long, env = "STOCKCHEF_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Create an account and log in
    Register {
        /// Account email
        #[arg(long)]
        email: String,
        /// Account password (min 6 characters)
        #[arg(long, env = "STOCKCHEF_PASSWORD", hide_env_values = true)]
        password: String,
        /// First name
        #[arg(long)]
        first_name: String,
        /// Last name
        #[arg(long)]
        last_name: String,
        /// Dietary preference id (see 'preferences show')
        #[arg(long)]
        dietary: i64,
        /// Cuisine id (see 'preferences show')
        #[arg(long)]
        cuisine: i64,
    },

    /// Forget the stored session token
    Logout,

    /// Show the signed-in user's profile
    Whoami,

    /// Inventory and saved recipes side by side
    Dashboard,

    /// Inventory management commands
    #[command(subcommand)]
    Inventory(InventoryCommands),

    /// Saved recipe commands
    #[command(subcommand)]
    Recipes(RecipeCommands),

    /// Dietary and cuisine preference commands
    #[command(subcommand)]
    Preferences(PreferenceCommands),

    /// Configuration management commands
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Inventory subcommands
#[derive(Subcommand, Debug)]
pub enum InventoryCommands {
    /// List stocked items
    List,
    /// Add a single item
    Add {
        /// Item name (2-100 characters)
        name: String,
    },
    /// Remove an item by id
    Remove {
        /// Item id as shown by 'inventory list'
        item_id: i64,
    },
    /// Detect items from a fridge or pantry photo
    Scan {
        /// Path to an image file (max 10MB)
        image: PathBuf,
    },
    /// Add several items at once
    Import {
        /// Item names
        #[arg(required = true)]
        items: Vec<String>,
    },
}

/// Recipe subcommands
#[derive(Subcommand, Debug)]
pub enum RecipeCommands {
    /// List saved recipes (newest first)
    List,
    /// Show a recipe with ingredients and steps
    Show {
        /// Recipe id as shown by 'recipes list'
        recipe_id: i64,
    },
    /// Generate recipe ideas from the inventory
    Suggest {
        /// Use these ingredients instead of the stored inventory
        #[arg(short, long = "ingredient")]
        ingredients: Vec<String>,
        /// Allow recently cooked recipes to come up again
        #[arg(long)]
        ignore_history: bool,
    },
    /// Save a suggestion from the last 'recipes suggest' run
    Save {
        /// Suggestion number (1-based)
        number: usize,
    },
    /// Cook a saved recipe, consuming matching inventory items
    Cook {
        /// Recipe id
        recipe_id: i64,
    },
    /// Remove a recipe from the saved list
    Remove {
        /// Recipe id
        recipe_id: i64,
    },
}

/// Preference subcommands
#[derive(Subcommand, Debug)]
pub enum PreferenceCommands {
    /// List available preferences, marking the selected ones
    Show,
    /// Set dietary and cuisine preferences
    Set {
        /// Dietary preference id
        #[arg(long)]
        dietary: i64,
        /// Cuisine id
        #[arg(long)]
        cuisine: i64,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Validate configuration file
    Check,
}

// ============================================================================
// CLI Command Handlers
// ============================================================================

/// Everything a command handler needs: resolved API settings plus the
/// on-disk session state.
struct CommandContext {
    base_url: String,
    timeout: Duration,
    token: Option<String>,
    token_from_store: bool,
    sessions: SessionStore,
    suggestions: SuggestionCache,
}

impl CommandContext {
    fn new(cli: &Cli, config: &Config) -> Result<Self> {
        let sessions = SessionStore::new(&config.storage.data_dir);
        let suggestions = SuggestionCache::new(&config.storage.data_dir);

        // An explicit token beats the stored session.
        let (token, token_from_store) = match &cli.token {
            Some(token) => (Some(token.clone()), false),
            None => match sessions.load() {
                Ok(stored) => {
                    let from_store = stored.is_some();
                    (stored, from_store)
                }
                Err(err) => {
                    // A corrupt session file must not lock out the
                    // commands that would replace it.
                    warn!("Ignoring unreadable session file: {}", err);
                    (None, false)
                }
            },
        };

        Ok(Self {
            base_url: cli
                .api_url
                .clone()
                .unwrap_or_else(|| config.api.base_url.clone()),
            timeout: Duration::from_secs(config.api.timeout_secs),
            token,
            token_from_store,
            sessions,
            suggestions,
        })
    }

    /// Client without credentials, for login/register/status.
    fn anonymous_client(&self) -> Result<ApiClient> {
        ApiClient::with_timeout(&self.base_url, None, self.timeout).map_err(Into::into)
    }

    /// Client carrying the session token. Fails when nobody is logged in.
    fn client(&self) -> Result<ApiClient> {
        let token = self.token.as_deref().ok_or_else(|| {
            anyhow::anyhow!("Not logged in. Run 'stockchef login <email>' first.")
        })?;
        ApiClient::with_timeout(&self.base_url, Some(token), self.timeout).map_err(Into::into)
    }

    /// Unwrap an API result, dropping the stored session when the server
    /// no longer accepts its token. A rejected `--token` override leaves
    /// the stored login untouched.
    fn finish<T>(&self, result: Result<T, ApiError>) -> Result<T> {
        match result {
            Ok(value) => Ok(value),
            Err(err) if err.is_unauthorized() => {
                let hint = if self.token_from_store {
                    if let Err(clear_err) = self.sessions.clear() {
                        warn!("Failed to clear stale session: {}", clear_err);
                    }
                    "Session rejected. Run 'stockchef login <email>' to sign in again."
                } else {
                    "The server rejected the provided token."
                };
                Err(anyhow::Error::new(err).context(hint))
            }
            Err(err) => Err(err.into()),
        }
    }
}

/// Run a CLI command
pub async fn run_command(cli: &Cli, config: &Config) -> Result<()> {
    let ctx = CommandContext::new(cli, config)?;

    match &cli.command {
        Commands::Status => cmd_status(&ctx).await,
        Commands::Login { email, password } => cmd_login(&ctx, email, password).await,
        Commands::Register {
            email,
            password,
            first_name,
            last_name,
            dietary,
            cuisine,
        } => {
            cmd_register(
                &ctx, email, password, first_name, last_name, *dietary, *cuisine,
            )
            .await
        }
        Commands::Logout => cmd_logout(&ctx),
        Commands::Whoami => cmd_whoami(&ctx).await,
        Commands::Dashboard => cmd_dashboard(&ctx).await,
        Commands::Inventory(InventoryCommands::List) => cmd_inventory_list(&ctx).await,
        Commands::Inventory(InventoryCommands::Add { name }) => {
            cmd_inventory_add(&ctx, name).await
        }
        Commands::Inventory(InventoryCommands::Remove { item_id }) => {
            cmd_inventory_remove(&ctx, *item_id).await
        }
        Commands::Inventory(InventoryCommands::Scan { image }) => {
            cmd_inventory_scan(&ctx, image).await
        }
        Commands::Inventory(InventoryCommands::Import { items }) => {
            cmd_inventory_import(&ctx, items).await
        }
        Commands::Recipes(RecipeCommands::List) => cmd_recipes_list(&ctx).await,
        Commands::Recipes(RecipeCommands::Show { recipe_id }) => {
            cmd_recipes_show(&ctx, *recipe_id).await
        }
        Commands::Recipes(RecipeCommands::Suggest {
            ingredients,
            ignore_history,
        }) => cmd_recipes_suggest(&ctx, ingredients, *ignore_history).await,
        Commands::Recipes(RecipeCommands::Save { number }) => {
            cmd_recipes_save(&ctx, *number).await
        }
        Commands::Recipes(RecipeCommands::Cook { recipe_id }) => {
            cmd_recipes_cook(&ctx, *recipe_id).await
        }
        Commands::Recipes(RecipeCommands::Remove { recipe_id }) => {
            cmd_recipes_remove(&ctx, *recipe_id).await
        }
        Commands::Preferences(PreferenceCommands::Show) => cmd_preferences_show(&ctx).await,
        Commands::Preferences(PreferenceCommands::Set { dietary, cuisine }) => {
            cmd_preferences_set(&ctx, *dietary, *cuisine).await
        }
        Commands::Config(ConfigCommands::Check) => cmd_config_check(cli),
    }
}

/// Display server status
async fn cmd_status(ctx: &CommandContext) -> Result<()> {
    let client = ctx.anonymous_client()?;

    println!("Connecting to {}...", client.base_url());

    let health = client
        .health()
        .await
        .context("Failed to connect to server. Is the StockChef API running?")?;

    let icon = if health.is_healthy() { "[OK]" } else { "[!!]" };

    println!();
    println!("=== StockChef Server Status ===");
    println!();
    println!("Status:   {} {}", icon, health.status);
    println!("Message:  {}", health.message);
    println!();
    Ok(())
}

/// Log in and store the session token
async fn cmd_login(ctx: &CommandContext, email: &str, password: &str) -> Result<()> {
    validation::validate_email(email).map_err(ApiError::validation)?;
    validation::validate_password(password).map_err(ApiError::validation)?;

    let client = ctx.anonymous_client()?;
    let token = client.login(email, password).await?;
    ctx.sessions.save(&token.access_token)?;

    // Greet with the profile, the same way the dashboard would.
    let client = ApiClient::with_timeout(&ctx.base_url, Some(&token.access_token), ctx.timeout)?;
    let profile = client.current_user().await?;

    println!("[OK] Logged in as {} <{}>", profile.full_name(), profile.email);
    Ok(())
}

/// Create an account and log in
async fn cmd_register(
    ctx: &CommandContext,
    email: &str,
    password: &str,
    first_name: &str,
    last_name: &str,
    dietary: i64,
    cuisine: i64,
) -> Result<()> {
    validation::validate_email(email).map_err(ApiError::validation)?;
    validation::validate_password(password).map_err(ApiError::validation)?;

    let request = RegisterRequest {
        email: email.to_string(),
        password: password.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        dietary_preference_id: dietary,
        cuisine_preference_id: cuisine,
    };

    let client = ctx.anonymous_client()?;
    let token = client.register(&request).await?;
    ctx.sessions.save(&token.access_token)?;

    println!("[OK] Account created. Welcome, {}!", first_name);
    println!();
    println!("Add items with 'stockchef inventory add <name>' to get cooking.");
    Ok(())
}

/// Forget the stored session token
fn cmd_logout(ctx: &CommandContext) -> Result<()> {
    ctx.sessions.clear()?;
    ctx.suggestions.clear()?;
    println!("[OK] Logged out.");
    Ok(())
}

/// Show the signed-in user's profile
async fn cmd_whoami(ctx: &CommandContext) -> Result<()> {
    let client = ctx.client()?;
    let profile = ctx.finish(client.current_user().await)?;

    println!();
    println!("=== {} ===", profile.full_name());
    println!();
    println!("Email:        {}", profile.email);
    println!("Member since: {}", profile.created_at.format("%Y-%m-%d"));
    print_preference_lines(&profile);
    println!();
    Ok(())
}

/// Inventory and saved recipes side by side
async fn cmd_dashboard(ctx: &CommandContext) -> Result<()> {
    let client = ctx.client()?;
    let dashboard = ctx.finish(Dashboard::load(&client).await)?;

    println!();
    println!("=== Inventory ({} items) ===", dashboard.inventory.len());
    print_inventory_table(&dashboard.inventory);

    println!();
    println!(
        "=== Saved Recipes ({}/{}) ===",
        dashboard.recipes.len(),
        MAX_RECIPES_PER_USER
    );
    print_recipe_table(dashboard.recipes.recipes());

    if dashboard.inventory.is_empty() && dashboard.recipes.is_empty() {
        println!();
        println!("Getting started:");
        println!("  1. Add items with 'stockchef inventory add <name>'");
        println!("  2. Generate ideas with 'stockchef recipes suggest'");
    }
    println!();
    Ok(())
}

/// List stocked items
async fn cmd_inventory_list(ctx: &CommandContext) -> Result<()> {
    let client = ctx.client()?;
    let items = ctx.finish(client.list_inventory().await)?;

    if items.is_empty() {
        println!("Inventory is empty. Add items with 'stockchef inventory add <name>'.");
        return Ok(());
    }

    println!();
    print_inventory_table(&items);
    println!();
    Ok(())
}

/// Add a single inventory item
async fn cmd_inventory_add(ctx: &CommandContext, name: &str) -> Result<()> {
    validation::validate_item_name(name).map_err(ApiError::validation)?;

    let client = ctx.client()?;
    let item = ctx.finish(client.add_inventory_item(name.trim()).await)?;

    println!("[OK] Added '{}' (id {})", item.name, item.item_id);
    Ok(())
}

/// Remove an inventory item by id
async fn cmd_inventory_remove(ctx: &CommandContext, item_id: i64) -> Result<()> {
    let client = ctx.client()?;
    let ack = ctx.finish(client.remove_inventory_item(item_id).await)?;

    println!("[OK] {}", ack.message);
    Ok(())
}

/// Detect items from a photo
async fn cmd_inventory_scan(ctx: &CommandContext, image: &Path) -> Result<()> {
    validation::validate_image_path(image).map_err(ApiError::validation)?;

    let metadata = std::fs::metadata(image)
        .with_context(|| format!("Cannot read image file: {}", image.display()))?;
    validation::validate_image_size(metadata.len()).map_err(ApiError::validation)?;

    let bytes = std::fs::read(image)
        .with_context(|| format!("Cannot read image file: {}", image.display()))?;
    let file_name = image
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("upload.jpg")
        .to_string();
    let mime = mime_guess::from_path(image).first_or_octet_stream();

    println!("Scanning {}...", image.display());

    let client = ctx.client()?;
    let summary = ctx.finish(
        client
            .upload_inventory_image(&file_name, mime.essence_str(), bytes)
            .await,
    )?;

    println!();
    println!("[OK] {}", summary.message);
    if !summary.detected_items.is_empty() {
        println!();
        println!(
            "Detected ({} items, {} new):",
            summary.total_items_detected, summary.items_added
        );
        for name in &summary.detected_items {
            println!("  - {}", name);
        }
    }
    println!();
    Ok(())
}

/// Add several items at once
async fn cmd_inventory_import(ctx: &CommandContext, items: &[String]) -> Result<()> {
    for name in items {
        validation::validate_item_name(name).map_err(ApiError::validation)?;
    }

    let names: Vec<String> = items.iter().map(|name| name.trim().to_string()).collect();
    let client = ctx.client()?;
    let summary = ctx.finish(client.import_inventory_items(names).await)?;

    println!("[OK] {}", summary.message);
    Ok(())
}

/// List saved recipes
async fn cmd_recipes_list(ctx: &CommandContext) -> Result<()> {
    let client = ctx.client()?;
    let history = RecipeHistory::from_server(ctx.finish(client.recipe_history().await)?);

    println!();
    println!(
        "=== Saved Recipes ({}/{}) ===",
        history.len(),
        MAX_RECIPES_PER_USER
    );
    print_recipe_table(history.recipes());
    println!();
    if history.is_full() {
        println!("Saving another recipe will replace the oldest one.");
    } else {
        println!("You can keep up to {} recipes.", MAX_RECIPES_PER_USER);
    }
    println!();
    Ok(())
}

/// Show a recipe with ingredients and steps
async fn cmd_recipes_show(ctx: &CommandContext, recipe_id: i64) -> Result<()> {
    let client = ctx.client()?;
    let recipe = ctx.finish(client.recipe_detail(recipe_id).await)?;

    println!();
    println!("=== {} ===", recipe.title);
    println!();
    if let Some(description) = &recipe.short_description {
        println!("{}", description);
        println!();
    }
    println!("Time:  {}", format_minutes(recipe.total_time_minutes));
    println!("Saved: {}", recipe.created_at.format("%Y-%m-%d %H:%M"));
    println!();
    println!("Ingredients:");
    for ingredient in &recipe.ingredients {
        println!("  - {}", ingredient.ingredient_name);
    }
    println!();
    println!("Steps:");
    for (index, step) in recipe.steps().iter().enumerate() {
        println!("  {}. {}", index + 1, step);
    }
    println!();
    Ok(())
}

/// Generate recipe ideas from the inventory
async fn cmd_recipes_suggest(
    ctx: &CommandContext,
    ingredients: &[String],
    ignore_history: bool,
) -> Result<()> {
    let client = ctx.client()?;

    // Explicit --ingredient flags skip the inventory fetch entirely.
    let names = if ingredients.is_empty() {
        let inventory = ctx.finish(client.list_inventory().await)?;
        dashboard::ingredient_names(&inventory)
    } else {
        ingredients.to_vec()
    };

    if !names.is_empty() {
        println!("Generating recipe ideas from {} ingredient(s)...", names.len());
    }

    let outcome = ctx.finish(
        dashboard::suggest_from_ingredients(&client, names, ignore_history).await,
    )?;

    match outcome {
        SuggestOutcome::EmptyInventory => {
            println!("[!!] Inventory is empty; nothing to cook from.");
            println!("     Add items with 'stockchef inventory add <name>' and try again.");
        }
        SuggestOutcome::NoMatches => {
            println!("No recipes could be generated from those ingredients. Try adding more items.");
        }
        SuggestOutcome::Suggestions(suggestions) => {
            ctx.suggestions.store(&suggestions)?;

            println!();
            for (index, suggestion) in suggestions.iter().enumerate() {
                println!(
                    "{}. {} ({})",
                    index + 1,
                    suggestion.recipe_name,
                    suggestion.approx_time
                );
                println!("   {}", suggestion.description);
                println!("   Uses: {}", suggestion.ingredients.join(", "));
                println!();
            }
            println!("Save one with 'stockchef recipes save <number>'.");
        }
    }
    println!();
    Ok(())
}

/// Save a suggestion from the last suggest run
async fn cmd_recipes_save(ctx: &CommandContext, number: usize) -> Result<()> {
    let suggestions = ctx.suggestions.load()?;
    let suggestion = number
        .checked_sub(1)
        .and_then(|index| suggestions.get(index))
        .with_context(|| {
            format!(
                "No suggestion #{}. The last run produced {}.",
                number,
                suggestions.len()
            )
        })?;

    let client = ctx.client()?;

    // Snapshot the current list first so the eviction can be reported.
    let mut history = RecipeHistory::from_server(ctx.finish(client.recipe_history().await)?);

    let saved = ctx.finish(client.create_recipe(suggestion).await)?;
    let evicted = history.record_saved(saved.clone().into());

    println!("[OK] Saved '{}' (id {})", saved.title, saved.recipe_id);
    if let Some(old) = evicted {
        println!(
            "     Removed oldest recipe '{}' to stay within the {}-recipe limit.",
            old.title, MAX_RECIPES_PER_USER
        );
    }
    println!();
    println!("View it with 'stockchef recipes show {}'.", saved.recipe_id);
    Ok(())
}

/// Cook a saved recipe
async fn cmd_recipes_cook(ctx: &CommandContext, recipe_id: i64) -> Result<()> {
    let client = ctx.client()?;
    let summary = ctx.finish(client.cook_recipe(recipe_id).await)?;

    println!("[OK] {}", summary.message);
    println!("     {} inventory item(s) were used up.", summary.ingredients_used);

    // The server consumed the items; show the fresh count rather than
    // guessing at it locally.
    let remaining = ctx.finish(client.list_inventory().await)?;
    println!("     {} item(s) left in the inventory.", remaining.len());
    Ok(())
}

/// Remove a recipe from the saved list
async fn cmd_recipes_remove(ctx: &CommandContext, recipe_id: i64) -> Result<()> {
    let client = ctx.client()?;
    let mut history = RecipeHistory::from_server(ctx.finish(client.recipe_history().await)?);

    let ack = ctx.finish(client.delete_recipe(recipe_id).await)?;
    history.remove(recipe_id);

    println!("[OK] {}", ack.message);
    println!(
        "     {} of {} recipe slots in use.",
        history.len(),
        MAX_RECIPES_PER_USER
    );
    Ok(())
}

/// List available preferences, marking the selected ones
async fn cmd_preferences_show(ctx: &CommandContext) -> Result<()> {
    let client = ctx.client()?;
    let result = tokio::try_join!(client.preference_catalog(), client.current_user());
    let (catalog, profile) = ctx.finish(result)?;

    let selected_dietary: Vec<i64> = profile
        .dietary_preferences
        .iter()
        .map(|pref| pref.preference_id)
        .collect();
    let selected_cuisines: Vec<i64> = profile
        .preferred_cuisines
        .iter()
        .map(|cuisine| cuisine.cuisine_id)
        .collect();

    println!();
    println!("Dietary preferences:");
    for pref in &catalog.dietary_preferences {
        let marker = if selected_dietary.contains(&pref.preference_id) {
            "*"
        } else {
            " "
        };
        println!("  {} [{}] {}", marker, pref.preference_id, pref.name);
    }
    println!();
    println!("Cuisines:");
    for cuisine in &catalog.cuisines {
        let marker = if selected_cuisines.contains(&cuisine.cuisine_id) {
            "*"
        } else {
            " "
        };
        println!("  {} [{}] {}", marker, cuisine.cuisine_id, cuisine.name);
    }
    println!();
    println!("Change with 'stockchef preferences set --dietary <id> --cuisine <id>'.");
    println!();
    Ok(())
}

/// Set dietary and cuisine preferences
async fn cmd_preferences_set(ctx: &CommandContext, dietary: i64, cuisine: i64) -> Result<()> {
    let update = PreferenceUpdate {
        dietary_preference_id: dietary,
        cuisine_preference_id: cuisine,
    };

    let client = ctx.client()?;
    let profile = ctx.finish(client.update_preferences(&update).await)?;

    println!("[OK] Preferences updated.");
    print_preference_lines(&profile);
    Ok(())
}

/// Validate configuration file
fn cmd_config_check(cli: &Cli) -> Result<()> {
    let config_path = &cli.config;

    println!("Checking configuration file: {}", config_path.display());
    println!();

    if !config_path.exists() {
        println!(
            "[!!] Configuration file not found: {}",
            config_path.display()
        );
        println!();
        println!("Defaults will be used. To customize, copy stockchef.example.toml to stockchef.toml");
        return Ok(());
    }

    match Config::load(config_path) {
        Ok(config) => {
            println!("[OK] Configuration file is valid!");
            println!();
            println!("=== Configuration Summary ===");
            println!();
            println!("API:");
            println!("  Base URL:   {}", config.api.base_url);
            println!("  Timeout:    {}s", config.api.timeout_secs);
            println!();
            println!("Storage:");
            println!("  Data Dir:   {}", config.storage.data_dir.display());
            println!();
            println!("Logging:");
            println!("  Level:      {}", config.logging.level);
            println!();

            let url = &config.api.base_url;
            if !url.starts_with("https://")
                && !url.contains("localhost")
                && !url.contains("127.0.0.1")
            {
                println!("Warnings:");
                println!("  [!] API URL is not HTTPS - the session token will travel in plaintext");
                println!();
            }

            Ok(())
        }
        Err(e) => {
            println!("[!!] Configuration file is invalid!");
            println!();
            println!("Error: {}", e);
            println!();
            println!("Please check the configuration file syntax and try again.");
            anyhow::bail!("Invalid configuration file");
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn print_preference_lines(profile: &UserProfile) {
    let dietary = profile
        .dietary_preferences
        .iter()
        .map(|pref| pref.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let cuisines = profile
        .preferred_cuisines
        .iter()
        .map(|cuisine| cuisine.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    println!(
        "Dietary:      {}",
        if dietary.is_empty() { "-" } else { dietary.as_str() }
    );
    println!(
        "Cuisines:     {}",
        if cuisines.is_empty() { "-" } else { cuisines.as_str() }
    );
}

fn print_inventory_table(items: &[InventoryItem]) {
    if items.is_empty() {
        println!("Inventory is empty.");
        return;
    }

    println!("{:<6}  {:<40}  {:<16}", "ID", "NAME", "ADDED");
    println!("{}", "-".repeat(66));
    for item in items {
        println!(
            "{:<6}  {:<40}  {:<16}",
            item.item_id,
            truncate(&item.name, 40),
            item.added_at.format("%Y-%m-%d %H:%M")
        );
    }
}

fn print_recipe_table(recipes: &[Recipe]) {
    if recipes.is_empty() {
        println!("No saved recipes yet.");
        return;
    }

    println!(
        "{:<6}  {:<34}  {:<10}  {:<16}",
        "ID", "TITLE", "TIME", "SAVED"
    );
    println!("{}", "-".repeat(72));
    for recipe in recipes {
        println!(
            "{:<6}  {:<34}  {:<10}  {:<16}",
            recipe.recipe_id,
            truncate(&recipe.title, 34),
            format_minutes(recipe.total_time_minutes),
            recipe.created_at.format("%Y-%m-%d %H:%M")
        );
    }
}

/// Format a minute count to a compact human string
fn format_minutes(minutes: Option<i64>) -> String {
    match minutes {
        None => "-".to_string(),
        Some(m) if m >= 60 => format!("{}h {}m", m / 60, m % 60),
        Some(m) => format!("{} min", m),
    }
}

/// Truncate a string to max length with ellipsis
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
