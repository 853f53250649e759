use anyhow::Result;
use dotenvy::dotenv;
use std::sync::Arc;
use teloxide::prelude::*;

use clipdex::cli::{Cli, Commands};
use clipdex::core::{config, init_logger, log_configuration};
use clipdex::lookup::{classify, Request};
use clipdex::storage::files::{count_files, list_files};
use clipdex::storage::{create_pool, get_connection, CachedStore, SqliteStore, Store};
use clipdex::telegram::{create_bot, schema, setup_bot_commands, HandlerDeps};

/// Main entry point for the Telegram bot
///
/// Parses CLI arguments and dispatches to appropriate subcommand.
///
/// # Errors
/// Returns an error if initialization fails (logging, database, bot creation).
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Load environment variables from .env before any config is read
    let _ = dotenv();

    init_logger(&config::LOG_FILE_PATH)?;

    match cli.command {
        Some(Commands::Run) | None => run_bot().await,
        Some(Commands::Lookup { query }) => run_lookup(&query).await,
        Some(Commands::List { limit }) => run_list(limit),
    }
}

/// Opens the database and wraps it in the read-through cache when enabled
fn open_store() -> Result<Arc<dyn Store>> {
    let pool = Arc::new(create_pool(&config::DATABASE_PATH)?);
    let sqlite = SqliteStore::new(pool);

    let store: Arc<dyn Store> = match *config::CACHE_CAPACITY {
        0 => Arc::new(sqlite),
        capacity => Arc::new(CachedStore::new(sqlite, capacity)),
    };
    Ok(store)
}

async fn run_bot() -> Result<()> {
    log::info!("Starting bot...");
    log_configuration();

    let bot = create_bot()?;
    let store = open_store()?;

    let me = bot.get_me().await?;
    log::info!("Bot username: @{}, Bot ID: {}", me.username(), me.id);

    if let Err(e) = setup_bot_commands(&bot).await {
        log::warn!("Failed to set bot commands: {}", e);
    }

    let handler = schema(HandlerDeps::new(store, *config::MAX_RANGE_WIDTH));

    log::info!("Starting bot in long polling mode");
    Dispatcher::builder(bot, handler)
        .dependencies(DependencyMap::new())
        .default_handler(|upd| async move {
            log::debug!("Unhandled update: {:?}", upd.id);
        })
        .error_handler(LoggingErrorHandler::with_custom_text("An error has occurred in the dispatcher"))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    log::info!("Dispatcher shutdown gracefully");
    Ok(())
}

/// Run the lookup command: resolve a query the way the bot would
async fn run_lookup(query: &str) -> Result<()> {
    let pool = Arc::new(create_pool(&config::DATABASE_PATH)?);
    let store = SqliteStore::new(pool);

    match classify(query, *config::MAX_RANGE_WIDTH) {
        Request::SingleKey(key) => match store.get(&key).await? {
            Some(handle) => println!("{}\t{}", key, handle),
            None => println!("{}\t(not found)", key),
        },
        Request::KeyRange(range) => {
            let mut found = 0usize;
            for key in range.keys() {
                if let Some(handle) = store.get(&key).await? {
                    println!("{}\t{}", key, handle);
                    found += 1;
                }
            }
            println!("{} of {} keys found", found, range.width());
        }
        Request::InvalidRange { start, end } => println!("Invalid range: {} > {}", start, end),
        Request::RangeTooWide { start, end, max_width } => {
            println!("Range {}-{} exceeds MAX_RANGE_WIDTH ({})", start, end, max_width)
        }
        Request::NoMatch => println!("Not a lookup request: {:?}", query),
    }
    Ok(())
}

/// Run the list command
fn run_list(limit: usize) -> Result<()> {
    let pool = create_pool(&config::DATABASE_PATH)?;
    let conn = get_connection(&pool)?;

    let total = count_files(&conn)?;
    for record in list_files(&conn, limit)? {
        println!("{}\t{}\t{}", record.name, record.file_id, record.created_at);
    }
    println!("{} record(s) stored", total);
    Ok(())
}
