use chrono::Local;
use clap::Parser;
use directories::ProjectDirs;
use isbnscanapp::api::{ConfigAction, ScanApi};
use isbnscanapp::config::ScanConfig;
use isbnscanapp::error::{Result, ScanError};
use isbnscanapp::lookup::LookupClient;
use isbnscanapp::remote::RemoteClient;
use isbnscanapp::store::fs_backend::FsKvBackend;
use isbnscanapp::store::persistent::PersistentStore;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod args;
mod print;
use args::{Cli, Commands};
use print::{print_book, print_messages, print_scans};

/// Overrides the data directory (history and config.json).
const HOME_ENV: &str = "ISBNSCAN_HOME";

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: ScanApi<PersistentStore<FsKvBackend>>,
    config: ScanConfig,
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Lookup { isbn, no_record }) => handle_lookup(&mut ctx, &isbn, no_record).await,
        Some(Commands::List { long, json }) => handle_list(&ctx, long, json),
        Some(Commands::Import { file }) => handle_import(&mut ctx, file),
        Some(Commands::Export { out }) => handle_export(&ctx, out),
        Some(Commands::Clear) => handle_clear(&mut ctx),
        Some(Commands::Pull) => handle_pull(&mut ctx).await,
        Some(Commands::Push) => handle_push(&ctx).await,
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, false, false),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "isbnscan", "isbnscan")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ScanError::Store("Could not determine data directory".to_string()))
}

fn init_context() -> Result<AppContext> {
    let data_dir = data_dir()?;
    debug!("Using data directory {}", data_dir.display());

    let config = ScanConfig::load(&data_dir)?;
    let store = PersistentStore::new(FsKvBackend::new(data_dir.clone()));
    let api = ScanApi::new(store, data_dir);

    Ok(AppContext { api, config })
}

async fn handle_lookup(ctx: &mut AppContext, isbn: &str, no_record: bool) -> Result<()> {
    let client = LookupClient::new(ctx.config.lookup_url.clone());
    let book = client.lookup(isbn).await?;
    print_book(isbn.trim(), book.as_ref());

    if !no_record {
        let result = ctx.api.record_scan(isbn, book)?;
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_list(ctx: &AppContext, long: bool, json: bool) -> Result<()> {
    let result = ctx.api.list_scans()?;
    if json {
        let payload = isbnscanapp::store::file::export_to_string(&result.listed_scans)?;
        println!("{}", payload);
        return Ok(());
    }
    print_scans(&result.listed_scans, long);
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, file: PathBuf) -> Result<()> {
    let result = ctx.api.import_file(&file)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, out: Option<PathBuf>) -> Result<()> {
    let dir = out
        .or_else(|| ctx.config.export_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    let result = ctx.api.export(&dir, &Local::now())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.clear()?;
    print_messages(&result.messages);
    Ok(())
}

async fn handle_pull(ctx: &mut AppContext) -> Result<()> {
    let remote = RemoteClient::new(ctx.config.remote_url.clone());
    let incoming = remote.fetch().await?;
    let result = ctx.api.import_collection(incoming, &remote.scans_url());
    print_messages(&result.messages);
    Ok(())
}

async fn handle_push(ctx: &AppContext) -> Result<()> {
    let remote = RemoteClient::new(ctx.config.remote_url.clone());
    let stored = remote.replace(ctx.api.scans()).await?;
    println!("Pushed {} scans to {}", stored.len(), remote.scans_url());
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let result = ctx.api.config(action)?;
    print_messages(&result.messages);
    Ok(())
}
