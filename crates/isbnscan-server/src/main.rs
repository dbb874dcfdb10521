use clap::Parser;
use isbnscanapp::store::mirror::MirrorFile;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod routes;

#[derive(Parser, Debug)]
#[command(name = "isbnscan-server")]
#[command(about = "Serve a shared copy of an isbnscan history over HTTP", long_about = None)]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 3001)]
    port: u16,

    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    bind: String,

    /// JSON file holding the mirrored history
    #[arg(long, env = "ISBNSCAN_DATA_FILE", default_value = "data/scans.json")]
    data_file: PathBuf,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> std::io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    let addr: SocketAddr = format!("{}:{}", args.bind, args.port)
        .parse()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    let app = routes::create_router(MirrorFile::new(&args.data_file));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        "Server listening on http://{} (data file: {})",
        listener.local_addr()?,
        args.data_file.display()
    );
    axum::serve(listener, app).await
}
