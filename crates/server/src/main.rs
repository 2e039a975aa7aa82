use clap::Parser;
use routeguide::{Config, RouteGuide};
use routeguide_server::run_server;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 50051)]
    port: u16,

    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// JSON feature database, e.g. route_guide_db.json
    #[arg(short, long)]
    db_path: PathBuf,

    /// Optional JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "routeguide_server=info,routeguide=info,info".into()),
        )
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            info!("Loading config from {}", path.display());
            Config::from_json(&std::fs::read_to_string(path)?)?
        }
        None => Config::default(),
    };

    info!("Loading feature database from {}", args.db_path.display());
    let guide = RouteGuide::builder()
        .db_path(&args.db_path)
        .config(config)
        .build()?;
    info!("{} features loaded", guide.features().len());

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    let shutdown = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for ctrl_c signal");
    };

    run_server(listener, guide, Box::pin(shutdown)).await?;

    Ok(())
}
