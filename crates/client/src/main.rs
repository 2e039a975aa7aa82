use clap::Parser;
use futures::stream::{self, StreamExt};
use rand::Rng;
use routeguide::storage::load_features;
use routeguide_client::RouteGuideClient;
use routeguide_types::{Point, Rectangle, RouteNote};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

const ROUTE_POINTS: usize = 10;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value = "127.0.0.1:50051")]
    addr: SocketAddr,

    /// JSON feature database the route points are picked from
    #[arg(short, long)]
    db_path: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "routeguide_client=info,info".into()),
        )
        .init();

    let args = Args::parse();
    let store = load_features(&args.db_path)?;
    if store.is_empty() {
        anyhow::bail!("Feature database {} is empty", args.db_path.display());
    }

    let mut client = RouteGuideClient::connect(args.addr).await?;
    info!("Connected to {}", args.addr);

    info!("-------------- GetFeature --------------");
    for point in [Point::new(409_146_138, -746_188_906), Point::new(0, 0)] {
        let feature = client.get_feature(point).await?;
        if feature.is_named() {
            info!("Found feature called {} at {}", feature.name, feature.location);
        } else {
            info!("Found no feature at {}", feature.location);
        }
    }

    info!("-------------- ListFeatures --------------");
    let rect = Rectangle::new(
        Point::new(400_000_000, -750_000_000),
        Point::new(420_000_000, -730_000_000),
    );
    info!("Looking for features between {}", rect);
    for feature in client.list_features(rect).await? {
        info!("Found feature called {} at {}", feature.name, feature.location);
    }

    info!("-------------- RecordRoute --------------");
    let route: Vec<(Point, Duration)> = {
        let mut rng = rand::thread_rng();
        (0..ROUTE_POINTS)
            .filter_map(|_| {
                let feature = store.iter().nth(rng.gen_range(0..store.len()))?;
                Some((feature.location, Duration::from_millis(rng.gen_range(500..1500))))
            })
            .collect()
    };
    let points = stream::iter(route).then(|(point, pause)| async move {
        info!("Visiting point {}", point);
        tokio::time::sleep(pause).await;
        point
    });
    let summary = client.record_route(points).await?;
    info!("Finished trip with {}", summary);

    info!("-------------- RouteChat --------------");
    let notes = vec![
        RouteNote::new("First message", Point::new(0, 0)),
        RouteNote::new("Second message", Point::new(0, 1)),
        RouteNote::new("Third message", Point::new(1, 0)),
        RouteNote::new("Fourth message", Point::new(0, 0)),
    ];
    let sent = stream::iter(notes).inspect(|note| {
        info!("Sending message {} at {}", note.message, note.location);
    });
    for note in client.route_chat(sent).await? {
        info!("Got message {} at {}", note.message, note.location);
    }

    Ok(())
}
