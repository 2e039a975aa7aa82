use futures::stream;
use routeguide::{Feature, Point, Rectangle, RouteGuide, RouteNote};
use routeguide_client::RouteGuideClient;
use routeguide_server::run_server;
use std::net::SocketAddr;
use tokio::time::{Duration, sleep};

const A: Point = Point::new(10_000_000, 10_000_000);
const B: Point = Point::new(15_000_000, 5_000_000);
const FAR: Point = Point::new(30_000_000, 30_000_000);

fn guide() -> anyhow::Result<RouteGuide> {
    Ok(RouteGuide::builder()
        .features(vec![
            Feature::new("A", A),
            Feature::new("B", B),
            Feature::new("Far", FAR),
        ])
        .build()?)
}

async fn start_server(guide: RouteGuide) -> anyhow::Result<SocketAddr> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let bound_addr = listener.local_addr()?;

    tokio::spawn(async move {
        let _ = run_server(listener, guide, futures::future::pending()).await;
    });

    // Wait for server to start
    sleep(Duration::from_millis(100)).await;
    Ok(bound_addr)
}

#[tokio::test]
async fn test_get_feature_hit_and_miss() -> anyhow::Result<()> {
    tracing_subscriber::fmt::try_init().ok();

    let addr = start_server(guide()?).await?;
    let mut client = RouteGuideClient::connect(addr).await?;

    let hit = client.get_feature(A).await?;
    assert_eq!(hit, Feature::new("A", A));

    let miss = client.get_feature(Point::new(0, 0)).await?;
    assert_eq!(miss.name, "");
    assert_eq!(miss.location, Point::new(0, 0));

    Ok(())
}

#[tokio::test]
async fn test_list_features_any_corner_order() -> anyhow::Result<()> {
    tracing_subscriber::fmt::try_init().ok();

    let addr = start_server(guide()?).await?;
    let mut client = RouteGuideClient::connect(addr).await?;

    let corners = [
        (Point::new(0, 0), Point::new(20_000_000, 20_000_000)),
        (Point::new(20_000_000, 20_000_000), Point::new(0, 0)),
        (Point::new(20_000_000, 0), Point::new(0, 20_000_000)),
        (Point::new(0, 20_000_000), Point::new(20_000_000, 0)),
    ];

    for (lo, hi) in corners {
        let features = client.list_features(Rectangle::new(lo, hi)).await?;
        let names: Vec<_> = features.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
    }

    let empty = client
        .list_features(Rectangle::new(Point::new(-5, -5), Point::new(-1, -1)))
        .await?;
    assert!(empty.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_record_route_summary() -> anyhow::Result<()> {
    tracing_subscriber::fmt::try_init().ok();

    let addr = start_server(guide()?).await?;
    let mut client = RouteGuideClient::connect(addr).await?;

    let origin = Point::new(0, 0);
    let summary = client.record_route(stream::iter(vec![origin, origin])).await?;
    assert_eq!(summary.point_count, 2);
    assert_eq!(summary.feature_count, 0);
    assert_eq!(summary.distance, 0);

    let summary = client.record_route(stream::iter(vec![A, origin, B])).await?;
    let expected = A.haversine_distance(&origin) + origin.haversine_distance(&B);
    assert_eq!(summary.point_count, 3);
    assert_eq!(summary.feature_count, 2);
    assert_eq!(summary.distance, expected as i32);

    let summary = client.record_route(stream::iter(Vec::new())).await?;
    assert_eq!(summary.point_count, 0);
    assert_eq!(summary.feature_count, 0);
    assert_eq!(summary.distance, 0);

    Ok(())
}

#[tokio::test]
async fn test_route_chat_echoes_earlier_notes() -> anyhow::Result<()> {
    tracing_subscriber::fmt::try_init().ok();

    let addr = start_server(guide()?).await?;
    let mut client = RouteGuideClient::connect(addr).await?;

    let notes = vec![
        RouteNote::new("First message", Point::new(0, 0)),
        RouteNote::new("Second message", Point::new(0, 1)),
        RouteNote::new("Third message", Point::new(1, 0)),
        RouteNote::new("Fourth message", Point::new(0, 0)),
    ];
    let echoes = client.route_chat(stream::iter(notes)).await?;
    assert_eq!(echoes, [RouteNote::new("First message", Point::new(0, 0))]);

    Ok(())
}

#[tokio::test]
async fn test_route_chat_across_clients() -> anyhow::Result<()> {
    tracing_subscriber::fmt::try_init().ok();

    let addr = start_server(guide()?).await?;
    let mut first = RouteGuideClient::connect(addr).await?;
    let mut second = RouteGuideClient::connect(addr).await?;

    let echoes = first
        .route_chat(stream::iter(vec![
            RouteNote::new("X", Point::new(0, 0)),
            RouteNote::new("Elsewhere", Point::new(5, 5)),
        ]))
        .await?;
    assert!(echoes.is_empty());

    let echoes = second
        .route_chat(stream::iter(vec![RouteNote::new("Y", Point::new(0, 0))]))
        .await?;
    assert_eq!(echoes, [RouteNote::new("X", Point::new(0, 0))]);

    let echoes = first
        .route_chat(stream::iter(vec![RouteNote::new("Z", Point::new(0, 0))]))
        .await?;
    assert_eq!(
        echoes,
        [
            RouteNote::new("X", Point::new(0, 0)),
            RouteNote::new("Y", Point::new(0, 0)),
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_route_chat_different_locations_never_echo() -> anyhow::Result<()> {
    tracing_subscriber::fmt::try_init().ok();

    let addr = start_server(guide()?).await?;
    let mut client = RouteGuideClient::connect(addr).await?;

    let notes: Vec<_> = (0..20)
        .map(|i| RouteNote::new(format!("note {}", i), Point::new(i, -i)))
        .collect();
    let echoes = client.route_chat(stream::iter(notes)).await?;
    assert!(echoes.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_calls_share_one_connection() -> anyhow::Result<()> {
    tracing_subscriber::fmt::try_init().ok();

    let addr = start_server(guide()?).await?;
    let mut client = RouteGuideClient::connect(addr).await?;

    for _ in 0..3 {
        assert_eq!(client.get_feature(B).await?.name, "B");
        let summary = client.record_route(stream::iter(vec![B])).await?;
        assert_eq!(summary.feature_count, 1);
        client
            .route_chat(stream::iter(vec![RouteNote::new("n", B)]))
            .await?;
    }

    Ok(())
}
