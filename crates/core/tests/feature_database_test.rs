use routeguide::prelude::*;
use routeguide::storage::load_features;
use std::path::PathBuf;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn db_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/route_guide_db.json")
}

#[test]
fn test_bundled_database_loads() -> Result<()> {
    init_logging();
    let store = load_features(db_path())?;
    assert!(!store.is_empty());

    let hit = store.find_by_point(&Point::new(409_146_138, -746_188_906));
    assert_eq!(
        hit.name,
        "Berkshire Valley Management Area Trail, Jefferson, NJ, USA"
    );

    // Unnamed records are stored but never count as features
    let unnamed = Point::new(404_701_380, -744_781_745);
    assert_eq!(store.find_by_point(&unnamed).location, unnamed);
    assert!(!store.is_feature(&unnamed));

    Ok(())
}

#[test]
fn test_bundled_database_listing_and_route() -> Result<()> {
    init_logging();
    let guide = RouteGuide::builder().db_path(db_path()).build()?;

    let rect = Rectangle::new(
        Point::new(420_000_000, -730_000_000),
        Point::new(400_000_000, -750_000_000),
    );
    let listed = guide.list_features(rect);
    assert_eq!(listed.len(), guide.features().len());

    let named: Vec<Point> = guide
        .features()
        .iter()
        .filter(|f| f.is_named())
        .map(|f| f.location)
        .take(5)
        .collect();

    let mut route = guide.route_recorder();
    for point in &named {
        route.record(*point);
    }
    let summary = route.finish();

    let expected: f64 = named
        .windows(2)
        .map(|w| w[0].haversine_distance(&w[1]))
        .sum();
    assert_eq!(summary.point_count, 5);
    assert_eq!(summary.feature_count, 5);
    assert_eq!(summary.distance, expected as i32);

    Ok(())
}
