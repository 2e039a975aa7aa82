//! Fixed-point geographic points and great-circle distance.
//!
//! Points carry latitude and longitude as `i32` degrees scaled by
//! [`COORD_FACTOR`]. They convert to `geo` coordinates so rectangles can be
//! normalized by `geo::Rect`, while distance follows the haversine formula on
//! a sphere of radius [`EARTH_RADIUS_METERS`].

use serde::{Deserialize, Serialize};

/// Scale between fixed-point coordinates and degrees.
pub const COORD_FACTOR: f64 = 10_000_000.0;

/// Sphere radius used for haversine distances.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// A geographic location in fixed-point degrees.
///
/// Equality is exact on both fields, which makes `Point` usable as a lookup
/// key without any floating-point drift.
///
/// # Examples
///
/// ```
/// use routeguide_types::geo::Point;
///
/// let p = Point::new(409_146_138, -746_188_906);
/// assert_eq!(p.latitude, 409_146_138);
/// assert!((p.lat_degrees() - 40.9146138).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub latitude: i32,
    pub longitude: i32,
}

impl Point {
    #[inline]
    pub const fn new(latitude: i32, longitude: i32) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude in degrees.
    #[inline]
    pub fn lat_degrees(&self) -> f64 {
        f64::from(self.latitude) / COORD_FACTOR
    }

    /// Longitude in degrees.
    #[inline]
    pub fn lon_degrees(&self) -> f64 {
        f64::from(self.longitude) / COORD_FACTOR
    }

    /// Great-circle distance to `other` in meters.
    ///
    /// Uses the haversine formula with a 6,371 km Earth radius. Coordinates
    /// outside the valid latitude/longitude range are not rejected; the
    /// intermediate term is clamped so the result is always finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use routeguide_types::geo::Point;
    ///
    /// let a = Point::new(0, 0);
    /// let b = Point::new(0, 10_000_000);
    /// let d = a.haversine_distance(&b);
    /// assert!((d - 111_194.9).abs() < 1.0);
    /// ```
    pub fn haversine_distance(&self, other: &Point) -> f64 {
        let lat1 = self.lat_degrees().to_radians();
        let lat2 = other.lat_degrees().to_radians();
        let delta_lat = (other.lat_degrees() - self.lat_degrees()).to_radians();
        let delta_lon = (other.lon_degrees() - self.lon_degrees()).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
        let a = a.clamp(0.0, 1.0);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_METERS * c
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.lat_degrees(), self.lon_degrees())
    }
}

impl From<Point> for geo::Coord<i32> {
    fn from(point: Point) -> Self {
        geo::coord! { x: point.longitude, y: point.latitude }
    }
}

impl From<geo::Coord<i32>> for Point {
    fn from(coord: geo::Coord<i32>) -> Self {
        Self::new(coord.y, coord.x)
    }
}
