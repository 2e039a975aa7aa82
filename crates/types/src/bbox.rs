use crate::geo::Point;
use geo::Rect;
use serde::{Deserialize, Serialize};

/// An axis-aligned region given by two opposite corners.
///
/// `lo` and `hi` are whatever the caller sent; nothing guarantees that `lo`
/// is the south-west corner. All queries go through [`Rectangle::bounds`],
/// which normalizes the corners to min/max per axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rectangle {
    pub lo: Point,
    pub hi: Point,
}

impl Rectangle {
    /// Create a rectangle from two opposite corners, in any order.
    ///
    /// # Examples
    ///
    /// ```
    /// use routeguide_types::bbox::Rectangle;
    /// use routeguide_types::geo::Point;
    ///
    /// let rect = Rectangle::new(Point::new(20, 0), Point::new(0, 20));
    /// assert_eq!(rect.south_west(), Point::new(0, 0));
    /// assert_eq!(rect.north_east(), Point::new(20, 20));
    /// ```
    pub fn new(lo: Point, hi: Point) -> Self {
        Self { lo, hi }
    }

    /// Normalized bounds with `x` as longitude and `y` as latitude.
    pub fn bounds(&self) -> Rect<i32> {
        Rect::new(self.lo, self.hi)
    }

    /// Corner with the smallest latitude and longitude.
    pub fn south_west(&self) -> Point {
        self.bounds().min().into()
    }

    /// Corner with the largest latitude and longitude.
    pub fn north_east(&self) -> Point {
        self.bounds().max().into()
    }

    /// Check whether `point` lies inside the closed box, edges included.
    pub fn contains(&self, point: &Point) -> bool {
        let bounds = self.bounds();
        let (min, max) = (bounds.min(), bounds.max());

        point.longitude >= min.x
            && point.longitude <= max.x
            && point.latitude >= min.y
            && point.latitude <= max.y
    }
}

impl std::fmt::Display for Rectangle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] - [{}]", self.south_west(), self.north_east())
    }
}
