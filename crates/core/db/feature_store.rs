//! Read-only store of named features.
//!
//! The store is built once at startup and never mutated afterwards, so it is
//! shared across calls behind an `Arc` without any locking.

use routeguide_types::{Feature, Point, Rectangle};

/// Ordered, immutable collection of features.
///
/// Lookups are linear scans in load order. Callers rely on that order for
/// listings and on "first match wins" for point lookups.
#[derive(Debug, Clone, Default)]
pub struct FeatureStore {
    features: Vec<Feature>,
}

impl FeatureStore {
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }

    /// Find the feature at exactly `point`.
    ///
    /// Returns an unnamed feature located at `point` when nothing matches.
    /// That answer is a normal result and never an error.
    pub fn find_by_point(&self, point: &Point) -> Feature {
        self.features
            .iter()
            .find(|f| f.location == *point)
            .cloned()
            .unwrap_or_else(|| Feature::unnamed(*point))
    }

    /// Whether `point` is the location of a named feature.
    ///
    /// Unnamed records in the store never count, which matches treating an
    /// empty-name lookup result as "no feature".
    pub fn is_feature(&self, point: &Point) -> bool {
        self.find_by_point(point).is_named()
    }

    /// Features inside the closed box spanned by `rect`, in store order.
    ///
    /// The corners of `rect` may come in any order.
    pub fn find_in_rectangle(&self, rect: Rectangle) -> impl Iterator<Item = &Feature> {
        self.features
            .iter()
            .filter(move |f| rect.contains(&f.location))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Feature> {
        self.features.iter()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl FromIterator<Feature> for FeatureStore {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a FeatureStore {
    type Item = &'a Feature;
    type IntoIter = std::slice::Iter<'a, Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
