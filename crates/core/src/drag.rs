//! Drag-coefficient providers.
//!
//! Physics code only needs a coefficient for a season; where it comes from (a
//! fixed value, a table loaded from disk, the remote dashboard) is left to the
//! implementor of [`DragCoefficientSource`].

use std::collections::BTreeMap;

/// Anything able to answer "what was the drag coefficient in `year`?".
pub trait DragCoefficientSource {
    fn drag_coefficient(&self, year: i32) -> Option<f64>;
}

/// A single coefficient used for every season.
impl DragCoefficientSource for f64 {
    fn drag_coefficient(&self, _year: i32) -> Option<f64> {
        Some(*self)
    }
}

/// Per-season drag coefficients keyed by year.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragTable {
    by_year: BTreeMap<i32, f64>,
}

impl DragTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, year: i32, drag_coefficient: f64) -> Option<f64> {
        self.by_year.insert(year, drag_coefficient)
    }

    pub fn len(&self) -> usize {
        self.by_year.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_year.is_empty()
    }

    /// Seasons in ascending order with their coefficients.
    pub fn iter(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.by_year.iter().map(|(year, cd)| (*year, *cd))
    }

    /// Most recent season on record.
    pub fn latest(&self) -> Option<(i32, f64)> {
        self.by_year.iter().next_back().map(|(year, cd)| (*year, *cd))
    }
}

impl FromIterator<(i32, f64)> for DragTable {
    fn from_iter<I: IntoIterator<Item = (i32, f64)>>(iter: I) -> Self {
        Self {
            by_year: iter.into_iter().collect(),
        }
    }
}

impl DragCoefficientSource for DragTable {
    fn drag_coefficient(&self, year: i32) -> Option<f64> {
        self.by_year.get(&year).copied()
    }
}

impl<T: DragCoefficientSource + ?Sized> DragCoefficientSource for &T {
    fn drag_coefficient(&self, year: i32) -> Option<f64> {
        (**self).drag_coefficient(year)
    }
}
