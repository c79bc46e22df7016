use nalgebra::{Point, RealField};
use std::ops::Index;

use super::geometry::GeometryType;

/// A sample location in reference coordinates together with its weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraturePoint<T: RealField + Copy, const D: usize> {
    pub position: Point<T, D>,
    pub weight: T,
}

impl<T: RealField + Copy, const D: usize> QuadraturePoint<T, D> {
    pub fn new(position: Point<T, D>, weight: T) -> Self {
        Self { position, weight }
    }
}

/// A selected quadrature rule: points and weights on one reference geometry.
///
/// Built only through the selection path (`RuleTable::select`, `RuleFamily::rule`
/// or `QuadratureRuleFactory`), which guarantees at least one point.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadratureRule<T: RealField + Copy, const D: usize> {
    geometry: GeometryType,
    delivered_order: i32,
    points: Vec<QuadraturePoint<T, D>>,
}

impl<T: RealField + Copy, const D: usize> QuadratureRule<T, D> {
    pub(crate) fn from_points(
        geometry: GeometryType,
        delivered_order: i32,
        points: Vec<QuadraturePoint<T, D>>,
    ) -> Self {
        debug_assert!(!points.is_empty());
        Self {
            geometry,
            delivered_order,
            points,
        }
    }

    /// Highest polynomial degree this rule integrates exactly.
    pub fn order(&self) -> i32 {
        self.delivered_order
    }

    pub fn geometry_type(&self) -> GeometryType {
        self.geometry
    }

    pub fn dimension(&self) -> usize {
        D
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[QuadraturePoint<T, D>] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QuadraturePoint<T, D>> {
        self.points.iter()
    }

    pub fn weight_sum(&self) -> T {
        self.points.iter().fold(T::zero(), |acc, q| acc + q.weight)
    }

    /// Weighted sum of `f` over the quadrature points.
    pub fn integrate<F>(&self, f: F) -> T
    where
        F: Fn(&Point<T, D>) -> T,
    {
        self.points
            .iter()
            .fold(T::zero(), |acc, q| acc + q.weight * f(&q.position))
    }
}

impl<T: RealField + Copy, const D: usize> Index<usize> for QuadratureRule<T, D> {
    type Output = QuadraturePoint<T, D>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl<'a, T: RealField + Copy, const D: usize> IntoIterator for &'a QuadratureRule<T, D> {
    type Item = &'a QuadraturePoint<T, D>;
    type IntoIter = std::slice::Iter<'a, QuadraturePoint<T, D>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
