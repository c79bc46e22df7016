use nalgebra::{Point, RealField};

use super::point::{QuadraturePoint, QuadratureRule};
use super::table::RuleTable;
use crate::error::{QuadratureError, Result};

impl<const D: usize> RuleTable<D> {
    /// Materializes the rule catalogued under exactly `order`.
    ///
    /// There is no promotion to a higher degree: a missing key, or a key whose
    /// rule has no points, is an `OrderOutOfRange` error.
    pub fn select<T: RealField + Copy>(&self, order: i32) -> Result<QuadratureRule<T, D>> {
        let geometry = self.geometry_type();
        let rule = match self.lookup(order) {
            Some(rule) if !rule.points().is_empty() => rule,
            _ => {
                log::debug!(
                    "no {geometry} quadrature rule for order {order} (highest is {:?})",
                    self.highest_order()
                );
                return Err(QuadratureError::OrderOutOfRange { order, geometry });
            }
        };

        let points = rule
            .points()
            .iter()
            .map(|(coords, weight)| {
                QuadraturePoint::new(
                    Point::from(coords.map(nalgebra::convert::<f64, T>)),
                    nalgebra::convert(*weight),
                )
            })
            .collect();

        log::trace!(
            "selected {geometry} rule: order {order}, delivered {}, {} points",
            rule.delivered_order(),
            rule.points().len()
        );
        Ok(QuadratureRule::from_points(
            geometry,
            rule.delivered_order(),
            points,
        ))
    }
}
