//! Checks of the numerical invariants a rule must satisfy: weights summing to
//! the reference volume, points inside the reference element, and exact
//! integration of every monomial up to the delivered order.

use approx::abs_diff_eq;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::geometry::{BasicType, GeometryType};
use super::point::QuadratureRule;
use super::table::RuleTable;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifyConfig {
    /// Absolute tolerance on weight sums and monomial integrals.
    pub tolerance: f64,
    /// How far outside the reference element a point may lie.
    pub containment_tolerance: f64,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-12,
            containment_tolerance: 1e-14,
        }
    }
}

impl VerifyConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExactnessReport {
    pub geometry: GeometryType,
    pub delivered_order: i32,
    pub weight_sum_error: f64,
    pub max_moment_error: f64,
    /// Largest k such that every monomial of degree 0..=k is integrated exactly.
    pub exact_to: Option<i32>,
    /// Indices of points outside the reference element.
    pub outside_points: Vec<usize>,
    tolerance: f64,
}

impl ExactnessReport {
    pub fn is_valid(&self) -> bool {
        self.weight_sum_error <= self.tolerance
            && self.outside_points.is_empty()
            && self.exact_to.unwrap_or(-1) >= self.delivered_order
    }
}

/// Checks one selected rule against its claimed order.
pub fn verify_rule<const D: usize>(
    rule: &QuadratureRule<f64, D>,
    config: &VerifyConfig,
) -> ExactnessReport {
    let geometry = rule.geometry_type();
    let weight_sum_error = (rule.weight_sum() - geometry.reference_volume()).abs();

    let outside_points = rule
        .iter()
        .enumerate()
        .filter(|(_, q)| {
            !geometry.contains(q.position.coords.as_slice(), config.containment_tolerance)
        })
        .map(|(i, _)| i)
        .collect();

    let mut max_moment_error = 0.0_f64;
    let mut exact_to = None;
    let mut exact_so_far = true;
    for degree in 0..=rule.order() {
        let error = monomials::<D>(degree as u32)
            .into_par_iter()
            .map(|exponents| {
                let approx = rule.integrate(|x| {
                    exponents
                        .iter()
                        .zip(x.coords.iter())
                        .map(|(&e, &xi)| xi.powi(e as i32))
                        .product()
                });
                (approx - monomial_integral(geometry, &exponents)).abs()
            })
            .reduce(|| 0.0, f64::max);

        max_moment_error = max_moment_error.max(error);
        exact_so_far &= abs_diff_eq!(error, 0.0, epsilon = config.tolerance);
        if exact_so_far {
            exact_to = Some(degree);
        }
    }

    log::debug!(
        "{geometry} rule of order {}: weight error {weight_sum_error:e}, moment error {max_moment_error:e}",
        rule.order()
    );

    ExactnessReport {
        geometry,
        delivered_order: rule.order(),
        weight_sum_error,
        max_moment_error,
        exact_to,
        outside_points,
        tolerance: config.tolerance,
    }
}

/// Checks every catalogued degree of a table in parallel, in ascending degree order.
pub fn verify_table<const D: usize>(
    table: &RuleTable<D>,
    config: &VerifyConfig,
) -> Result<Vec<(i32, ExactnessReport)>> {
    let degrees: Vec<i32> = table.degrees().collect();
    degrees
        .into_par_iter()
        .map(|degree| -> Result<(i32, ExactnessReport)> {
            let rule = table.select::<f64>(degree)?;
            Ok((degree, verify_rule(&rule, config)))
        })
        .collect()
}

/// Exact integral of x^a over the reference element.
///
/// Cube: prod 1/(a_i + 1). Simplex: prod a_i! / (|a| + D)!.
pub fn monomial_integral(geometry: GeometryType, exponents: &[u32]) -> f64 {
    match geometry.basic_type() {
        BasicType::Cube => exponents.iter().map(|&a| 1.0 / (a as f64 + 1.0)).product(),
        BasicType::Simplex => {
            let numerator: f64 = exponents.iter().map(|&a| factorial(a)).product();
            let total = exponents.iter().sum::<u32>() + exponents.len() as u32;
            numerator / factorial(total)
        }
    }
}

fn factorial(n: u32) -> f64 {
    (1..=n).map(f64::from).product()
}

/// All exponent tuples of total degree `degree`.
fn monomials<const D: usize>(degree: u32) -> Vec<[u32; D]> {
    let mut out = Vec::new();
    if D == 0 {
        if degree == 0 {
            out.push([0; D]);
        }
        return out;
    }
    let mut exponents = [0; D];
    fill_monomials(&mut out, &mut exponents, 0, degree);
    out
}

fn fill_monomials<const D: usize>(
    out: &mut Vec<[u32; D]>,
    exponents: &mut [u32; D],
    axis: usize,
    remaining: u32,
) {
    if axis + 1 == D {
        exponents[axis] = remaining;
        out.push(*exponents);
        return;
    }
    for e in 0..=remaining {
        exponents[axis] = e;
        fill_monomials(out, exponents, axis + 1, remaining - e);
    }
}
