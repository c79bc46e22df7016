use std::borrow::Cow;
use std::collections::BTreeMap;

use super::geometry::GeometryType;
use crate::error::{QuadratureError, Result};

/// Coordinates and weight of one point, in f64 as stored in the tables.
pub type PointData<const D: usize> = ([f64; D], f64);

/// One compiled-in catalogue entry. All fields borrow static data so tables
/// can be written as plain constants.
#[derive(Debug, Clone, Copy)]
pub struct RuleData<const D: usize> {
    pub degree: i32,
    pub delivered_order: i32,
    pub properties: &'static str,
    pub reference: &'static str,
    pub points: &'static [PointData<D>],
}

/// Largest degree in a compiled-in table, `i32::MIN` if it is empty.
pub const fn highest_degree<const D: usize>(data: &[RuleData<D>]) -> i32 {
    let mut highest = i32::MIN;
    let mut i = 0;
    while i < data.len() {
        if data[i].degree > highest {
            highest = data[i].degree;
        }
        i += 1;
    }
    highest
}

/// A catalogued rule for one degree of one reference geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule<const D: usize> {
    degree: i32,
    delivered_order: i32,
    properties: Cow<'static, str>,
    reference: Cow<'static, str>,
    points: Cow<'static, [PointData<D>]>,
}

impl<const D: usize> Rule<D> {
    /// Rejects rules without points and rules that deliver less than their degree.
    pub fn new(
        degree: i32,
        delivered_order: i32,
        properties: impl Into<Cow<'static, str>>,
        reference: impl Into<Cow<'static, str>>,
        points: impl Into<Cow<'static, [PointData<D>]>>,
    ) -> Result<Self> {
        let points = points.into();
        if points.is_empty() {
            return Err(QuadratureError::EmptyRule { degree });
        }
        if delivered_order < degree {
            return Err(QuadratureError::DeliveredBelowDegree {
                degree,
                delivered_order,
            });
        }
        Ok(Self {
            degree,
            delivered_order,
            properties: properties.into(),
            reference: reference.into(),
            points,
        })
    }

    pub fn degree(&self) -> i32 {
        self.degree
    }

    pub fn delivered_order(&self) -> i32 {
        self.delivered_order
    }

    pub fn properties(&self) -> &str {
        &self.properties
    }

    /// Literature source, empty if unknown.
    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn points(&self) -> &[PointData<D>] {
        &self.points
    }

    pub fn weight_sum(&self) -> f64 {
        self.points.iter().map(|(_, w)| w).sum()
    }
}

impl<const D: usize> TryFrom<&RuleData<D>> for Rule<D> {
    type Error = QuadratureError;

    fn try_from(data: &RuleData<D>) -> Result<Self> {
        Rule::new(
            data.degree,
            data.delivered_order,
            data.properties,
            data.reference,
            data.points,
        )
    }
}

/// Immutable, degree-indexed catalogue of rules for one reference geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleTable<const D: usize> {
    geometry: GeometryType,
    rules: BTreeMap<i32, Rule<D>>,
}

impl<const D: usize> RuleTable<D> {
    pub fn new(geometry: GeometryType, rules: impl IntoIterator<Item = Rule<D>>) -> Result<Self> {
        if geometry.dim() != D {
            return Err(QuadratureError::DimensionMismatch { geometry, dim: D });
        }
        let mut table = BTreeMap::new();
        for rule in rules {
            let degree = rule.degree();
            if table.insert(degree, rule).is_some() {
                return Err(QuadratureError::DuplicateDegree { degree, geometry });
            }
        }
        Ok(Self {
            geometry,
            rules: table,
        })
    }

    /// Builds a table from compiled-in data without copying the point lists.
    ///
    /// Malformed entries are dropped with a warning; they never become lookup hits.
    pub fn from_data(geometry: GeometryType, data: &'static [RuleData<D>]) -> Self {
        debug_assert_eq!(geometry.dim(), D);
        let mut rules = BTreeMap::new();
        for entry in data {
            match Rule::try_from(entry) {
                Ok(rule) if rules.contains_key(&entry.degree) => {
                    log::warn!(
                        "dropping duplicate {geometry} rule for degree {} ({} points)",
                        entry.degree,
                        rule.points().len()
                    );
                }
                Ok(rule) => {
                    rules.insert(entry.degree, rule);
                }
                Err(err) => log::warn!("dropping {geometry} rule: {err}"),
            }
        }
        Self { geometry, rules }
    }

    pub fn geometry_type(&self) -> GeometryType {
        self.geometry
    }

    /// Exact-key lookup; never falls back to a neighbouring degree.
    pub fn lookup(&self, degree: i32) -> Option<&Rule<D>> {
        self.rules.get(&degree)
    }

    pub fn highest_order(&self) -> Option<i32> {
        self.rules.keys().next_back().copied()
    }

    pub fn degrees(&self) -> impl Iterator<Item = i32> + '_ {
        self.rules.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule<D>> + '_ {
        self.rules.values()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
