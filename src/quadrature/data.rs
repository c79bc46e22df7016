//! Rule tables from external JSON data.
//!
//! The format is the one the table generator consumes:
//!
//! ```json
//! { "basic_type": "simplex", "dim": 2,
//!   "rules": [ { "degree": 1, "properties": "centroid", "reference": "",
//!                "coordinates": [[0.3333333333333333, 0.3333333333333333]],
//!                "weights": [0.5] } ] }
//! ```

use serde::{Deserialize, Serialize};

use super::geometry::{BasicType, GeometryType};
use super::table::{PointData, Rule, RuleTable};
use crate::error::{QuadratureError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSource {
    pub basic_type: BasicType,
    pub dim: usize,
    pub rules: Vec<RuleSource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSource {
    pub degree: i32,
    /// Defaults to `degree` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivered_order: Option<i32>,
    #[serde(default)]
    pub properties: String,
    #[serde(default)]
    pub reference: String,
    pub coordinates: Vec<Vec<f64>>,
    pub weights: Vec<f64>,
}

impl TableSource {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn geometry_type(&self) -> GeometryType {
        GeometryType::new(self.basic_type, self.dim)
    }

    /// Validates the data and builds a table. Rules without coordinates are
    /// skipped, as the generator does.
    pub fn into_table<const D: usize>(self) -> Result<RuleTable<D>> {
        let geometry = self.geometry_type();
        if geometry.dim() != D {
            return Err(QuadratureError::DimensionMismatch { geometry, dim: D });
        }

        let mut rules = Vec::with_capacity(self.rules.len());
        for source in self.rules {
            if source.coordinates.is_empty() {
                log::warn!("skipping {geometry} rule for degree {}: no coordinates", source.degree);
                continue;
            }
            rules.push(source.into_rule::<D>()?);
        }
        RuleTable::new(geometry, rules)
    }
}

impl RuleSource {
    fn into_rule<const D: usize>(self) -> Result<Rule<D>> {
        let degree = self.degree;
        if self.coordinates.len() != self.weights.len() {
            return Err(QuadratureError::WeightCount {
                degree,
                points: self.coordinates.len(),
                weights: self.weights.len(),
            });
        }

        let points = self
            .coordinates
            .into_iter()
            .zip(self.weights)
            .enumerate()
            .map(|(index, (coords, weight))| -> Result<PointData<D>> {
                let found = coords.len();
                let coords: [f64; D] =
                    coords
                        .try_into()
                        .map_err(|_| QuadratureError::CoordinateCount {
                            degree,
                            index,
                            found,
                            expected: D,
                        })?;
                Ok((coords, weight))
            })
            .collect::<Result<Vec<_>>>()?;

        Rule::new(
            degree,
            self.delivered_order.unwrap_or(degree),
            self.properties,
            self.reference,
            points,
        )
    }
}

impl<const D: usize> RuleTable<D> {
    pub fn from_json(json: &str) -> Result<Self> {
        TableSource::from_json(json)?.into_table()
    }

    /// Exports the table in the generator's format.
    pub fn to_source(&self) -> TableSource {
        let geometry = self.geometry_type();
        TableSource {
            basic_type: geometry.basic_type(),
            dim: geometry.dim(),
            rules: self
                .iter()
                .map(|rule| RuleSource {
                    degree: rule.degree(),
                    delivered_order: Some(rule.delivered_order()),
                    properties: rule.properties().to_owned(),
                    reference: rule.reference().to_owned(),
                    coordinates: rule.points().iter().map(|(c, _)| c.to_vec()).collect(),
                    weights: rule.points().iter().map(|(_, w)| *w).collect(),
                })
                .collect(),
        }
    }
}
