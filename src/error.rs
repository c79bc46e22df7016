//! Error types for quadrature rule construction and lookup.

use thiserror::Error;

use crate::quadrature::GeometryType;

/// Errors that can occur while building rule tables or selecting a rule.
#[derive(Debug, Error)]
pub enum QuadratureError {
    /// No catalogued rule for the requested order.
    #[error("QuadratureRule for order {order} and GeometryType {geometry} not available")]
    OrderOutOfRange {
        /// The order that was asked for
        order: i32,
        /// Reference geometry of the table that was searched
        geometry: GeometryType,
    },

    /// A rule was given no points.
    #[error("quadrature rule for degree {degree} has no points")]
    EmptyRule {
        /// Catalogue key of the rejected rule
        degree: i32,
    },

    /// A rule claims to be exact for less than its catalogue degree.
    #[error("quadrature rule for degree {degree} only delivers order {delivered_order}")]
    DeliveredBelowDegree {
        /// Catalogue key of the rejected rule
        degree: i32,
        /// Order the rule claims to integrate exactly
        delivered_order: i32,
    },

    /// Two rules share a catalogue key.
    #[error("duplicate {geometry} quadrature rule for degree {degree}")]
    DuplicateDegree {
        /// The repeated key
        degree: i32,
        /// Geometry of the table being built
        geometry: GeometryType,
    },

    /// The geometry does not live in the dimension of the table.
    #[error("GeometryType {geometry} does not match dimension {dim}")]
    DimensionMismatch {
        /// The offending geometry
        geometry: GeometryType,
        /// Dimension the caller works in
        dim: usize,
    },

    /// A point in external table data has the wrong number of coordinates.
    #[error("point {index} of the degree {degree} rule has {found} coordinates, expected {expected}")]
    CoordinateCount {
        /// Catalogue key of the rule
        degree: i32,
        /// Index of the point within the rule
        index: usize,
        /// Number of coordinates found
        found: usize,
        /// Dimension of the table
        expected: usize,
    },

    /// External table data lists a different number of weights than points.
    #[error("degree {degree} rule lists {points} points but {weights} weights")]
    WeightCount {
        /// Catalogue key of the rule
        degree: i32,
        /// Number of coordinate tuples
        points: usize,
        /// Number of weights
        weights: usize,
    },

    /// External table data could not be parsed.
    #[error("failed to parse quadrature table: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for quadrature operations.
pub type Result<T> = std::result::Result<T, QuadratureError>;

impl QuadratureError {
    /// Returns `true` if no rule exists for the requested order.
    pub fn is_order_out_of_range(&self) -> bool {
        matches!(self, QuadratureError::OrderOutOfRange { .. })
    }

    /// The order a failed selection asked for.
    pub fn requested_order(&self) -> Option<i32> {
        match self {
            QuadratureError::OrderOutOfRange { order, .. } => Some(*order),
            _ => None,
        }
    }

    /// The reference geometry involved in the failure, if any.
    pub fn geometry_type(&self) -> Option<GeometryType> {
        match self {
            QuadratureError::OrderOutOfRange { geometry, .. }
            | QuadratureError::DuplicateDegree { geometry, .. }
            | QuadratureError::DimensionMismatch { geometry, .. } => Some(*geometry),
            _ => None,
        }
    }

    /// Dimension of the reference geometry involved in the failure, if any.
    pub fn dimension(&self) -> Option<usize> {
        self.geometry_type().map(|geometry| geometry.dim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_out_of_range_display() {
        let err = QuadratureError::OrderOutOfRange {
            order: 2,
            geometry: GeometryType::triangle(),
        };
        assert_eq!(
            err.to_string(),
            "QuadratureRule for order 2 and GeometryType triangle not available"
        );
    }

    #[test]
    fn test_accessors() {
        let err = QuadratureError::OrderOutOfRange {
            order: -1,
            geometry: GeometryType::hexahedron(),
        };
        assert!(err.is_order_out_of_range());
        assert_eq!(err.requested_order(), Some(-1));
        assert_eq!(err.geometry_type(), Some(GeometryType::hexahedron()));
        assert_eq!(err.dimension(), Some(3));

        let empty = QuadratureError::EmptyRule { degree: 4 };
        assert!(!empty.is_order_out_of_range());
        assert_eq!(empty.requested_order(), None);
        assert_eq!(empty.dimension(), None);
    }

    #[test]
    fn test_json_error_converts() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: QuadratureError = parse.into();
        assert!(err.to_string().starts_with("failed to parse quadrature table"));
    }
}
