use nalgebra::RealField;

use super::geometry::GeometryType;
use super::point::QuadratureRule;
use super::table::RuleTable;
use crate::error::Result;

/// A reference geometry in dimension `D` backed by a compiled-in rule table.
pub trait RuleFamily<const D: usize> {
    const GEOMETRY: GeometryType;

    /// The highest catalogued degree, known without touching the table.
    const HIGHEST_ORDER: i32;

    fn table() -> &'static RuleTable<D>;

    fn rule<T: RealField + Copy>(order: i32) -> Result<QuadratureRule<T, D>> {
        Self::table().select(order)
    }

    fn supports(order: i32) -> bool {
        Self::table().lookup(order).is_some()
    }
}

/// Rules on the reference simplex in `D` dimensions.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplexRules<const D: usize>;

/// Rules on the reference cube [0, 1]^D.
#[derive(Debug, Clone, Copy, Default)]
pub struct CubeRules<const D: usize>;

pub type LineRules = CubeRules<1>;
pub type TriangleRules = SimplexRules<2>;
pub type QuadrilateralRules = CubeRules<2>;
pub type TetrahedronRules = SimplexRules<3>;
pub type HexahedronRules = CubeRules<3>;
