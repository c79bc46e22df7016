pub mod data;
pub mod factory;
pub mod family;
pub mod geometry;
pub mod point;
mod selector;
pub mod table;
mod tables;
pub mod verify;

pub use data::{RuleSource, TableSource};
pub use factory::QuadratureRuleFactory;
pub use family::{
    CubeRules, HexahedronRules, LineRules, QuadrilateralRules, RuleFamily, SimplexRules,
    TetrahedronRules, TriangleRules,
};
pub use geometry::{BasicType, GeometryType};
pub use point::{QuadraturePoint, QuadratureRule};
pub use table::{PointData, Rule, RuleData, RuleTable};

#[cfg(test)]
mod tests;
