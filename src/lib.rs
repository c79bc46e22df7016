//! Precomputed quadrature rules on FEM reference elements.
//!
//! Each reference geometry carries a fixed table of rules keyed by polynomial
//! degree. Selection is exact-match: asking for a degree that has no entry is
//! an error, never a silent upgrade to a costlier rule.
//!
//! ```
//! use shortstack_quadrature::{QuadratureRule, RuleFamily, TriangleRules};
//!
//! let rule: QuadratureRule<f64, 2> = TriangleRules::rule(2)?;
//! let area = rule.integrate(|_| 1.0);
//! assert!((area - 0.5).abs() < 1e-15);
//! # Ok::<(), shortstack_quadrature::QuadratureError>(())
//! ```

pub mod error;
pub mod quadrature;

pub use error::{QuadratureError, Result};
pub use quadrature::{
    BasicType, CubeRules, GeometryType, QuadraturePoint, QuadratureRule, QuadratureRuleFactory,
    Rule, RuleFamily, RuleTable, SimplexRules, TetrahedronRules, TriangleRules,
};
