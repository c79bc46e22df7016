use nalgebra::RealField;

use super::family::{CubeRules, RuleFamily, SimplexRules};
use super::geometry::{BasicType, GeometryType};
use super::point::QuadratureRule;
use super::table::RuleTable;
use crate::error::{QuadratureError, Result};

/// Dispatches a runtime geometry tag to the compiled-in family for dimension `D`.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuadratureRuleFactory<const D: usize>;

macro_rules! impl_factory {
    ($($dim:literal),*) => {$(
        impl QuadratureRuleFactory<$dim> {
            pub fn table(geometry: GeometryType) -> Result<&'static RuleTable<$dim>> {
                if geometry.dim() != $dim {
                    return Err(QuadratureError::DimensionMismatch { geometry, dim: $dim });
                }
                Ok(match geometry.basic_type() {
                    BasicType::Simplex => SimplexRules::<$dim>::table(),
                    BasicType::Cube => CubeRules::<$dim>::table(),
                })
            }

            pub fn highest_order(geometry: GeometryType) -> Result<i32> {
                if geometry.dim() != $dim {
                    return Err(QuadratureError::DimensionMismatch { geometry, dim: $dim });
                }
                Ok(match geometry.basic_type() {
                    BasicType::Simplex => SimplexRules::<$dim>::HIGHEST_ORDER,
                    BasicType::Cube => CubeRules::<$dim>::HIGHEST_ORDER,
                })
            }

            pub fn rule<T: RealField + Copy>(
                geometry: GeometryType,
                order: i32,
            ) -> Result<QuadratureRule<T, $dim>> {
                Self::table(geometry)?.select(order)
            }
        }
    )*};
}

impl_factory!(1, 2, 3);
