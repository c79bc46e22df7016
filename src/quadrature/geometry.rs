use serde::{Deserialize, Serialize};
use std::fmt;

/// Topological family of a reference element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BasicType {
    Simplex,
    Cube,
}

/// Reference geometry tag: a basic type in a given dimension.
///
/// Reference domains:
/// - simplex: x_i >= 0, sum(x_i) <= 1
/// - cube: [0, 1]^dim
///
/// Points and lines are both simplices and cubes. They are stored as cubes,
/// so `GeometryType::simplex(1) == GeometryType::line()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeometryType {
    basic_type: BasicType,
    dim: usize,
}

impl GeometryType {
    pub const fn new(basic_type: BasicType, dim: usize) -> Self {
        let basic_type = if dim <= 1 { BasicType::Cube } else { basic_type };
        Self { basic_type, dim }
    }

    pub const fn simplex(dim: usize) -> Self {
        Self::new(BasicType::Simplex, dim)
    }

    pub const fn cube(dim: usize) -> Self {
        Self::new(BasicType::Cube, dim)
    }

    pub const fn line() -> Self {
        Self::cube(1)
    }

    pub const fn triangle() -> Self {
        Self::simplex(2)
    }

    pub const fn quadrilateral() -> Self {
        Self::cube(2)
    }

    pub const fn tetrahedron() -> Self {
        Self::simplex(3)
    }

    pub const fn hexahedron() -> Self {
        Self::cube(3)
    }

    pub const fn basic_type(&self) -> BasicType {
        self.basic_type
    }

    pub const fn dim(&self) -> usize {
        self.dim
    }

    pub const fn is_simplex(&self) -> bool {
        self.dim <= 1 || matches!(self.basic_type, BasicType::Simplex)
    }

    pub const fn is_cube(&self) -> bool {
        matches!(self.basic_type, BasicType::Cube)
    }

    /// Volume of the reference element: 1/dim! for simplices, 1 for cubes.
    pub fn reference_volume(&self) -> f64 {
        match self.basic_type {
            BasicType::Cube => 1.0,
            BasicType::Simplex => 1.0 / (1..=self.dim).map(|k| k as f64).product::<f64>(),
        }
    }

    /// Whether `coords` lies in the closure of the reference element, up to `tolerance`.
    pub fn contains(&self, coords: &[f64], tolerance: f64) -> bool {
        if coords.len() != self.dim || coords.iter().any(|&x| x < -tolerance) {
            return false;
        }
        match self.basic_type {
            BasicType::Cube => coords.iter().all(|&x| x <= 1.0 + tolerance),
            BasicType::Simplex => coords.iter().sum::<f64>() <= 1.0 + tolerance,
        }
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.basic_type, self.dim) {
            (_, 0) => write!(f, "point"),
            (_, 1) => write!(f, "line"),
            (BasicType::Simplex, 2) => write!(f, "triangle"),
            (BasicType::Cube, 2) => write!(f, "quadrilateral"),
            (BasicType::Simplex, 3) => write!(f, "tetrahedron"),
            (BasicType::Cube, 3) => write!(f, "hexahedron"),
            (BasicType::Simplex, dim) => write!(f, "(simplex, {dim})"),
            (BasicType::Cube, dim) => write!(f, "(cube, {dim})"),
        }
    }
}
