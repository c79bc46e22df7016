use std::sync::LazyLock;

use crate::quadrature::family::{CubeRules, RuleFamily};
use crate::quadrature::geometry::GeometryType;
use crate::quadrature::table::{RuleData, RuleTable, highest_degree};

const GAUSS_1X1X1: &[([f64; 3], f64)] = &[
    ([0.5, 0.5, 0.5], 1.0),
];

const GAUSS_2X2X2: &[([f64; 3], f64)] = &[
    ([0.2113248654051871, 0.2113248654051871, 0.2113248654051871], 0.125),
    ([0.2113248654051871, 0.2113248654051871, 0.7886751345948129], 0.125),
    ([0.2113248654051871, 0.7886751345948129, 0.2113248654051871], 0.125),
    ([0.2113248654051871, 0.7886751345948129, 0.7886751345948129], 0.125),
    ([0.7886751345948129, 0.2113248654051871, 0.2113248654051871], 0.125),
    ([0.7886751345948129, 0.2113248654051871, 0.7886751345948129], 0.125),
    ([0.7886751345948129, 0.7886751345948129, 0.2113248654051871], 0.125),
    ([0.7886751345948129, 0.7886751345948129, 0.7886751345948129], 0.125),
];

const GAUSS_3X3X3: &[([f64; 3], f64)] = &[
    ([0.11270166537925831, 0.11270166537925831, 0.11270166537925831], 0.021433470507544586),
    ([0.11270166537925831, 0.11270166537925831, 0.5], 0.03429355281207133),
    ([0.11270166537925831, 0.11270166537925831, 0.8872983346207417], 0.021433470507544586),
    ([0.11270166537925831, 0.5, 0.11270166537925831], 0.03429355281207133),
    ([0.11270166537925831, 0.5, 0.5], 0.05486968449931412),
    ([0.11270166537925831, 0.5, 0.8872983346207417], 0.03429355281207133),
    ([0.11270166537925831, 0.8872983346207417, 0.11270166537925831], 0.021433470507544586),
    ([0.11270166537925831, 0.8872983346207417, 0.5], 0.03429355281207133),
    ([0.11270166537925831, 0.8872983346207417, 0.8872983346207417], 0.021433470507544586),
    ([0.5, 0.11270166537925831, 0.11270166537925831], 0.03429355281207133),
    ([0.5, 0.11270166537925831, 0.5], 0.05486968449931412),
    ([0.5, 0.11270166537925831, 0.8872983346207417], 0.03429355281207133),
    ([0.5, 0.5, 0.11270166537925831], 0.05486968449931413),
    ([0.5, 0.5, 0.5], 0.0877914951989026),
    ([0.5, 0.5, 0.8872983346207417], 0.05486968449931413),
    ([0.5, 0.8872983346207417, 0.11270166537925831], 0.03429355281207133),
    ([0.5, 0.8872983346207417, 0.5], 0.05486968449931412),
    ([0.5, 0.8872983346207417, 0.8872983346207417], 0.03429355281207133),
    ([0.8872983346207417, 0.11270166537925831, 0.11270166537925831], 0.021433470507544586),
    ([0.8872983346207417, 0.11270166537925831, 0.5], 0.03429355281207133),
    ([0.8872983346207417, 0.11270166537925831, 0.8872983346207417], 0.021433470507544586),
    ([0.8872983346207417, 0.5, 0.11270166537925831], 0.03429355281207133),
    ([0.8872983346207417, 0.5, 0.5], 0.05486968449931412),
    ([0.8872983346207417, 0.5, 0.8872983346207417], 0.03429355281207133),
    ([0.8872983346207417, 0.8872983346207417, 0.11270166537925831], 0.021433470507544586),
    ([0.8872983346207417, 0.8872983346207417, 0.5], 0.03429355281207133),
    ([0.8872983346207417, 0.8872983346207417, 0.8872983346207417], 0.021433470507544586),
];

#[rustfmt::skip]
const DATA: &[RuleData<3>] = &[
    RuleData { degree: 0, delivered_order: 1, properties: "tensor Gauss-Legendre 1x1x1", reference: "", points: GAUSS_1X1X1 },
    RuleData { degree: 1, delivered_order: 1, properties: "tensor Gauss-Legendre 1x1x1", reference: "", points: GAUSS_1X1X1 },
    RuleData { degree: 2, delivered_order: 3, properties: "tensor Gauss-Legendre 2x2x2", reference: "", points: GAUSS_2X2X2 },
    RuleData { degree: 3, delivered_order: 3, properties: "tensor Gauss-Legendre 2x2x2", reference: "", points: GAUSS_2X2X2 },
    RuleData { degree: 4, delivered_order: 5, properties: "tensor Gauss-Legendre 3x3x3", reference: "", points: GAUSS_3X3X3 },
    RuleData { degree: 5, delivered_order: 5, properties: "tensor Gauss-Legendre 3x3x3", reference: "", points: GAUSS_3X3X3 },
];

static TABLE: LazyLock<RuleTable<3>> =
    LazyLock::new(|| RuleTable::from_data(GeometryType::hexahedron(), DATA));

impl RuleFamily<3> for CubeRules<3> {
    const GEOMETRY: GeometryType = GeometryType::hexahedron();
    const HIGHEST_ORDER: i32 = highest_degree(DATA);

    fn table() -> &'static RuleTable<3> {
        &TABLE
    }
}
