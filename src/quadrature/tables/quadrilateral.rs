use std::sync::LazyLock;

use crate::quadrature::family::{CubeRules, RuleFamily};
use crate::quadrature::geometry::GeometryType;
use crate::quadrature::table::{RuleData, RuleTable, highest_degree};

// Tensor products of the Gauss-Legendre rules on [0, 1].

const GAUSS_1X1: &[([f64; 2], f64)] = &[
    ([0.5, 0.5], 1.0),
];

const GAUSS_2X2: &[([f64; 2], f64)] = &[
    ([0.2113248654051871, 0.2113248654051871], 0.25),
    ([0.2113248654051871, 0.7886751345948129], 0.25),
    ([0.7886751345948129, 0.2113248654051871], 0.25),
    ([0.7886751345948129, 0.7886751345948129], 0.25),
];

const GAUSS_3X3: &[([f64; 2], f64)] = &[
    ([0.11270166537925831, 0.11270166537925831], 0.0771604938271605),
    ([0.11270166537925831, 0.5], 0.12345679012345678),
    ([0.11270166537925831, 0.8872983346207417], 0.0771604938271605),
    ([0.5, 0.11270166537925831], 0.12345679012345678),
    ([0.5, 0.5], 0.19753086419753085),
    ([0.5, 0.8872983346207417], 0.12345679012345678),
    ([0.8872983346207417, 0.11270166537925831], 0.0771604938271605),
    ([0.8872983346207417, 0.5], 0.12345679012345678),
    ([0.8872983346207417, 0.8872983346207417], 0.0771604938271605),
];

const GAUSS_4X4: &[([f64; 2], f64)] = &[
    ([0.06943184420297371, 0.06943184420297371], 0.0302507483214005),
    ([0.06943184420297371, 0.33000947820757187], 0.05671296296296296),
    ([0.06943184420297371, 0.6699905217924281], 0.05671296296296296),
    ([0.06943184420297371, 0.9305681557970263], 0.0302507483214005),
    ([0.33000947820757187, 0.06943184420297371], 0.05671296296296296),
    ([0.33000947820757187, 0.33000947820757187], 0.10632332575267356),
    ([0.33000947820757187, 0.6699905217924281], 0.10632332575267356),
    ([0.33000947820757187, 0.9305681557970263], 0.05671296296296296),
    ([0.6699905217924281, 0.06943184420297371], 0.05671296296296296),
    ([0.6699905217924281, 0.33000947820757187], 0.10632332575267356),
    ([0.6699905217924281, 0.6699905217924281], 0.10632332575267356),
    ([0.6699905217924281, 0.9305681557970263], 0.05671296296296296),
    ([0.9305681557970263, 0.06943184420297371], 0.0302507483214005),
    ([0.9305681557970263, 0.33000947820757187], 0.05671296296296296),
    ([0.9305681557970263, 0.6699905217924281], 0.05671296296296296),
    ([0.9305681557970263, 0.9305681557970263], 0.0302507483214005),
];

#[rustfmt::skip]
const DATA: &[RuleData<2>] = &[
    RuleData { degree: 0, delivered_order: 1, properties: "tensor Gauss-Legendre 1x1", reference: "", points: GAUSS_1X1 },
    RuleData { degree: 1, delivered_order: 1, properties: "tensor Gauss-Legendre 1x1", reference: "", points: GAUSS_1X1 },
    RuleData { degree: 2, delivered_order: 3, properties: "tensor Gauss-Legendre 2x2", reference: "", points: GAUSS_2X2 },
    RuleData { degree: 3, delivered_order: 3, properties: "tensor Gauss-Legendre 2x2", reference: "", points: GAUSS_2X2 },
    RuleData { degree: 4, delivered_order: 5, properties: "tensor Gauss-Legendre 3x3", reference: "", points: GAUSS_3X3 },
    RuleData { degree: 5, delivered_order: 5, properties: "tensor Gauss-Legendre 3x3", reference: "", points: GAUSS_3X3 },
    RuleData { degree: 6, delivered_order: 7, properties: "tensor Gauss-Legendre 4x4", reference: "", points: GAUSS_4X4 },
    RuleData { degree: 7, delivered_order: 7, properties: "tensor Gauss-Legendre 4x4", reference: "", points: GAUSS_4X4 },
];

static TABLE: LazyLock<RuleTable<2>> =
    LazyLock::new(|| RuleTable::from_data(GeometryType::quadrilateral(), DATA));

impl RuleFamily<2> for CubeRules<2> {
    const GEOMETRY: GeometryType = GeometryType::quadrilateral();
    const HIGHEST_ORDER: i32 = highest_degree(DATA);

    fn table() -> &'static RuleTable<2> {
        &TABLE
    }
}
