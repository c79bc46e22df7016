use std::sync::LazyLock;

use crate::quadrature::family::{CubeRules, RuleFamily, SimplexRules};
use crate::quadrature::geometry::GeometryType;
use crate::quadrature::table::{RuleData, RuleTable, highest_degree};

// Gauss-Legendre points mapped to [0, 1]; n points integrate degree 2n - 1.

const GAUSS_1: &[([f64; 1], f64)] = &[
    ([0.5], 1.0),
];

const GAUSS_2: &[([f64; 1], f64)] = &[
    ([0.2113248654051871], 0.5),
    ([0.7886751345948129], 0.5),
];

const GAUSS_3: &[([f64; 1], f64)] = &[
    ([0.11270166537925831], 0.2777777777777778),
    ([0.5], 0.4444444444444444),
    ([0.8872983346207417], 0.2777777777777778),
];

const GAUSS_4: &[([f64; 1], f64)] = &[
    ([0.06943184420297371], 0.17392742256872692),
    ([0.33000947820757187], 0.32607257743127305),
    ([0.6699905217924281], 0.32607257743127305),
    ([0.9305681557970263], 0.17392742256872692),
];

const GAUSS_5: &[([f64; 1], f64)] = &[
    ([0.046910077030668004], 0.11846344252809454),
    ([0.23076534494715845], 0.23931433524968324),
    ([0.5], 0.28444444444444444),
    ([0.7692346550528415], 0.23931433524968324),
    ([0.953089922969332], 0.11846344252809454),
];

const GAUSS: &str = "C. F. Gauss, Methodus nova integralium valores per approximationem inveniendi, 1814";

#[rustfmt::skip]
const DATA: &[RuleData<1>] = &[
    RuleData { degree: 0, delivered_order: 1, properties: "Gauss-Legendre, 1 point", reference: GAUSS, points: GAUSS_1 },
    RuleData { degree: 1, delivered_order: 1, properties: "Gauss-Legendre, 1 point", reference: GAUSS, points: GAUSS_1 },
    RuleData { degree: 2, delivered_order: 3, properties: "Gauss-Legendre, 2 points", reference: GAUSS, points: GAUSS_2 },
    RuleData { degree: 3, delivered_order: 3, properties: "Gauss-Legendre, 2 points", reference: GAUSS, points: GAUSS_2 },
    RuleData { degree: 4, delivered_order: 5, properties: "Gauss-Legendre, 3 points", reference: GAUSS, points: GAUSS_3 },
    RuleData { degree: 5, delivered_order: 5, properties: "Gauss-Legendre, 3 points", reference: GAUSS, points: GAUSS_3 },
    RuleData { degree: 6, delivered_order: 7, properties: "Gauss-Legendre, 4 points", reference: GAUSS, points: GAUSS_4 },
    RuleData { degree: 7, delivered_order: 7, properties: "Gauss-Legendre, 4 points", reference: GAUSS, points: GAUSS_4 },
    RuleData { degree: 8, delivered_order: 9, properties: "Gauss-Legendre, 5 points", reference: GAUSS, points: GAUSS_5 },
    RuleData { degree: 9, delivered_order: 9, properties: "Gauss-Legendre, 5 points", reference: GAUSS, points: GAUSS_5 },
];

static TABLE: LazyLock<RuleTable<1>> =
    LazyLock::new(|| RuleTable::from_data(GeometryType::line(), DATA));

impl RuleFamily<1> for CubeRules<1> {
    const GEOMETRY: GeometryType = GeometryType::line();
    const HIGHEST_ORDER: i32 = highest_degree(DATA);

    fn table() -> &'static RuleTable<1> {
        &TABLE
    }
}

// The 1-simplex is the same segment.
impl RuleFamily<1> for SimplexRules<1> {
    const GEOMETRY: GeometryType = GeometryType::line();
    const HIGHEST_ORDER: i32 = highest_degree(DATA);

    fn table() -> &'static RuleTable<1> {
        &TABLE
    }
}
