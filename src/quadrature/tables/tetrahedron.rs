use std::sync::LazyLock;

use crate::quadrature::family::{RuleFamily, SimplexRules};
use crate::quadrature::geometry::GeometryType;
use crate::quadrature::table::{RuleData, RuleTable, highest_degree};

// Reference tetrahedron (0,0,0), (1,0,0), (0,1,0), (0,0,1).
// Coordinates are the last three barycentrics (L2, L3, L4).
// Weights are scaled to the reference volume (1/6).

const CENTROID: &[([f64; 3], f64)] = &[
    ([0.25, 0.25, 0.25], 0.16666666666666666),
];

// Alpha = (5 + 3 sqrt 5) / 20, Beta = (5 - sqrt 5) / 20
// Weights = 1/4 * Vol = 1/24
const FOUR_POINT: &[([f64; 3], f64)] = &[
    ([0.1381966011250105, 0.1381966011250105, 0.1381966011250105], 0.041666666666666664),
    ([0.5854101966249684, 0.1381966011250105, 0.1381966011250105], 0.041666666666666664),
    ([0.1381966011250105, 0.5854101966249684, 0.1381966011250105], 0.041666666666666664),
    ([0.1381966011250105, 0.1381966011250105, 0.5854101966249684], 0.041666666666666664),
];

// Centroid weight -4/5 * Vol = -2/15.
// (1/2, 1/6, 1/6, 1/6) permutations, weight 9/20 * Vol = 3/40.
const FIVE_POINT: &[([f64; 3], f64)] = &[
    ([0.25, 0.25, 0.25], -0.13333333333333333),
    ([0.16666666666666666, 0.16666666666666666, 0.16666666666666666], 0.075),
    ([0.5, 0.16666666666666666, 0.16666666666666666], 0.075),
    ([0.16666666666666666, 0.5, 0.16666666666666666], 0.075),
    ([0.16666666666666666, 0.16666666666666666, 0.5], 0.075),
];

// Two (a, a, a, 1 - 3a) orbits and one (b, b, 1/2 - b, 1/2 - b) orbit.
const FOURTEEN_POINT: &[([f64; 3], f64)] = &[
    ([0.09273525031089122, 0.09273525031089122, 0.09273525031089122], 0.012248840519393659),
    ([0.7217942490673264, 0.09273525031089122, 0.09273525031089122], 0.012248840519393659),
    ([0.09273525031089122, 0.7217942490673264, 0.09273525031089122], 0.012248840519393659),
    ([0.09273525031089122, 0.09273525031089122, 0.7217942490673264], 0.012248840519393659),
    ([0.3108859192633006, 0.3108859192633006, 0.3108859192633006], 0.018781320953002643),
    ([0.06734224221009817, 0.3108859192633006, 0.3108859192633006], 0.018781320953002643),
    ([0.3108859192633006, 0.06734224221009817, 0.3108859192633006], 0.018781320953002643),
    ([0.3108859192633006, 0.3108859192633006, 0.06734224221009817], 0.018781320953002643),
    ([0.45449629587435036, 0.04550370412564965, 0.04550370412564965], 0.007091003462846911),
    ([0.04550370412564965, 0.45449629587435036, 0.04550370412564965], 0.007091003462846911),
    ([0.04550370412564965, 0.04550370412564965, 0.45449629587435036], 0.007091003462846911),
    ([0.45449629587435036, 0.45449629587435036, 0.04550370412564965], 0.007091003462846911),
    ([0.45449629587435036, 0.04550370412564965, 0.45449629587435036], 0.007091003462846911),
    ([0.04550370412564965, 0.45449629587435036, 0.45449629587435036], 0.007091003462846911),
];

const KEAST: &str = "P. Keast, Moderate-degree tetrahedral quadrature formulas, Comput. Methods Appl. Mech. Eng. 55 (1986) 339-348";

// Degree 4 has no entry. Requests for it fail rather than silently using the
// 14-point rule.
#[rustfmt::skip]
const DATA: &[RuleData<3>] = &[
    RuleData { degree: 0, delivered_order: 1, properties: "centroid", reference: "", points: CENTROID },
    RuleData { degree: 1, delivered_order: 1, properties: "centroid", reference: "", points: CENTROID },
    RuleData { degree: 2, delivered_order: 2, properties: "fully symmetric, interior, positive", reference: KEAST, points: FOUR_POINT },
    RuleData { degree: 3, delivered_order: 3, properties: "fully symmetric, interior, negative weight", reference: KEAST, points: FIVE_POINT },
    RuleData { degree: 5, delivered_order: 5, properties: "fully symmetric, interior, positive", reference: "", points: FOURTEEN_POINT },
];

static TABLE: LazyLock<RuleTable<3>> =
    LazyLock::new(|| RuleTable::from_data(GeometryType::tetrahedron(), DATA));

impl RuleFamily<3> for SimplexRules<3> {
    const GEOMETRY: GeometryType = GeometryType::tetrahedron();
    const HIGHEST_ORDER: i32 = highest_degree(DATA);

    fn table() -> &'static RuleTable<3> {
        &TABLE
    }
}
