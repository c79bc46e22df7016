use std::sync::LazyLock;

use crate::quadrature::family::{RuleFamily, SimplexRules};
use crate::quadrature::geometry::GeometryType;
use crate::quadrature::table::{RuleData, RuleTable, highest_degree};

// Reference triangle (0,0), (1,0), (0,1). Weights sum to the area 1/2.

const CENTROID: &[([f64; 2], f64)] = &[
    ([0.3333333333333333, 0.3333333333333333], 0.5),
];

// Interior points (1/6, 1/6) and permutations, weight 1/6 each.
const STRANG_FIX_3: &[([f64; 2], f64)] = &[
    ([0.16666666666666666, 0.16666666666666666], 0.16666666666666666),
    ([0.6666666666666666, 0.16666666666666666], 0.16666666666666666),
    ([0.16666666666666666, 0.6666666666666666], 0.16666666666666666),
];

// Two (a, a, 1 - 2a) orbits.
const DUNAVANT_6: &[([f64; 2], f64)] = &[
    ([0.4459484909159649, 0.4459484909159649], 0.11169079483900574),
    ([0.10810301816807023, 0.4459484909159649], 0.11169079483900574),
    ([0.4459484909159649, 0.10810301816807023], 0.11169079483900574),
    ([0.09157621350977074, 0.09157621350977074], 0.054975871827660935),
    ([0.8168475729804585, 0.09157621350977074], 0.054975871827660935),
    ([0.09157621350977074, 0.8168475729804585], 0.054975871827660935),
];

// Centroid plus orbits at a = (6 -+ sqrt 15) / 21,
// weights 9/80 and (155 -+ sqrt 15) / 2400.
const RADON_7: &[([f64; 2], f64)] = &[
    ([0.3333333333333333, 0.3333333333333333], 0.1125),
    ([0.10128650732345634, 0.10128650732345634], 0.06296959027241357),
    ([0.7974269853530873, 0.10128650732345634], 0.06296959027241357),
    ([0.10128650732345634, 0.7974269853530873], 0.06296959027241357),
    ([0.4701420641051151, 0.4701420641051151], 0.0661970763942531),
    ([0.05971587178976982, 0.4701420641051151], 0.0661970763942531),
    ([0.4701420641051151, 0.05971587178976982], 0.0661970763942531),
];

const DUNAVANT_12: &[([f64; 2], f64)] = &[
    ([0.06308901449150223, 0.06308901449150223], 0.02542245318510341),
    ([0.8738219710169955, 0.06308901449150223], 0.02542245318510341),
    ([0.06308901449150223, 0.8738219710169955], 0.02542245318510341),
    ([0.24928674517091043, 0.24928674517091043], 0.058393137863189684),
    ([0.5014265096581791, 0.24928674517091043], 0.058393137863189684),
    ([0.24928674517091043, 0.5014265096581791], 0.058393137863189684),
    ([0.053145049844816945, 0.3103524510337844], 0.041425537809186785),
    ([0.3103524510337844, 0.053145049844816945], 0.041425537809186785),
    ([0.3103524510337844, 0.6365024991213987], 0.041425537809186785),
    ([0.6365024991213987, 0.3103524510337844], 0.041425537809186785),
    ([0.6365024991213987, 0.053145049844816945], 0.041425537809186785),
    ([0.053145049844816945, 0.6365024991213987], 0.041425537809186785),
];

const STRANG_FIX: &str = "G. Strang, G. Fix, An Analysis of the Finite Element Method, 1973";
const DUNAVANT: &str = "D. A. Dunavant, High degree efficient symmetrical Gaussian quadrature rules for the triangle, Int. J. Numer. Meth. Eng. 21 (1985) 1129-1148";
const RADON: &str = "J. Radon, Zur mechanischen Kubatur, Monatsh. Math. 52 (1948) 286-300";

#[rustfmt::skip]
const DATA: &[RuleData<2>] = &[
    RuleData { degree: 0, delivered_order: 1, properties: "centroid", reference: "", points: CENTROID },
    RuleData { degree: 1, delivered_order: 1, properties: "centroid", reference: "", points: CENTROID },
    RuleData { degree: 2, delivered_order: 2, properties: "fully symmetric, interior, positive", reference: STRANG_FIX, points: STRANG_FIX_3 },
    // No cheaper positive interior rule of degree 3 is catalogued; reuse the degree 4 one.
    RuleData { degree: 3, delivered_order: 4, properties: "fully symmetric, interior, positive", reference: DUNAVANT, points: DUNAVANT_6 },
    RuleData { degree: 4, delivered_order: 4, properties: "fully symmetric, interior, positive", reference: DUNAVANT, points: DUNAVANT_6 },
    RuleData { degree: 5, delivered_order: 5, properties: "fully symmetric, interior, positive", reference: RADON, points: RADON_7 },
    RuleData { degree: 6, delivered_order: 6, properties: "fully symmetric, interior, positive", reference: DUNAVANT, points: DUNAVANT_12 },
];

static TABLE: LazyLock<RuleTable<2>> =
    LazyLock::new(|| RuleTable::from_data(GeometryType::triangle(), DATA));

impl RuleFamily<2> for SimplexRules<2> {
    const GEOMETRY: GeometryType = GeometryType::triangle();
    const HIGHEST_ORDER: i32 = highest_degree(DATA);

    fn table() -> &'static RuleTable<2> {
        &TABLE
    }
}
