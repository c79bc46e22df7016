#[cfg(test)]
mod tests {
    use crate::error::QuadratureError;
    use crate::quadrature::verify::{self, VerifyConfig, monomial_integral};
    use crate::quadrature::{
        CubeRules, GeometryType, QuadratureRule, QuadratureRuleFactory, Rule, RuleData,
        RuleFamily, RuleTable, SimplexRules, TableSource,
    };
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use nalgebra::{Matrix3, Vector3};

    fn check_family<F: RuleFamily<D>, const D: usize>() {
        let table = F::table();
        assert_eq!(table.geometry_type(), F::GEOMETRY);
        assert_eq!(table.highest_order(), Some(F::HIGHEST_ORDER));
        assert!(!table.is_empty());

        let volume = F::GEOMETRY.reference_volume();
        for degree in table.degrees() {
            let entry = table.lookup(degree).unwrap();
            assert!(!entry.points().is_empty());
            assert!(entry.delivered_order() >= degree);

            let rule: QuadratureRule<f64, D> = F::rule(degree).unwrap();
            assert_eq!(rule.order(), entry.delivered_order());
            assert_eq!(rule.geometry_type(), F::GEOMETRY);
            assert_eq!(rule.dimension(), D);
            assert_eq!(rule.len(), entry.points().len());
            assert_relative_eq!(rule.weight_sum(), volume, epsilon = 1e-14);
        }

        // The highest order always resolves, one past it never does.
        assert!(F::rule::<f64>(F::HIGHEST_ORDER).is_ok());
        let err = F::rule::<f64>(F::HIGHEST_ORDER + 1).unwrap_err();
        assert_eq!(err.requested_order(), Some(F::HIGHEST_ORDER + 1));
        assert_eq!(err.geometry_type(), Some(F::GEOMETRY));
    }

    fn check_exactness<F: RuleFamily<D>, const D: usize>() {
        let reports = verify::verify_table(F::table(), &VerifyConfig::default()).unwrap();
        assert_eq!(reports.len(), F::table().len());
        for (degree, report) in reports {
            assert!(
                report.is_valid(),
                "{} degree {degree}: {report:?}",
                F::GEOMETRY
            );
            assert!(report.exact_to.unwrap() >= degree);
        }
    }

    #[test]
    fn test_all_tables_consistent() {
        check_family::<CubeRules<1>, 1>();
        check_family::<SimplexRules<1>, 1>();
        check_family::<SimplexRules<2>, 2>();
        check_family::<CubeRules<2>, 2>();
        check_family::<SimplexRules<3>, 3>();
        check_family::<CubeRules<3>, 3>();
    }

    #[test]
    fn test_all_tables_exact_to_delivered_order() {
        check_exactness::<CubeRules<1>, 1>();
        check_exactness::<SimplexRules<2>, 2>();
        check_exactness::<CubeRules<2>, 2>();
        check_exactness::<SimplexRules<3>, 3>();
        check_exactness::<CubeRules<3>, 3>();
    }

    #[test]
    fn test_highest_orders() {
        assert_eq!(CubeRules::<1>::HIGHEST_ORDER, 9);
        assert_eq!(SimplexRules::<2>::HIGHEST_ORDER, 6);
        assert_eq!(CubeRules::<2>::HIGHEST_ORDER, 7);
        assert_eq!(SimplexRules::<3>::HIGHEST_ORDER, 5);
        assert_eq!(CubeRules::<3>::HIGHEST_ORDER, 5);
    }

    #[test]
    fn test_integrate_one() {
        // Integrate f(x)=1 with the 5-point rule. Should be 1/6.
        let rule = SimplexRules::<3>::rule::<f64>(3).unwrap();
        let sum = rule.integrate(|_| 1.0);
        assert_relative_eq!(sum, 1.0 / 6.0, epsilon = 1e-9);
    }

    #[test]
    fn test_integrate_x() {
        // Integrate f(x) = x over reference tet.
        // Analytical: 1/24.
        let rule = SimplexRules::<3>::rule::<f64>(3).unwrap();
        let sum = rule.integrate(|p| p.x);
        assert_relative_eq!(sum, 1.0 / 24.0, epsilon = 1e-9);
    }

    #[test]
    fn test_five_point_rule_has_negative_centroid_weight() {
        let rule = SimplexRules::<3>::rule::<f64>(3).unwrap();
        assert_eq!(rule.len(), 5);
        assert_relative_eq!(rule[0].weight, -2.0 / 15.0, epsilon = 1e-15);
        assert!(rule.iter().skip(1).all(|q| q.weight > 0.0));

        let entry = SimplexRules::<3>::table().lookup(3).unwrap();
        assert!(entry.properties().contains("negative weight"));
        assert!(entry.reference().contains("Keast"));
    }

    #[test]
    fn test_jacobian_volume() {
        // Distorted Tet: Node 1 moved to (2,0,0). All others standard.
        // Analytical Volume = 1/3 * (Base Area * Height) = 1/3 * 0.5 * 2.0 = 1/3.
        let p0 = Vector3::new(0.0, 0.0, 0.0);
        let p1 = Vector3::new(2.0, 0.0, 0.0);
        let p2 = Vector3::new(0.0, 1.0, 0.0);
        let p3 = Vector3::new(0.0, 0.0, 1.0);
        let j = Matrix3::from_columns(&[p1 - p0, p2 - p0, p3 - p0]);
        let det_j = j.determinant();

        for order in [1, 2, 3, 5] {
            let rule = SimplexRules::<3>::rule::<f64>(order).unwrap();
            let numeric_vol = rule.integrate(|_| det_j);
            assert_relative_eq!(numeric_vol, 1.0 / 3.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_mapped_quadratic_on_physical_tet() {
        // Integral of x^2 over the tet stretched along x.
        // x = 2 * xi, so the integral is 4 * det_j * 1/60 = 4 * 2 / 60.
        let j = Matrix3::new(2.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0);
        let det_j = j.determinant();
        let rule = SimplexRules::<3>::rule::<f64>(2).unwrap();
        let integral = rule.integrate(|xi| {
            let x = j * xi.coords;
            x[0] * x[0] * det_j
        });
        assert_relative_eq!(integral, 8.0 / 60.0, epsilon = 1e-12);
    }

    #[test]
    fn test_single_point_triangle_table() {
        // Table with only degree 1: one point at the centroid.
        let centroid = vec![([1.0 / 3.0, 1.0 / 3.0], 0.5)];
        let table = RuleTable::new(
            GeometryType::triangle(),
            vec![Rule::new(1, 1, "centroid", "", centroid).unwrap()],
        )
        .unwrap();

        let rule = table.select::<f64>(1).unwrap();
        assert_eq!(rule.len(), 1);
        assert_eq!(rule.order(), 1);
        assert_relative_eq!(rule[0].position.x, 1.0 / 3.0);
        assert_relative_eq!(rule[0].position.y, 1.0 / 3.0);
        assert_relative_eq!(rule[0].weight, 0.5);

        match table.select::<f64>(2) {
            Err(QuadratureError::OrderOutOfRange { order, geometry }) => {
                assert_eq!(order, 2);
                assert_eq!(geometry, GeometryType::triangle());
            }
            other => panic!("expected OrderOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_gap_is_not_promoted() {
        // Tet table tops out at 5 and has no degree 4 entry.
        assert_eq!(SimplexRules::<3>::HIGHEST_ORDER, 5);
        assert!(SimplexRules::<3>::rule::<f64>(5).is_ok());
        assert!(!SimplexRules::<3>::supports(4));

        let err = SimplexRules::<3>::rule::<f64>(4).unwrap_err();
        assert!(err.is_order_out_of_range());
        assert_eq!(err.requested_order(), Some(4));
        assert_eq!(err.geometry_type(), Some(GeometryType::tetrahedron()));
        assert_eq!(err.dimension(), Some(3));
        assert_eq!(
            err.to_string(),
            "QuadratureRule for order 4 and GeometryType tetrahedron not available"
        );

        assert!(SimplexRules::<3>::rule::<f64>(6).is_err());
    }

    #[test]
    fn test_negative_and_zero_orders() {
        // Order 0 is catalogued, negative orders are not. Neither is special-cased.
        let rule = SimplexRules::<2>::rule::<f64>(0).unwrap();
        assert_eq!(rule.len(), 1);
        assert_eq!(rule.order(), 1);

        let err = SimplexRules::<2>::rule::<f64>(-1).unwrap_err();
        assert_eq!(err.requested_order(), Some(-1));

        // A table that does catalogue a negative key resolves it.
        let table = RuleTable::new(
            GeometryType::line(),
            vec![Rule::new(-1, 1, "", "", vec![([0.5], 1.0)]).unwrap()],
        )
        .unwrap();
        assert!(table.select::<f64>(-1).is_ok());
    }

    #[test]
    fn test_over_delivery_is_reported() {
        // Degree 3 on the triangle uses the 6-point degree 4 rule.
        let rule = SimplexRules::<2>::rule::<f64>(3).unwrap();
        assert_eq!(rule.order(), 4);
        assert_eq!(rule.len(), 6);
        assert_eq!(rule, SimplexRules::<2>::rule::<f64>(4).unwrap());

        let report = verify::verify_rule(&rule, &VerifyConfig::default());
        assert_eq!(report.exact_to, Some(4));
    }

    #[test]
    fn test_selection_is_idempotent() {
        for order in -1..=8 {
            let a = CubeRules::<2>::rule::<f64>(order);
            let b = CubeRules::<2>::rule::<f64>(order);
            match (a, b) {
                (Ok(a), Ok(b)) => assert_eq!(a, b),
                (Err(a), Err(b)) => assert_eq!(a.requested_order(), b.requested_order()),
                _ => panic!("selection of order {order} is not deterministic"),
            }
        }
    }

    #[test]
    fn test_single_precision_rule() {
        let rule = SimplexRules::<2>::rule::<f32>(5).unwrap();
        assert_eq!(rule.len(), 7);
        assert_relative_eq!(rule.weight_sum(), 0.5_f32, epsilon = 1e-6);
    }

    #[test]
    fn test_high_degree_monomial_on_triangle() {
        let rule = SimplexRules::<2>::rule::<f64>(6).unwrap();
        let integral = rule.integrate(|p| p.x.powi(2) * p.y.powi(4));
        assert_abs_diff_eq!(
            integral,
            monomial_integral(GeometryType::triangle(), &[2, 4]),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_tensor_rule_is_product_of_line_rule() {
        let line = CubeRules::<1>::rule::<f64>(5).unwrap();
        let quad = CubeRules::<2>::rule::<f64>(5).unwrap();
        assert_eq!(quad.len(), line.len() * line.len());
        for (i, q) in quad.iter().enumerate() {
            let (a, b) = (&line[i / line.len()], &line[i % line.len()]);
            assert_relative_eq!(q.position.x, a.position.x, epsilon = 1e-15);
            assert_relative_eq!(q.position.y, b.position.x, epsilon = 1e-15);
            assert_relative_eq!(q.weight, a.weight * b.weight, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_factory_dispatch() {
        let tri = QuadratureRuleFactory::<2>::rule::<f64>(GeometryType::triangle(), 2).unwrap();
        assert_eq!(tri.geometry_type(), GeometryType::triangle());
        assert_eq!(tri.len(), 3);

        let quad = QuadratureRuleFactory::<2>::rule::<f64>(GeometryType::quadrilateral(), 2).unwrap();
        assert_eq!(quad.len(), 4);

        assert_eq!(
            QuadratureRuleFactory::<3>::highest_order(GeometryType::tetrahedron()).unwrap(),
            5
        );
        assert_eq!(
            QuadratureRuleFactory::<1>::highest_order(GeometryType::simplex(1)).unwrap(),
            9
        );

        let err = QuadratureRuleFactory::<2>::table(GeometryType::tetrahedron()).unwrap_err();
        assert!(matches!(err, QuadratureError::DimensionMismatch { dim: 2, .. }));

        let err = QuadratureRuleFactory::<3>::rule::<f64>(GeometryType::hexahedron(), 6).unwrap_err();
        assert_eq!(err.requested_order(), Some(6));
        assert_eq!(err.geometry_type(), Some(GeometryType::hexahedron()));
    }

    #[test]
    fn test_rule_validation() {
        let empty: Vec<([f64; 2], f64)> = Vec::new();
        assert!(matches!(
            Rule::new(2, 2, "", "", empty),
            Err(QuadratureError::EmptyRule { degree: 2 })
        ));
        assert!(matches!(
            Rule::new(3, 2, "", "", vec![([0.5, 0.5], 1.0)]),
            Err(QuadratureError::DeliveredBelowDegree { degree: 3, delivered_order: 2 })
        ));
    }

    #[test]
    fn test_table_validation() {
        let rule = || Rule::new(1, 1, "", "", vec![([0.5, 0.5], 1.0)]).unwrap();
        assert!(matches!(
            RuleTable::new(GeometryType::quadrilateral(), vec![rule(), rule()]),
            Err(QuadratureError::DuplicateDegree { degree: 1, .. })
        ));
        assert!(matches!(
            RuleTable::new(GeometryType::hexahedron(), vec![rule()]),
            Err(QuadratureError::DimensionMismatch { dim: 2, .. })
        ));
        let empty = RuleTable::<2>::new(GeometryType::quadrilateral(), Vec::new()).unwrap();
        assert_eq!(empty.highest_order(), None);
        assert!(empty.select::<f64>(0).is_err());
    }

    const MALFORMED: &[RuleData<2>] = &[
        RuleData { degree: 0, delivered_order: 0, properties: "", reference: "", points: &[] },
        RuleData { degree: 1, delivered_order: 1, properties: "first", reference: "", points: &[([0.5, 0.5], 1.0)] },
        RuleData { degree: 1, delivered_order: 1, properties: "second", reference: "", points: &[([0.5, 0.5], 1.0)] },
        RuleData { degree: 3, delivered_order: 2, properties: "", reference: "", points: &[([0.5, 0.5], 1.0)] },
    ];

    #[test]
    fn test_from_data_drops_malformed_entries() {
        let table = RuleTable::from_data(GeometryType::quadrilateral(), MALFORMED);
        assert_eq!(table.degrees().collect::<Vec<_>>(), vec![1]);
        assert_eq!(table.lookup(1).unwrap().properties(), "first");
        assert!(table.select::<f64>(0).unwrap_err().is_order_out_of_range());
        assert!(table.select::<f64>(3).unwrap_err().is_order_out_of_range());
    }

    const TRIANGLE_JSON: &str = r#"{
        "basic_type": "simplex",
        "dim": 2,
        "rules": [
            { "degree": 0, "coordinates": [], "weights": [] },
            { "degree": 1, "properties": "centroid",
              "coordinates": [[0.3333333333333333, 0.3333333333333333]], "weights": [0.5] },
            { "degree": 2, "delivered_order": 2, "reference": "Strang and Fix",
              "coordinates": [[0.16666666666666666, 0.16666666666666666],
                              [0.6666666666666666, 0.16666666666666666],
                              [0.16666666666666666, 0.6666666666666666]],
              "weights": [0.16666666666666666, 0.16666666666666666, 0.16666666666666666] }
        ]
    }"#;

    #[test]
    fn test_table_from_json() {
        let table = RuleTable::<2>::from_json(TRIANGLE_JSON).unwrap();
        assert_eq!(table.geometry_type(), GeometryType::triangle());
        // Degree 0 has no coordinates and is skipped.
        assert_eq!(table.degrees().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(table.lookup(1).unwrap().delivered_order(), 1);
        assert_eq!(table.lookup(2).unwrap().reference(), "Strang and Fix");

        let rule = table.select::<f64>(2).unwrap();
        let report = verify::verify_rule(&rule, &VerifyConfig::default());
        assert!(report.is_valid());

        let exported = TableSource::from_json(&table.to_source().to_json().unwrap()).unwrap();
        assert_eq!(exported.into_table::<2>().unwrap(), table);
    }

    #[test]
    fn test_json_errors() {
        assert!(matches!(
            RuleTable::<3>::from_json(TRIANGLE_JSON),
            Err(QuadratureError::DimensionMismatch { dim: 3, .. })
        ));

        let bad_point = r#"{ "basic_type": "cube", "dim": 2, "rules": [
            { "degree": 1, "coordinates": [[0.5, 0.5], [0.5]], "weights": [0.5, 0.5] } ] }"#;
        assert!(matches!(
            RuleTable::<2>::from_json(bad_point),
            Err(QuadratureError::CoordinateCount { degree: 1, index: 1, found: 1, expected: 2 })
        ));

        let bad_weights = r#"{ "basic_type": "cube", "dim": 1, "rules": [
            { "degree": 1, "coordinates": [[0.5]], "weights": [0.5, 0.5] } ] }"#;
        assert!(matches!(
            RuleTable::<1>::from_json(bad_weights),
            Err(QuadratureError::WeightCount { points: 1, weights: 2, .. })
        ));

        assert!(matches!(
            RuleTable::<1>::from_json("{ \"dim\": 1 }"),
            Err(QuadratureError::Json(_))
        ));
    }

    #[test]
    fn test_verify_flags_wrong_rule() {
        // A centroid rule claiming order 2 is not exact for x^2.
        let table = RuleTable::new(
            GeometryType::triangle(),
            vec![Rule::new(2, 2, "", "", vec![([1.0 / 3.0, 1.0 / 3.0], 0.5)]).unwrap()],
        )
        .unwrap();
        let rule = table.select::<f64>(2).unwrap();
        let report = verify::verify_rule(&rule, &VerifyConfig::default());
        assert_eq!(report.exact_to, Some(1));
        assert!(!report.is_valid());

        // Weights not summing to the area, and a point outside the triangle.
        let table = RuleTable::new(
            GeometryType::triangle(),
            vec![Rule::new(0, 0, "", "", vec![([0.9, 0.9], 1.0)]).unwrap()],
        )
        .unwrap();
        let report = verify::verify_rule(&table.select::<f64>(0).unwrap(), &VerifyConfig::default());
        assert_relative_eq!(report.weight_sum_error, 0.5);
        assert_eq!(report.outside_points, vec![0]);
        assert!(!report.is_valid());
    }
}
