//! 선형 카테고리 변환 회귀 테스트. 항등/왕복/경유 변환 성질과 대표 값들을 확인한다.
use unit_converter::{
    convert, convert_by_name, list_categories, ConversionError, ConversionRule, QuantityKind,
};

const VALUES: [f64; 6] = [0.0, 1.0, -3.5, 0.125, 123_456.789, 1e-6];

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * expected.abs(),
        "{label} expected {expected:e} got {actual:e} (diff {diff:e}, tol {rel_tol})"
    );
}

fn linear_categories() -> impl Iterator<Item = &'static unit_converter::Category> {
    list_categories()
        .iter()
        .filter(|c| matches!(c.rule, ConversionRule::LinearScale { .. }))
}

#[test]
fn identity_conversion_is_exact() {
    for category in linear_categories() {
        for unit in &category.units {
            for v in VALUES {
                let out = convert(category.kind, v, unit, unit).expect("identity");
                assert_eq!(out, v, "{} {unit}", category.name);
            }
        }
    }
}

#[test]
fn round_trip_returns_original_value() {
    for category in linear_categories() {
        for a in &category.units {
            for b in &category.units {
                for v in VALUES {
                    let there = convert(category.kind, v, a, b).expect("there");
                    let back = convert(category.kind, there, b, a).expect("back");
                    assert_close(&format!("{} {a}->{b}->{a}", category.name), back, v, 1e-9);
                }
            }
        }
    }
}

#[test]
fn conversion_through_intermediate_unit_agrees() {
    for category in linear_categories() {
        let units = &category.units;
        for a in units {
            for c in units {
                let direct = convert(category.kind, 42.5, a, c).expect("direct");
                for b in units {
                    let step = convert(category.kind, 42.5, a, b).expect("a->b");
                    let via = convert(category.kind, step, b, c).expect("b->c");
                    assert_close(&format!("{} {a}->{b}->{c}", category.name), via, direct, 1e-9);
                }
            }
        }
    }
}

#[test]
fn length_reference_values() {
    assert_eq!(convert(QuantityKind::Length, 1.0, "km", "m").unwrap(), 1000.0);
    assert_eq!(convert(QuantityKind::Length, 12.0, "in", "ft").unwrap(), 1.0);
    assert_close(
        "ly->km",
        convert(QuantityKind::Length, 1.0, "light year", "km").unwrap(),
        9.461e12,
        1e-12,
    );
}

#[test]
fn data_storage_uses_binary_prefixes() {
    assert_eq!(convert(QuantityKind::DataStorage, 1.0, "byte", "bit").unwrap(), 8.0);
    assert_eq!(convert(QuantityKind::DataStorage, 1.0, "KB", "byte").unwrap(), 1024.0);
    assert_eq!(
        convert(QuantityKind::DataStorage, 1.0, "GB", "byte").unwrap(),
        1_073_741_824.0
    );
    assert_eq!(convert(QuantityKind::DataStorage, 1.0, "TB", "GB").unwrap(), 1024.0);
}

#[test]
fn assorted_reference_values() {
    assert_eq!(convert(QuantityKind::Time, 2.0, "h", "min").unwrap(), 120.0);
    assert_eq!(convert(QuantityKind::Mass, 1.0, "t", "kg").unwrap(), 1000.0);
    assert_eq!(convert(QuantityKind::Pressure, 1.0, "mmHg", "Torr").unwrap(), 1.0);
    assert_close(
        "atm->bar",
        convert(QuantityKind::Pressure, 1.0, "atm", "bar").unwrap(),
        1.01325,
        1e-12,
    );
    assert_close(
        "kcal->kJ",
        convert(QuantityKind::Energy, 1.0, "kcal", "kJ").unwrap(),
        4.184,
        1e-12,
    );
    assert_close(
        "kgf->N",
        convert(QuantityKind::Force, 10.0, "kgf", "N").unwrap(),
        98.0665,
        1e-12,
    );
    assert_close(
        "ha->acre",
        convert(QuantityKind::Area, 1.0, "ha", "acre").unwrap(),
        10_000.0 / 4046.86,
        1e-12,
    );
    assert_close(
        "gal->L",
        convert(QuantityKind::Volume, 1.0, "gal", "L").unwrap(),
        3.78541,
        1e-12,
    );
    assert_close(
        "kW->BTU/h",
        convert(QuantityKind::Power, 1.0, "kW", "BTU/h").unwrap(),
        1000.0 / 0.293071,
        1e-12,
    );
    assert_close(
        "c->m/s",
        convert(QuantityKind::Speed, 1.0, "c", "m/s").unwrap(),
        299_792_458.0,
        0.0,
    );
}

#[test]
fn non_finite_values_are_rejected() {
    for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(matches!(
            convert(QuantityKind::Length, v, "m", "km"),
            Err(ConversionError::InvalidValue(_))
        ));
    }
}

#[test]
fn units_outside_the_category_are_rejected() {
    assert_eq!(
        convert(QuantityKind::Length, 1.0, "parsec", "m"),
        Err(ConversionError::UnknownUnit {
            category: "Length",
            unit: "parsec".to_string()
        })
    );
    // 다른 카테고리의 단위도 허용하지 않는다.
    assert!(matches!(
        convert(QuantityKind::Length, 1.0, "m", "kg"),
        Err(ConversionError::UnknownUnit { .. })
    ));
    // 기호는 대소문자를 구분한다 (Mm != mm).
    assert_eq!(convert(QuantityKind::Length, 1.0, "Mm", "mm").unwrap(), 1e9);
    assert!(convert(QuantityKind::Length, 1.0, "KM", "m").is_err());
}

#[test]
fn convert_by_name_resolves_category_first() {
    assert_eq!(
        convert_by_name("Data Storage", 2.0, "byte", "bit").unwrap(),
        16.0
    );
    assert_eq!(
        convert_by_name("Nonexistent", f64::NAN, "parsec", "m"),
        Err(ConversionError::NotFound("Nonexistent".to_string()))
    );
    assert_eq!(
        convert_by_name("data storage", 2.0, "byte", "bit"),
        Err(ConversionError::NotFound("data storage".to_string()))
    );
}

#[test]
fn registry_is_shared_across_threads() {
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                s.spawn(move || {
                    convert(QuantityKind::Mass, f64::from(i), "kg", "g").expect("convert")
                })
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().expect("thread"), i as f64 * 1000.0);
        }
    });
}
