//! Integration tests for the BMI operations through the public API

use std::time::{Duration, Instant};

use healthy_coder_core::{
    compute_bmi_score, find_coder_with_worst_bmi, get_bmi_scores, is_diet_recommended,
    telemetry::{init_tracing, LogFormat},
    BmiCalculator, BmiError, CalculatorConfig, Coder, HeightUnit, WeightUnit,
};
use rstest::{fixture, rstest};

#[fixture]
fn coders() -> Vec<Coder> {
    init_tracing(LogFormat::Pretty);
    vec![
        Coder::new(1.80, 60.0),
        Coder::new(1.82, 98.0),
        Coder::new(1.82, 64.7),
    ]
}

// ============================================================================
// Diet Recommendation
// ============================================================================

#[rstest]
#[case(89.0, 1.72)]
#[case(95.0, 1.75)]
#[case(110.0, 1.78)]
fn diet_recommended_above_threshold(#[case] weight: f64, #[case] height: f64) {
    assert!(is_diet_recommended(weight, height).unwrap());
}

#[test]
fn diet_not_recommended_for_low_bmi() {
    // 50kg at 1.92m is ~13.56
    assert!(!is_diet_recommended(50.0, 1.92).unwrap());
}

#[test]
fn diet_on_zero_height_is_arithmetic_error() {
    let result = is_diet_recommended(50.0, 0.0);
    assert!(matches!(result, Err(BmiError::Arithmetic { .. })));
}

#[rstest]
#[case(0.0)]
#[case(-0.0)]
fn score_on_zero_height_is_arithmetic_error(#[case] height: f64) {
    assert_eq!(
        compute_bmi_score(72.0, height),
        Err(BmiError::Arithmetic { weight: 72.0 })
    );
}

// ============================================================================
// Worst BMI
// ============================================================================

#[rstest]
fn worst_bmi_coder_found(coders: Vec<Coder>) {
    let worst = find_coder_with_worst_bmi(&coders).unwrap().unwrap();
    assert_eq!(worst.height(), 1.82);
    assert_eq!(worst.weight(), 98.0);
}

#[test]
fn worst_bmi_absent_for_empty_list() {
    let coders: Vec<Coder> = Vec::new();
    assert_eq!(find_coder_with_worst_bmi(&coders), Ok(None));
}

#[test]
fn worst_bmi_over_ten_thousand_coders_is_fast() {
    let coders: Vec<Coder> = (0..10_000)
        .map(|i| Coder::new(1.0 + i as f64, 10.0 + i as f64))
        .collect();

    // best of several runs keeps scheduler noise out of the measurement
    let mut fastest = Duration::MAX;
    for _ in 0..5 {
        let start = Instant::now();
        let worst = find_coder_with_worst_bmi(&coders).unwrap();
        fastest = fastest.min(start.elapsed());
        assert!(std::ptr::eq(worst.unwrap(), &coders[0]));
    }

    assert!(
        fastest < Duration::from_millis(1),
        "scan took {:?}",
        fastest
    );
}

// ============================================================================
// Score Lists
// ============================================================================

#[rstest]
fn bmi_scores_match_expected(coders: Vec<Coder>) {
    let expected = [18.52, 29.59, 19.53];
    let scores = get_bmi_scores(&coders).unwrap();

    assert_eq!(scores.len(), expected.len());
    for (score, want) in scores.iter().zip(expected) {
        assert!((score - want).abs() < 0.01, "got {}, want {}", score, want);
    }
}

#[rstest]
fn operations_are_idempotent(coders: Vec<Coder>) {
    assert_eq!(get_bmi_scores(&coders), get_bmi_scores(&coders));
    assert_eq!(
        find_coder_with_worst_bmi(&coders),
        find_coder_with_worst_bmi(&coders)
    );
}

// ============================================================================
// Configured Calculator
// ============================================================================

#[rstest]
fn default_calculator_matches_free_functions(coders: Vec<Coder>) {
    let calculator = BmiCalculator::default();

    assert_eq!(calculator.get_bmi_scores(&coders), get_bmi_scores(&coders));
    assert_eq!(
        calculator.find_coder_with_worst_bmi(&coders),
        find_coder_with_worst_bmi(&coders)
    );
    for coder in &coders {
        assert_eq!(
            calculator.is_diet_recommended(coder.weight(), coder.height()),
            is_diet_recommended(coder.weight(), coder.height())
        );
    }
}

#[test]
fn calculator_from_toml_config() {
    let config = CalculatorConfig::load(Some("diet_threshold = 29.0")).unwrap();
    let calculator = BmiCalculator::new(config);

    // ~29.59 with the raised threshold, ~19.53 stays below either way
    assert!(calculator.is_diet_recommended(98.0, 1.82).unwrap());
    assert!(!calculator.is_diet_recommended(64.7, 1.82).unwrap());
}

#[test]
fn imperial_coder_scores_like_metric() {
    let imperial = Coder::from_units(182.0, HeightUnit::Cm, 98.0 / 0.453592, WeightUnit::Lbs);
    let metric = Coder::new(1.82, 98.0);

    let scores = get_bmi_scores(&[imperial, metric]).unwrap();
    assert!((scores[0] - scores[1]).abs() < 1e-9);
}
