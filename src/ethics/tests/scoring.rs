use crate::ethics::policy::DEFAULT_WEIGHTS;
use crate::ethics::scoring::{combine_scores, score_from_risk};

#[test]
fn score_inverts_the_risk_scale() {
    assert_eq!(score_from_risk(0.0), 100);
    assert_eq!(score_from_risk(1.0), 0);
    assert_eq!(score_from_risk(0.8), 20);
    assert_eq!(score_from_risk(0.25), 75);
}

#[test]
fn out_of_range_risk_clamps() {
    assert_eq!(score_from_risk(-0.5), 100);
    assert_eq!(score_from_risk(1.5), 0);
    assert_eq!(score_from_risk(f64::NAN), 100);
}

#[test]
fn score_is_non_increasing_in_risk() {
    let mut previous = score_from_risk(0.0);
    for step in 1..=100 {
        let current = score_from_risk(f64::from(step) / 100.0);
        assert!(
            current <= previous,
            "score rose between risk steps {} and {}",
            step - 1,
            step
        );
        previous = current;
    }
}

#[test]
fn default_weights_reproduce_the_reference_aggregate() {
    let scores = [20.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0];
    assert_eq!(combine_scores(&scores, &DEFAULT_WEIGHTS), 84);
}

#[test]
fn aggregate_stays_within_category_bounds() {
    let scores = [25.0, 90.0, 40.0, 70.0, 100.0, 55.0, 10.0];
    let weights = [3.0, 1.0, 0.5, 2.0, 0.25, 1.5, 4.0];

    let combined = combine_scores(&scores, &weights);
    assert!(combined >= 10);
    assert!(combined <= 100);
}

#[test]
fn aggregate_is_invariant_to_weight_scale() {
    let scores = [20.0, 60.0, 100.0, 35.0, 80.0, 100.0, 100.0];
    let weights = [0.2, 0.15, 0.15, 0.1, 0.15, 0.1, 0.15];
    let scaled = weights.map(|weight| weight * 7.5);

    assert_eq!(
        combine_scores(&scores, &weights),
        combine_scores(&scores, &scaled)
    );
}

#[test]
fn zero_mass_weights_degrade_to_the_plain_mean() {
    let scores = [0.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0];
    let weights = [0.0; 7];

    assert_eq!(combine_scores(&scores, &weights), 86);
}
