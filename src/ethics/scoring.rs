//! Score normalization and policy-weighted aggregation.

/// Map a risk value to the risk-inverted 0-100 scale: `score(0) = 100`,
/// `score(1) = 0`, monotonically decreasing in between. Out-of-range and
/// non-finite inputs clamp to the nearest valid risk.
pub fn score_from_risk(risk: f64) -> u8 {
    let risk = if risk.is_finite() {
        risk.clamp(0.0, 1.0)
    } else {
        0.0
    };
    ((1.0 - risk) * 100.0).round() as u8
}

/// Weighted combination of the seven category scores. Weights are
/// normalized to sum to 1 before the dot product, so the result is
/// invariant to the scale the policy author wrote them on. A vector with
/// no positive mass degrades to the plain mean.
pub fn combine_scores(scores: &[f64; 7], weights: &[f64; 7]) -> u8 {
    let sanitized = weights.map(|weight| {
        if weight.is_finite() && weight > 0.0 {
            weight
        } else {
            0.0
        }
    });
    let total: f64 = sanitized.iter().sum();

    let combined = if total > 0.0 {
        scores
            .iter()
            .zip(sanitized.iter())
            .map(|(score, weight)| score * (weight / total))
            .sum::<f64>()
    } else {
        scores.iter().sum::<f64>() / scores.len() as f64
    };

    combined.round().clamp(0.0, 100.0) as u8
}
