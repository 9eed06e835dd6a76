//! Success Probability Index for proposed partnerships.
//!
//! A standalone weighted aggregate over seven partnership dimensions,
//! reported with a confidence interval whose width shrinks as the `ut`
//! (data maturity) dimension rises. Field names carry the upstream
//! scoring model's dimension codes. Dimensions are on a 0-100 scale; an
//! absent dimension counts as neutral 50.

use serde::{Deserialize, Serialize};

const NEUTRAL_SCORE: f64 = 50.0;
const MAX_INTERVAL_HALF_WIDTH: f64 = 12.0;

/// Dimension inputs plus an optional partial weight override.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpiInput {
    pub er: Option<f64>,
    pub sp: Option<f64>,
    pub cc: Option<f64>,
    pub pr: Option<f64>,
    pub ca: Option<f64>,
    pub ea: Option<f64>,
    pub ut: Option<f64>,
    pub weights: Option<SpiWeights>,
}

/// Per-dimension weights. A partial document overrides only the named
/// dimensions; the rest keep their defaults. Normalization happens at
/// scoring time, so the values may sit on any scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpiWeights {
    pub er: f64,
    pub sp: f64,
    pub cc: f64,
    pub pr: f64,
    pub ca: f64,
    pub ea: f64,
    pub ut: f64,
}

impl Default for SpiWeights {
    fn default() -> Self {
        Self {
            er: 0.25,
            sp: 0.20,
            cc: 0.15,
            pr: 0.15,
            ca: 0.10,
            ea: 0.10,
            ut: 0.05,
        }
    }
}

impl SpiWeights {
    fn as_array(&self) -> [f64; 7] {
        [
            self.er, self.sp, self.cc, self.pr, self.ca, self.ea, self.ut,
        ]
    }

    fn from_array(values: [f64; 7]) -> Self {
        Self {
            er: values[0],
            sp: values[1],
            cc: values[2],
            pr: values[3],
            ca: values[4],
            ea: values[5],
            ut: values[6],
        }
    }

    /// Normalize to unit sum. A vector with no positive mass falls back
    /// to the defaults first.
    fn normalized(&self) -> Self {
        let sanitized = self.as_array().map(|weight| {
            if weight.is_finite() && weight > 0.0 {
                weight
            } else {
                0.0
            }
        });
        let total: f64 = sanitized.iter().sum();
        if total <= 0.0 {
            return Self::default().normalized();
        }
        Self::from_array(sanitized.map(|weight| weight / total))
    }
}

/// Clamped dimension scores actually used in the aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpiBreakdown {
    pub er: f64,
    pub sp: f64,
    pub cc: f64,
    pub pr: f64,
    pub ca: f64,
    pub ea: f64,
    pub ut: f64,
}

impl SpiBreakdown {
    fn as_array(&self) -> [f64; 7] {
        [
            self.er, self.sp, self.cc, self.pr, self.ca, self.ea, self.ut,
        ]
    }
}

/// The index with its confidence interval and the inputs that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpiOutcome {
    pub spi: f64,
    pub ci_low: f64,
    pub ci_high: f64,
    pub breakdown: SpiBreakdown,
    pub weights: SpiWeights,
}

fn clamp_dimension(value: Option<f64>) -> f64 {
    match value {
        Some(value) if value.is_finite() => value.clamp(0.0, 100.0),
        _ => NEUTRAL_SCORE,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute the index: clamp dimensions, normalize weights, take the dot
/// product, and derive the interval half-width from data maturity
/// (`ut = 100` collapses the interval to a point).
pub fn compute_spi(input: &SpiInput) -> SpiOutcome {
    let breakdown = SpiBreakdown {
        er: clamp_dimension(input.er),
        sp: clamp_dimension(input.sp),
        cc: clamp_dimension(input.cc),
        pr: clamp_dimension(input.pr),
        ca: clamp_dimension(input.ca),
        ea: clamp_dimension(input.ea),
        ut: clamp_dimension(input.ut),
    };

    let weights = input.weights.unwrap_or_default().normalized();

    let spi = breakdown
        .as_array()
        .iter()
        .zip(weights.as_array().iter())
        .map(|(score, weight)| score * weight)
        .sum::<f64>();

    let half_width = MAX_INTERVAL_HALF_WIDTH * (1.0 - breakdown.ut / 100.0);

    SpiOutcome {
        spi: round2(spi),
        ci_low: round2(spi - half_width),
        ci_high: round2(spi + half_width),
        breakdown,
        weights,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_scores_neutral_with_mid_interval() {
        let outcome = compute_spi(&SpiInput::default());

        assert_eq!(outcome.spi, 50.0);
        assert_eq!(outcome.ci_low, 44.0);
        assert_eq!(outcome.ci_high, 56.0);
        assert_eq!(outcome.breakdown.er, 50.0);
    }

    #[test]
    fn full_data_maturity_collapses_the_interval() {
        let input = SpiInput {
            ut: Some(100.0),
            ..SpiInput::default()
        };

        let outcome = compute_spi(&input);
        assert_eq!(outcome.ci_low, outcome.spi);
        assert_eq!(outcome.ci_high, outcome.spi);
    }

    #[test]
    fn dimensions_clamp_to_the_scale() {
        let input = SpiInput {
            er: Some(250.0),
            sp: Some(-40.0),
            ..SpiInput::default()
        };

        let outcome = compute_spi(&input);
        assert_eq!(outcome.breakdown.er, 100.0);
        assert_eq!(outcome.breakdown.sp, 0.0);
    }

    #[test]
    fn weight_scale_does_not_change_the_index() {
        let base = SpiInput {
            er: Some(80.0),
            sp: Some(60.0),
            ut: Some(90.0),
            ..SpiInput::default()
        };
        let scaled = SpiInput {
            weights: Some(SpiWeights {
                er: 2.5,
                sp: 2.0,
                cc: 1.5,
                pr: 1.5,
                ca: 1.0,
                ea: 1.0,
                ut: 0.5,
            }),
            ..base
        };

        assert_eq!(compute_spi(&base).spi, compute_spi(&scaled).spi);
    }

    #[test]
    fn zero_mass_weights_fall_back_to_defaults() {
        let input = SpiInput {
            er: Some(100.0),
            weights: Some(SpiWeights {
                er: 0.0,
                sp: 0.0,
                cc: 0.0,
                pr: 0.0,
                ca: 0.0,
                ea: 0.0,
                ut: 0.0,
            }),
            ..SpiInput::default()
        };

        let outcome = compute_spi(&input);
        assert_eq!(outcome.weights, SpiWeights::default().normalized());
        assert_eq!(outcome.spi, 62.5);
    }
}
