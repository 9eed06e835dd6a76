//! Severity classification for the aggregate score and for individual
//! categories.

use super::domain::{EthicsFlag, RiskCategory};
use super::policy::PolicyThresholds;

/// Derive the overall severity from the aggregate score. BLOCK is tested
/// before CAUTION and both comparisons are strict, so a score equal to a
/// threshold lands in the less severe band.
pub fn overall_flag(overall_score: u8, thresholds: &PolicyThresholds) -> EthicsFlag {
    let score = f64::from(overall_score);
    if score < thresholds.block {
        EthicsFlag::Block
    } else if score < thresholds.caution {
        EthicsFlag::Caution
    } else {
        EthicsFlag::Ok
    }
}

/// Per-category severity at the fixed cutoff of 50. Sanctions, corruption,
/// and human-rights findings split BLOCK/CAUTION; the remaining categories
/// split CAUTION/OK. The asymmetry is intentional and matches the flags
/// reviewers are trained on.
pub fn category_flag(category: RiskCategory, score: u8) -> EthicsFlag {
    let severe = score < 50;
    match category {
        RiskCategory::Sanctions | RiskCategory::Corruption | RiskCategory::HumanRights => {
            if severe {
                EthicsFlag::Block
            } else {
                EthicsFlag::Caution
            }
        }
        RiskCategory::Environmental
        | RiskCategory::Fraud
        | RiskCategory::DataPrivacy
        | RiskCategory::Other => {
            if severe {
                EthicsFlag::Caution
            } else {
                EthicsFlag::Ok
            }
        }
    }
}
