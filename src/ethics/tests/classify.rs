use super::common::*;
use crate::ethics::classify::{category_flag, overall_flag};
use crate::ethics::domain::{EthicsFlag, RiskCategory};

#[test]
fn overall_flag_uses_strict_threshold_comparisons() {
    let policy = default_policy();

    assert_eq!(overall_flag(0, &policy.thresholds), EthicsFlag::Block);
    assert_eq!(overall_flag(49, &policy.thresholds), EthicsFlag::Block);
    assert_eq!(overall_flag(50, &policy.thresholds), EthicsFlag::Caution);
    assert_eq!(overall_flag(69, &policy.thresholds), EthicsFlag::Caution);
    assert_eq!(overall_flag(70, &policy.thresholds), EthicsFlag::Ok);
    assert_eq!(overall_flag(100, &policy.thresholds), EthicsFlag::Ok);
}

#[test]
fn overall_flag_follows_policy_thresholds() {
    let strict = policy_with_thresholds(80.0, 95.0);

    assert_eq!(overall_flag(79, &strict.thresholds), EthicsFlag::Block);
    assert_eq!(overall_flag(84, &strict.thresholds), EthicsFlag::Caution);
    assert_eq!(overall_flag(95, &strict.thresholds), EthicsFlag::Ok);
}

#[test]
fn sanctions_and_corruption_escalate_to_block_below_fifty() {
    assert_eq!(
        category_flag(RiskCategory::Sanctions, 49),
        EthicsFlag::Block
    );
    assert_eq!(
        category_flag(RiskCategory::Sanctions, 50),
        EthicsFlag::Caution
    );
    assert_eq!(
        category_flag(RiskCategory::Corruption, 25),
        EthicsFlag::Block
    );
    assert_eq!(
        category_flag(RiskCategory::Corruption, 75),
        EthicsFlag::Caution
    );
}

#[test]
fn human_rights_keeps_the_block_escalation() {
    assert_eq!(
        category_flag(RiskCategory::HumanRights, 40),
        EthicsFlag::Block
    );
    assert_eq!(
        category_flag(RiskCategory::HumanRights, 50),
        EthicsFlag::Caution
    );
}

#[test]
fn environmental_splits_caution_from_ok() {
    assert_eq!(
        category_flag(RiskCategory::Environmental, 30),
        EthicsFlag::Caution
    );
    assert_eq!(
        category_flag(RiskCategory::Environmental, 50),
        EthicsFlag::Ok
    );
}

#[test]
fn future_categories_use_the_soft_split() {
    assert_eq!(category_flag(RiskCategory::Fraud, 10), EthicsFlag::Caution);
    assert_eq!(
        category_flag(RiskCategory::DataPrivacy, 80),
        EthicsFlag::Ok
    );
    assert_eq!(category_flag(RiskCategory::Other, 49), EthicsFlag::Caution);
}
