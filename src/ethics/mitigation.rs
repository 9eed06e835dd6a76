//! Remediation playbooks keyed on the overall severity.

use super::domain::{EthicsFlag, MitigationStep};

/// Fixed playbook for the overall flag. Category flags carry their own
/// evidence but never alter the plan.
pub fn plan_for(flag: EthicsFlag) -> Vec<MitigationStep> {
    match flag {
        EthicsFlag::Block => vec![
            MitigationStep::new(
                "Manual Review",
                "Case requires Ethics Committee review. Automated processing halted.",
            ),
            MitigationStep::new(
                "Enhanced Due Diligence",
                "Provide UBO (Ultimate Beneficial Owner) registry documents.",
            ),
        ],
        EthicsFlag::Caution => vec![MitigationStep::new(
            "Enhanced Monitoring",
            "Proceed with caution. Periodic reviews recommended.",
        )],
        EthicsFlag::Ok => vec![MitigationStep::new(
            "Standard Procedure",
            "No immediate ethics blockers. Proceed with standard flow.",
        )],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_plan_halts_processing_and_requests_ubo_documents() {
        let plan = plan_for(EthicsFlag::Block);
        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].step, "Manual Review");
        assert_eq!(plan[1].step, "Enhanced Due Diligence");
        assert!(plan[1].detail.contains("UBO"));
    }

    #[test]
    fn caution_plan_recommends_monitoring() {
        let plan = plan_for(EthicsFlag::Caution);
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].step, "Enhanced Monitoring");
    }

    #[test]
    fn ok_plan_is_standard_procedure() {
        let plan = plan_for(EthicsFlag::Ok);
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].step, "Standard Procedure");
    }
}
