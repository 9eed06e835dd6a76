use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Inbound case description. Every field is optional: an absent field means
/// "no signal" for the checks that would consume it, never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CasePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<CaseContext>,
}

/// Free-form case context. Individual checks read the slices they care
/// about and ignore the rest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub procurement: Option<ProcurementTerms>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectProfile>,
}

/// Procurement terms attached to the proposed engagement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcurementTerms {
    #[serde(default)]
    pub single_source: bool,
}

/// Declared project attributes consumed by the heuristic checks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

/// Output of a single risk check. `risk` is clamped to [0,1] on
/// construction (0 = no risk, 1 = maximum risk); an empty evidence list
/// means the check found nothing actionable.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskCheckResult {
    risk: f64,
    evidence: Vec<String>,
}

impl RiskCheckResult {
    pub fn new(risk: f64, evidence: Vec<String>) -> Self {
        let risk = if risk.is_finite() {
            risk.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self { risk, evidence }
    }

    /// A zero-risk result with no evidence.
    pub fn clear() -> Self {
        Self::new(0.0, Vec::new())
    }

    pub fn risk(&self) -> f64 {
        self.risk
    }

    pub fn evidence(&self) -> &[String] {
        &self.evidence
    }

    pub fn has_evidence(&self) -> bool {
        !self.evidence.is_empty()
    }
}

/// Discrete severity derived from a score and the active thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EthicsFlag {
    Block,
    Caution,
    Ok,
}

impl EthicsFlag {
    pub const fn label(self) -> &'static str {
        match self {
            EthicsFlag::Block => "BLOCK",
            EthicsFlag::Caution => "CAUTION",
            EthicsFlag::Ok => "OK",
        }
    }
}

/// The seven scoring categories. `Other` is a fixed baseline reserved for
/// signals the engine does not compute yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    Sanctions,
    Corruption,
    Environmental,
    HumanRights,
    Fraud,
    DataPrivacy,
    Other,
}

impl RiskCategory {
    /// Name shown on category flags in reports.
    pub const fn display_name(self) -> &'static str {
        match self {
            RiskCategory::Sanctions => "Sanctions/PEP",
            RiskCategory::Corruption => "Procurement / Corruption",
            RiskCategory::Environmental => "Environmental",
            RiskCategory::HumanRights => "Human Rights",
            RiskCategory::Fraud => "Fraud",
            RiskCategory::DataPrivacy => "Data Privacy",
            RiskCategory::Other => "Other",
        }
    }

    pub const fn reason(self) -> &'static str {
        match self {
            RiskCategory::Sanctions => "Sanctions or Politically Exposed Person indications",
            RiskCategory::Corruption => "Corruption risk indicators",
            RiskCategory::Environmental => "Environmental sensitivity",
            RiskCategory::HumanRights => "Human rights risk",
            RiskCategory::Fraud => "Fraud risk indicators",
            RiskCategory::DataPrivacy => "Data privacy exposure",
            RiskCategory::Other => "Unclassified risk",
        }
    }
}

/// A category surfaced in the report because its check produced evidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryFlag {
    pub name: String,
    pub flag: EthicsFlag,
    pub reason: String,
    pub evidence: Vec<String>,
}

/// Per-category scores on the risk-inverted 0-100 scale. The PEP score
/// restates the sanctions score; the two checks share one signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub sanctions_score: u8,
    pub pep_score: u8,
    pub corruption_score: u8,
    pub env_score: u8,
    pub human_rights_score: u8,
    pub fraud_score: u8,
    pub data_privacy_score: u8,
    pub other_score: u8,
}

/// One remediation step from the mitigation playbook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MitigationStep {
    pub step: String,
    pub detail: String,
}

impl MitigationStep {
    pub fn new(step: &str, detail: &str) -> Self {
        Self {
            step: step.to_string(),
            detail: detail.to_string(),
        }
    }
}

/// The engine's sole externally visible artifact. Constructed once per
/// evaluation and never mutated afterwards; persistence is the caller's
/// concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EthicsReport {
    pub overall_score: u8,
    pub overall_flag: EthicsFlag,
    pub breakdown: ScoreBreakdown,
    pub flags: Vec<CategoryFlag>,
    pub mitigation: Vec<MitigationStep>,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}
