//! The six risk evaluators. Each takes a read-only view of the case,
//! never fails for well-formed input, and maps absent fields to zero risk.

use std::time::Duration;

use futures::future::join_all;
use tokio::time::timeout;
use tracing::warn;

use super::domain::{CaseContext, RiskCheckResult};
use super::screening::ScreeningProvider;

const SINGLE_SOURCE_RISK: f64 = 0.75;
const CONSTRUCTION_SECTOR_RISK: f64 = 0.4;
const HIGH_IMPACT_INDUSTRY_RISK: f64 = 0.7;
const SENSITIVE_REGION_RISK: f64 = 0.6;

/// Risk assigned to an identity whose lookup failed or timed out. The
/// identity counts as unverified, not clean, so the evaluation continues
/// with caution-level evidence instead of aborting.
const UNVERIFIED_IDENTITY_RISK: f64 = 0.5;

/// Keyword-driven risk signal. Stands in for what a production deployment
/// would back with a classifier or an external knowledge base; swapping
/// the implementation leaves aggregation untouched.
#[derive(Debug, Clone, Copy)]
pub struct KeywordSignal {
    keywords: &'static [&'static str],
    risk: f64,
}

impl KeywordSignal {
    pub const fn new(keywords: &'static [&'static str], risk: f64) -> Self {
        Self { keywords, risk }
    }

    /// Case-insensitive substring probe. Returns the signal's risk when
    /// any keyword occurs in the text.
    pub fn probe(&self, text: &str) -> Option<f64> {
        let haystack = text.to_lowercase();
        self.keywords
            .iter()
            .any(|keyword| haystack.contains(keyword))
            .then_some(self.risk)
    }
}

pub const HIGH_IMPACT_INDUSTRIES: KeywordSignal = KeywordSignal::new(
    &["mining", "oil", "gas", "chemical", "timber"],
    HIGH_IMPACT_INDUSTRY_RISK,
);

pub const SENSITIVE_REGIONS: KeywordSignal =
    KeywordSignal::new(&["conflict", "frontier"], SENSITIVE_REGION_RISK);

pub const CONSTRUCTION_SECTOR: KeywordSignal =
    KeywordSignal::new(&["construction"], CONSTRUCTION_SECTOR_RISK);

/// Screen every target identity concurrently, keeping the worst match.
/// Risk is the maximum match score across identities; each positive match
/// is recorded as evidence. A lookup that errors or exceeds
/// `lookup_timeout` degrades that identity to [`UNVERIFIED_IDENTITY_RISK`].
pub(crate) async fn check_sanctions_and_pep<S: ScreeningProvider>(
    provider: &S,
    identities: &[String],
    lookup_timeout: Duration,
) -> RiskCheckResult {
    let lookups = identities.iter().map(|name| async move {
        let outcome = timeout(lookup_timeout, provider.lookup(name)).await;
        (name.as_str(), outcome)
    });

    let mut max_risk = 0.0_f64;
    let mut evidence = Vec::new();

    for (name, outcome) in join_all(lookups).await {
        match outcome {
            Ok(Ok(hit)) if hit.matched => {
                evidence.push(format!(
                    "Matched screening list for \"{name}\" (Score: {})",
                    hit.score
                ));
                max_risk = max_risk.max(hit.score);
            }
            Ok(Ok(_)) => {}
            Ok(Err(err)) => {
                warn!(identity = name, error = %err, "screening lookup failed");
                evidence.push(format!(
                    "Screening unavailable for \"{name}\" ({err}); identity unverified"
                ));
                max_risk = max_risk.max(UNVERIFIED_IDENTITY_RISK);
            }
            Err(_) => {
                warn!(
                    identity = name,
                    timeout_ms = lookup_timeout.as_millis() as u64,
                    "screening lookup timed out"
                );
                evidence.push(format!(
                    "Screening timed out for \"{name}\"; identity unverified"
                ));
                max_risk = max_risk.max(UNVERIFIED_IDENTITY_RISK);
            }
        }
    }

    RiskCheckResult::new(max_risk, evidence)
}

/// Single-source procurement and construction-sector exposure. The two
/// signals combine via max, not sum. Only the procurement finding carries
/// evidence; the sector heuristic raises risk silently.
pub(crate) async fn check_corruption_indicators(context: &CaseContext) -> RiskCheckResult {
    let mut risk = 0.0_f64;
    let mut evidence = Vec::new();

    if context
        .procurement
        .as_ref()
        .is_some_and(|terms| terms.single_source)
    {
        evidence.push("Procurement flagged: single-source vendor".to_string());
        risk = risk.max(SINGLE_SOURCE_RISK);
    }

    if let Some(target) = context.target.as_deref() {
        if let Some(signal) = CONSTRUCTION_SECTOR.probe(target) {
            risk = risk.max(signal);
        }
    }

    RiskCheckResult::new(risk, evidence)
}

/// High-impact industry exposure from the declared project profile.
pub(crate) async fn check_environmental_risk(context: &CaseContext) -> RiskCheckResult {
    let mut risk = 0.0_f64;
    let mut evidence = Vec::new();

    if let Some(industry) = context
        .project
        .as_ref()
        .and_then(|project| project.industry.as_deref())
    {
        if let Some(signal) = HIGH_IMPACT_INDUSTRIES.probe(industry) {
            evidence.push(format!("High-impact industry detected: {industry}"));
            risk = risk.max(signal);
        }
    }

    RiskCheckResult::new(risk, evidence)
}

/// Conflict/frontier region exposure from the declared project profile.
pub(crate) async fn check_human_rights(context: &CaseContext) -> RiskCheckResult {
    let mut risk = 0.0_f64;
    let mut evidence = Vec::new();

    if let Some(region) = context
        .project
        .as_ref()
        .and_then(|project| project.region.as_deref())
    {
        if let Some(signal) = SENSITIVE_REGIONS.probe(region) {
            evidence.push("Region flagged for enhanced human rights diligence".to_string());
            risk = risk.max(signal);
        }
    }

    RiskCheckResult::new(risk, evidence)
}

/// Placeholder until transactional fraud signals land. Still runs so
/// aggregation always sees a complete category set.
pub(crate) async fn check_fraud_indicators(_context: &CaseContext) -> RiskCheckResult {
    RiskCheckResult::clear()
}

/// Placeholder until data-handling signals land. Still runs so
/// aggregation always sees a complete category set.
pub(crate) async fn check_data_privacy(_context: &CaseContext) -> RiskCheckResult {
    RiskCheckResult::clear()
}
