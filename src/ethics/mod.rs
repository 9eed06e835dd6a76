//! Policy-aware ethics screening engine.
//!
//! A case evaluation fans out six risk checks concurrently, normalizes
//! their risk values onto a risk-inverted 0-100 scale, combines the
//! category scores under the injected policy's weights, classifies the
//! result against the policy's thresholds, and packages everything into an
//! immutable [`EthicsReport`]. The engine holds no policy state of its
//! own: each call is a pure function of the payload, the policy, and the
//! screening responses.

pub(crate) mod checks;
pub mod classify;
pub mod domain;
mod mitigation;
pub mod policy;
pub mod router;
pub mod screening;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    CaseContext, CasePayload, CategoryFlag, EthicsFlag, EthicsReport, MitigationStep,
    ProcurementTerms, ProjectProfile, RiskCategory, RiskCheckResult, ScoreBreakdown,
};
pub use policy::{
    InMemoryPolicyStore, PolicyConfig, PolicyError, PolicyStore, PolicyThresholds, PolicyWeights,
};
pub use router::ethics_router;
pub use screening::{
    ScreeningError, ScreeningHit, ScreeningProvider, StaticWatchlist, WatchlistEntry,
};
pub use service::{EthicsService, EthicsServiceError};

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::debug;

pub const ENGINE_VERSION: &str = "ethics-v1.2.0-policy-aware";

/// Score credited to the reserved "other" category until it has signals.
const BASELINE_OTHER_SCORE: u8 = 100;

const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(3);

/// Evaluation failures. Malformed payloads are not failures: missing
/// fields degrade to zero risk inside the checks.
#[derive(Debug, thiserror::Error)]
pub enum EvaluationError {
    #[error(transparent)]
    Policy(#[from] PolicyError),
}

/// Stateless screening engine over a [`ScreeningProvider`].
pub struct EthicsEngine<S> {
    screening: Arc<S>,
    lookup_timeout: Duration,
}

impl<S: ScreeningProvider> EthicsEngine<S> {
    pub fn new(screening: Arc<S>) -> Self {
        Self::with_lookup_timeout(screening, DEFAULT_LOOKUP_TIMEOUT)
    }

    pub fn with_lookup_timeout(screening: Arc<S>, lookup_timeout: Duration) -> Self {
        Self {
            screening,
            lookup_timeout,
        }
    }

    /// Run all six checks concurrently against the case and assemble the
    /// report under the supplied policy. The only I/O is the screening
    /// lookup issued per target identity.
    pub async fn evaluate(
        &self,
        payload: &CasePayload,
        policy: &PolicyConfig,
    ) -> Result<EthicsReport, EvaluationError> {
        policy.validate()?;

        let identities = extract_identities(payload);
        let context = payload.context.clone().unwrap_or_default();

        let (sanctions, corruption, environmental, human_rights, fraud, data_privacy) = tokio::join!(
            checks::check_sanctions_and_pep(
                self.screening.as_ref(),
                &identities,
                self.lookup_timeout
            ),
            checks::check_corruption_indicators(&context),
            checks::check_environmental_risk(&context),
            checks::check_human_rights(&context),
            checks::check_fraud_indicators(&context),
            checks::check_data_privacy(&context),
        );

        let sanctions_score = scoring::score_from_risk(sanctions.risk());
        let breakdown = ScoreBreakdown {
            sanctions_score,
            // PEP restates the sanctions check rather than adding a signal.
            pep_score: sanctions_score,
            corruption_score: scoring::score_from_risk(corruption.risk()),
            env_score: scoring::score_from_risk(environmental.risk()),
            human_rights_score: scoring::score_from_risk(human_rights.risk()),
            fraud_score: scoring::score_from_risk(fraud.risk()),
            data_privacy_score: scoring::score_from_risk(data_privacy.risk()),
            other_score: BASELINE_OTHER_SCORE,
        };

        let scores = [
            f64::from(breakdown.sanctions_score),
            f64::from(breakdown.corruption_score),
            f64::from(breakdown.env_score),
            f64::from(breakdown.human_rights_score),
            f64::from(breakdown.fraud_score),
            f64::from(breakdown.data_privacy_score),
            f64::from(breakdown.other_score),
        ];
        let weights = policy.weights.resolve();
        let overall_score = scoring::combine_scores(&scores, &weights);
        let overall_flag = classify::overall_flag(overall_score, &policy.thresholds);

        let findings = [
            (
                RiskCategory::Sanctions,
                &sanctions,
                breakdown.sanctions_score,
            ),
            (
                RiskCategory::Corruption,
                &corruption,
                breakdown.corruption_score,
            ),
            (
                RiskCategory::Environmental,
                &environmental,
                breakdown.env_score,
            ),
            (
                RiskCategory::HumanRights,
                &human_rights,
                breakdown.human_rights_score,
            ),
        ];

        let flags = findings
            .into_iter()
            .filter(|(_, result, _)| result.has_evidence())
            .map(|(category, result, score)| CategoryFlag {
                name: category.display_name().to_string(),
                flag: classify::category_flag(category, score),
                reason: category.reason().to_string(),
                evidence: result.evidence().to_vec(),
            })
            .collect::<Vec<_>>();

        debug!(
            overall_score,
            flag = overall_flag.label(),
            identities = identities.len(),
            findings = flags.len(),
            "ethics evaluation complete"
        );

        Ok(EthicsReport {
            overall_score,
            overall_flag,
            breakdown,
            flags,
            mitigation: mitigation::plan_for(overall_flag),
            timestamp: Utc::now(),
            version: ENGINE_VERSION.to_string(),
        })
    }
}

/// Collect target identities from both payload levels. Duplicate strings
/// are screened once; blank entries are dropped.
fn extract_identities(payload: &CasePayload) -> Vec<String> {
    let candidates = [
        payload.context.as_ref().and_then(|ctx| ctx.target.as_ref()),
        payload.target.as_ref(),
    ];

    let mut identities: Vec<String> = Vec::new();
    for candidate in candidates.into_iter().flatten() {
        let trimmed = candidate.trim();
        if !trimmed.is_empty() && !identities.iter().any(|existing| existing == trimmed) {
            identities.push(trimmed.to_string());
        }
    }
    identities
}
