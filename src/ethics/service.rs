use std::sync::Arc;
use std::time::Duration;

use super::domain::{CasePayload, EthicsReport};
use super::policy::{PolicyConfig, PolicyError, PolicyStore};
use super::screening::{ScreeningError, ScreeningHit, ScreeningProvider};
use super::{EthicsEngine, EvaluationError};

/// Service composing the engine with its two collaborators: the policy
/// store supplying weights and thresholds, and the screening provider
/// answering identity lookups. The HTTP router and the CLI both sit on
/// top of this facade.
pub struct EthicsService<S, P> {
    engine: EthicsEngine<S>,
    screening: Arc<S>,
    policies: Arc<P>,
}

impl<S, P> EthicsService<S, P>
where
    S: ScreeningProvider + 'static,
    P: PolicyStore + 'static,
{
    pub fn new(screening: Arc<S>, policies: Arc<P>, lookup_timeout: Duration) -> Self {
        let engine = EthicsEngine::with_lookup_timeout(screening.clone(), lookup_timeout);
        Self {
            engine,
            screening,
            policies,
        }
    }

    /// Evaluate a case against the currently active policy. The policy is
    /// read fresh for every call.
    pub async fn evaluate(&self, payload: &CasePayload) -> Result<EthicsReport, EthicsServiceError> {
        let policy = self.policies.read()?;
        Ok(self.engine.evaluate(payload, &policy).await?)
    }

    /// The active policy as the store reports it.
    pub fn policy(&self) -> Result<PolicyConfig, PolicyError> {
        self.policies.read()
    }

    /// Replace the active policy. Invalid documents are rejected by the
    /// store and leave the previous policy in force.
    pub fn update_policy(&self, policy: PolicyConfig) -> Result<(), PolicyError> {
        self.policies.replace(policy)
    }

    /// Direct screening lookup, bypassing the engine.
    pub async fn screen(&self, name: &str) -> Result<ScreeningHit, ScreeningError> {
        self.screening.lookup(name).await
    }
}

/// Error raised by the ethics service facade.
#[derive(Debug, thiserror::Error)]
pub enum EthicsServiceError {
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
    #[error(transparent)]
    Policy(#[from] PolicyError),
    #[error(transparent)]
    Screening(#[from] ScreeningError),
}
