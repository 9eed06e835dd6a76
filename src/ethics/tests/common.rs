use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::response::Response;
use serde_json::Value;

use crate::ethics::domain::{
    CaseContext, CasePayload, ProcurementTerms, ProjectProfile,
};
use crate::ethics::policy::{InMemoryPolicyStore, PolicyConfig, PolicyThresholds, PolicyWeights};
use crate::ethics::screening::{
    ScreeningError, ScreeningHit, ScreeningProvider, StaticWatchlist, WatchlistEntry,
};
use crate::ethics::service::EthicsService;
use crate::ethics::{ethics_router, EthicsEngine};

pub(super) const LISTED_TARGET: &str = "Vostok Directorate";

pub(super) fn watchlist() -> StaticWatchlist {
    StaticWatchlist::new(vec![
        WatchlistEntry::new(LISTED_TARGET, 0.8),
        WatchlistEntry::new("Halvard Shipping Concern", 0.4),
    ])
}

pub(super) fn engine() -> EthicsEngine<StaticWatchlist> {
    EthicsEngine::new(Arc::new(watchlist()))
}

pub(super) fn engine_with<S: ScreeningProvider>(
    provider: S,
    lookup_timeout: Duration,
) -> EthicsEngine<S> {
    EthicsEngine::with_lookup_timeout(Arc::new(provider), lookup_timeout)
}

pub(super) fn default_policy() -> PolicyConfig {
    PolicyConfig::default()
}

pub(super) fn policy_with_thresholds(block: f64, caution: f64) -> PolicyConfig {
    PolicyConfig {
        thresholds: PolicyThresholds { block, caution },
        ..PolicyConfig::default()
    }
}

pub(super) fn sanctions_only_weights() -> PolicyConfig {
    PolicyConfig {
        weights: PolicyWeights {
            sanctions: Some(1.0),
            corruption: Some(0.0),
            env: Some(0.0),
            human_rights: Some(0.0),
            fraud: Some(0.0),
            data_privacy: Some(0.0),
            other: Some(0.0),
        },
        ..PolicyConfig::default()
    }
}

pub(super) fn clean_payload() -> CasePayload {
    CasePayload::default()
}

pub(super) fn sanctioned_payload() -> CasePayload {
    CasePayload {
        target: Some(LISTED_TARGET.to_string()),
        context: None,
    }
}

pub(super) fn single_source_payload() -> CasePayload {
    CasePayload {
        target: None,
        context: Some(CaseContext {
            procurement: Some(ProcurementTerms {
                single_source: true,
            }),
            ..CaseContext::default()
        }),
    }
}

pub(super) fn mining_payload() -> CasePayload {
    CasePayload {
        target: None,
        context: Some(CaseContext {
            project: Some(ProjectProfile {
                industry: Some("Mining".to_string()),
                region: None,
            }),
            ..CaseContext::default()
        }),
    }
}

pub(super) fn frontier_region_payload() -> CasePayload {
    CasePayload {
        target: None,
        context: Some(CaseContext {
            project: Some(ProjectProfile {
                industry: None,
                region: Some("Northern frontier corridor".to_string()),
            }),
            ..CaseContext::default()
        }),
    }
}

pub(super) fn construction_target_payload() -> CasePayload {
    CasePayload {
        target: None,
        context: Some(CaseContext {
            target: Some("Apex Construction Group".to_string()),
            ..CaseContext::default()
        }),
    }
}

/// Provider that refuses every lookup, for degraded-evidence scenarios.
pub(super) struct FailingScreening;

#[async_trait]
impl ScreeningProvider for FailingScreening {
    async fn lookup(&self, _name: &str) -> Result<ScreeningHit, ScreeningError> {
        Err(ScreeningError::Unavailable("provider offline".to_string()))
    }
}

/// Provider that never answers, for timeout scenarios.
pub(super) struct StallingScreening;

#[async_trait]
impl ScreeningProvider for StallingScreening {
    async fn lookup(&self, _name: &str) -> Result<ScreeningHit, ScreeningError> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(ScreeningHit::miss())
    }
}

pub(super) fn build_service() -> (
    Arc<EthicsService<StaticWatchlist, InMemoryPolicyStore>>,
    Arc<InMemoryPolicyStore>,
) {
    let policies = Arc::new(InMemoryPolicyStore::default());
    let service = Arc::new(EthicsService::new(
        Arc::new(watchlist()),
        policies.clone(),
        Duration::from_secs(1),
    ));
    (service, policies)
}

pub(super) fn router_with_service(
    service: Arc<EthicsService<StaticWatchlist, InMemoryPolicyStore>>,
) -> axum::Router {
    ethics_router(service)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
