use std::sync::RwLock;

use serde::{Deserialize, Serialize};

pub const DEFAULT_BLOCK_THRESHOLD: f64 = 50.0;
pub const DEFAULT_CAUTION_THRESHOLD: f64 = 70.0;

/// Documented default weights, in category order: sanctions, corruption,
/// env, human rights, fraud, data privacy, other.
pub const DEFAULT_WEIGHTS: [f64; 7] = [0.20, 0.15, 0.15, 0.10, 0.15, 0.10, 0.15];

/// Relative category weights as supplied by a policy author. Entries left
/// out of the document fall back to the defaults above; an explicit value,
/// including zero, is honored as written. The vector is normalized before
/// aggregation, so authors may write weights on any scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyWeights {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sanctions: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corruption: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub human_rights: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fraud: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_privacy: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other: Option<f64>,
}

impl PolicyWeights {
    /// Resolve the seven-entry weight vector. Missing entries take the
    /// documented defaults; negative or non-finite entries are zeroed. A
    /// vector with no remaining mass falls back to all defaults so the
    /// aggregator always has something to distribute.
    pub fn resolve(&self) -> [f64; 7] {
        let supplied = [
            self.sanctions.unwrap_or(DEFAULT_WEIGHTS[0]),
            self.corruption.unwrap_or(DEFAULT_WEIGHTS[1]),
            self.env.unwrap_or(DEFAULT_WEIGHTS[2]),
            self.human_rights.unwrap_or(DEFAULT_WEIGHTS[3]),
            self.fraud.unwrap_or(DEFAULT_WEIGHTS[4]),
            self.data_privacy.unwrap_or(DEFAULT_WEIGHTS[5]),
            self.other.unwrap_or(DEFAULT_WEIGHTS[6]),
        ];

        let sanitized = supplied.map(|weight| {
            if weight.is_finite() && weight > 0.0 {
                weight
            } else {
                0.0
            }
        });

        if sanitized.iter().sum::<f64>() > 0.0 {
            sanitized
        } else {
            DEFAULT_WEIGHTS
        }
    }
}

fn default_block() -> f64 {
    DEFAULT_BLOCK_THRESHOLD
}

fn default_caution() -> f64 {
    DEFAULT_CAUTION_THRESHOLD
}

/// Score cutoffs on the 0-100 scale. `block` is expected to sit at or
/// below `caution`; [`PolicyConfig::validate`] rejects inverted pairs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolicyThresholds {
    #[serde(default = "default_block")]
    pub block: f64,
    #[serde(default = "default_caution")]
    pub caution: f64,
}

impl Default for PolicyThresholds {
    fn default() -> Self {
        Self {
            block: DEFAULT_BLOCK_THRESHOLD,
            caution: DEFAULT_CAUTION_THRESHOLD,
        }
    }
}

/// Runtime policy injected into each evaluation. The engine reads it once
/// per call and never caches it; freshness is the policy store's problem.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    pub weights: PolicyWeights,
    pub thresholds: PolicyThresholds,
}

impl PolicyConfig {
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.thresholds.block > self.thresholds.caution {
            return Err(PolicyError::InvertedThresholds {
                block: self.thresholds.block,
                caution: self.thresholds.caution,
            });
        }
        Ok(())
    }
}

/// Policy configuration and store failures.
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    #[error("policy thresholds inverted: block {block} must not exceed caution {caution}")]
    InvertedThresholds { block: f64, caution: f64 },
    #[error("policy store unavailable: {0}")]
    Unavailable(String),
}

/// Collaborator owning the active policy. The engine only ever reads;
/// `replace` exists for the administrative surface.
pub trait PolicyStore: Send + Sync {
    fn read(&self) -> Result<PolicyConfig, PolicyError>;
    fn replace(&self, policy: PolicyConfig) -> Result<(), PolicyError>;
}

/// Lock-guarded policy store for the service binary and tests.
#[derive(Debug, Default)]
pub struct InMemoryPolicyStore {
    inner: RwLock<PolicyConfig>,
}

impl InMemoryPolicyStore {
    pub fn with_policy(policy: PolicyConfig) -> Self {
        Self {
            inner: RwLock::new(policy),
        }
    }
}

impl PolicyStore for InMemoryPolicyStore {
    fn read(&self) -> Result<PolicyConfig, PolicyError> {
        let guard = self
            .inner
            .read()
            .map_err(|_| PolicyError::Unavailable("policy lock poisoned".to_string()))?;
        Ok(guard.clone())
    }

    fn replace(&self, policy: PolicyConfig) -> Result<(), PolicyError> {
        policy.validate()?;
        let mut guard = self
            .inner
            .write()
            .map_err(|_| PolicyError::Unavailable("policy lock poisoned".to_string()))?;
        *guard = policy;
        Ok(())
    }
}
