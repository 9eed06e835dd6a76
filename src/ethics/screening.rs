use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Outcome of one watchlist lookup. `score` is a match confidence on
/// [0,1] and doubles as the risk value for the sanctions check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreeningHit {
    pub matched: bool,
    pub score: f64,
}

impl ScreeningHit {
    pub const fn miss() -> Self {
        Self {
            matched: false,
            score: 0.0,
        }
    }
}

/// Screening transport failures. Timeouts are enforced by the caller, so
/// providers only report their own unavailability.
#[derive(Debug, thiserror::Error)]
pub enum ScreeningError {
    #[error("screening provider unavailable: {0}")]
    Unavailable(String),
}

/// External sanctions/PEP lookup service. The engine issues one call per
/// target identity; implementations must be safe to call concurrently.
#[async_trait]
pub trait ScreeningProvider: Send + Sync {
    async fn lookup(&self, name: &str) -> Result<ScreeningHit, ScreeningError>;
}

/// A single restricted-party entry with its match confidence.
#[derive(Debug, Clone, PartialEq)]
pub struct WatchlistEntry {
    pub name: String,
    pub score: f64,
}

impl WatchlistEntry {
    pub fn new(name: &str, score: f64) -> Self {
        Self {
            name: name.to_string(),
            score,
        }
    }
}

/// Deterministic in-memory screening provider backing the service binary
/// and tests. A match is a case-insensitive containment in either
/// direction; the strongest matching entry wins. Real deployments swap in
/// a provider-backed implementation of [`ScreeningProvider`].
#[derive(Debug, Clone, Default)]
pub struct StaticWatchlist {
    entries: Vec<WatchlistEntry>,
}

impl StaticWatchlist {
    pub fn new(entries: Vec<WatchlistEntry>) -> Self {
        Self { entries }
    }

    /// Demo watchlist used when no external provider is configured.
    pub fn seeded() -> Self {
        Self::new(vec![
            WatchlistEntry::new("Viktor Orlov Holdings", 0.92),
            WatchlistEntry::new("Meridian Petro Trading", 0.8),
            WatchlistEntry::new("Castellan Group", 0.65),
            WatchlistEntry::new("Aurora Frontier Logistics", 0.55),
        ])
    }
}

#[async_trait]
impl ScreeningProvider for StaticWatchlist {
    async fn lookup(&self, name: &str) -> Result<ScreeningHit, ScreeningError> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(ScreeningHit::miss());
        }

        let mut best: Option<f64> = None;
        for entry in &self.entries {
            let listed = entry.name.to_lowercase();
            if listed.contains(&needle) || needle.contains(&listed) {
                best = Some(best.map_or(entry.score, |score| score.max(entry.score)));
            }
        }

        Ok(match best {
            Some(score) => ScreeningHit {
                matched: true,
                score: score.clamp(0.0, 1.0),
            },
            None => ScreeningHit::miss(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lookup_matches_case_insensitively() {
        let watchlist = StaticWatchlist::seeded();
        let hit = watchlist
            .lookup("viktor orlov holdings")
            .await
            .expect("lookup succeeds");
        assert!(hit.matched);
        assert_eq!(hit.score, 0.92);
    }

    #[tokio::test]
    async fn lookup_matches_partial_names_in_either_direction() {
        let watchlist = StaticWatchlist::seeded();

        let shorter = watchlist.lookup("Castellan").await.expect("lookup");
        assert!(shorter.matched);

        let longer = watchlist
            .lookup("Castellan Group International BV")
            .await
            .expect("lookup");
        assert!(longer.matched);
        assert_eq!(longer.score, 0.65);
    }

    #[tokio::test]
    async fn lookup_misses_unknown_and_blank_names() {
        let watchlist = StaticWatchlist::seeded();

        let unknown = watchlist.lookup("Harborview Dairy Co-op").await.expect("lookup");
        assert_eq!(unknown, ScreeningHit::miss());

        let blank = watchlist.lookup("   ").await.expect("lookup");
        assert_eq!(blank, ScreeningHit::miss());
    }

    #[tokio::test]
    async fn strongest_overlapping_entry_wins() {
        let watchlist = StaticWatchlist::new(vec![
            WatchlistEntry::new("Orlov", 0.4),
            WatchlistEntry::new("Orlov Holdings", 0.9),
        ]);

        let hit = watchlist.lookup("Orlov Holdings").await.expect("lookup");
        assert!(hit.matched);
        assert_eq!(hit.score, 0.9);
    }
}
