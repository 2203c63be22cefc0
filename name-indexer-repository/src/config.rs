//! Configuration types for search execution.

/// Query-shaping configuration for rescored name searches.
///
/// The initial match phase keeps recall wide and cheap; the rescore phase
/// re-ranks the top `rescore_window` hits with the plugin's name-scoring
/// function. Zeroing `query_weight` makes the final ranking come entirely
/// from the rescore phase.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of hits returned.
    pub max_results: usize,
    /// Number of top hits re-ranked by the rescore phase.
    pub rescore_window: usize,
    /// Weight of the initial match score in the final score.
    pub query_weight: f64,
    /// Weight of the rescore-phase score in the final score.
    pub rescore_query_weight: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: 100,
            rescore_window: 200,
            query_weight: 0.0,
            rescore_query_weight: 1.0,
        }
    }
}

impl SearchConfig {
    /// Create a config with a custom result limit, keeping rescore defaults.
    pub fn with_max_results(max_results: usize) -> Self {
        Self {
            max_results,
            ..Self::default()
        }
    }
}
