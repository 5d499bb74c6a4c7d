#[derive(Debug, Clone)]
pub struct ScoringParams {
    /// Multiplier applied to a confidence recorded through a substring match.
    pub partial_match_factor: f64,
    /// Weight ratio between consecutive ranks when combining one category's scores.
    pub rank_decay: f64,
    /// Category labels shorter than this never take part in substring matching.
    pub min_partial_len: usize,
    pub top_n: usize,
    pub round_decimals: u32,
}

impl ScoringParams {
    pub fn default_v1() -> Self {
        Self {
            partial_match_factor: 0.8,
            rank_decay: 0.8,
            min_partial_len: 3,
            top_n: 3,
            round_decimals: 3,
        }
    }
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self::default_v1()
    }
}
