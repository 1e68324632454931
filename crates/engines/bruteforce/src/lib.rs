//! Brute-force minimax chess engine.
//!
//! Every decision materializes the complete tree of positions reachable
//! within the depth limit, then folds it with a minimax walk that shuffles
//! siblings before comparing, so tied lines resolve to a different move from
//! game to game. Leaves are scored by the positional heuristic in [`eval`].
//!
//! Deliberately not a strength-optimized engine: no pruning, no
//! transposition table, no iterative deepening, no quiescence search.

pub mod eval;
pub mod search;
pub mod tree;

use chess_rules::{Color, Engine, Position, SearchLimits, SearchResult};
use rand::rngs::SmallRng;
use rand::SeedableRng;

pub use eval::{evaluate, SCORE_MAX, SCORE_MIN};
pub use search::{evaluate_tree, pick_move};
pub use tree::{build_tree, TreeNode};

/// Fixed-depth exhaustive minimax engine.
#[derive(Debug, Clone)]
pub struct BruteForceEngine {
    /// Node counter for statistics
    nodes: u64,
    /// Shuffle source for tie-breaking; owned so runs don't interfere
    rng: SmallRng,
}

impl BruteForceEngine {
    pub fn new() -> Self {
        Self {
            nodes: 0,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Engine with a deterministic shuffle source, for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            nodes: 0,
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for BruteForceEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for BruteForceEngine {
    fn choose_move(
        &mut self,
        pos: &Position,
        perspective: Color,
        limits: SearchLimits,
    ) -> SearchResult {
        self.nodes = 0;

        let (score, best_move) =
            search::pick_move(pos, perspective, limits.depth, &mut self.nodes, &mut self.rng);

        SearchResult {
            best_move,
            score,
            depth: limits.depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "BruteForce v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
