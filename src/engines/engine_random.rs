//! Random-move engine.
//!
//! Picks uniformly among the candidate moves of the side to move. Seed it to
//! replay a game exactly.

use log::debug;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::CandidateMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;

pub struct RandomEngine {
    move_generator: CandidateMoveGenerator,
    rng: StdRng,
}

impl RandomEngine {
    /// Seeded from the operating system.
    pub fn new() -> Self {
        Self {
            move_generator: CandidateMoveGenerator,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic sequence of choices for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            move_generator: CandidateMoveGenerator,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(&mut self, game_state: &GameState) -> ChessResult<EngineOutput> {
        let moves = self.move_generator.generate_moves_for(game_state);

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("random_engine candidate_moves {}", moves.len()));
        debug!(
            "random engine: {} candidates for {}",
            moves.len(),
            game_state.current_player()
        );

        if moves.is_empty() {
            return Ok(out);
        }

        let picked = moves
            .as_slice()
            .choose(&mut self.rng)
            .ok_or_else(|| ChessErrors::EngineFailure("failed to choose a random move".to_owned()))?;

        debug!(
            "random engine: picked {} {} -> {}",
            picked.piece, picked.origin, picked.destination
        );
        out.best_move = Some((picked.origin, picked.destination));
        Ok(out)
    }
}
