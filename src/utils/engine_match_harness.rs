//! Engine-vs-engine game runner.
//!
//! Plays two engines against each other on a fresh session until a ply limit
//! or until the side to move has no candidate move. Every proposal goes
//! through `GameState::apply_move`, so an engine that proposes a
//! non-candidate move ends the match with that error.

use log::{debug, info};

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    pub max_plies: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { max_plies: 200 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTermination {
    MaxPlies,
    /// The named side had no candidate move.
    NoMoves(Color),
}

#[derive(Debug, Clone)]
pub struct MatchOutcome {
    pub plies: usize,
    pub final_state: GameState,
    pub termination: MatchTermination,
}

pub fn play_engine_match(
    light: &mut dyn Engine,
    dark: &mut dyn Engine,
    config: MatchConfig,
) -> ChessResult<MatchOutcome> {
    let mut game = GameState::new_game();
    light.new_game();
    dark.new_game();

    let mut plies = 0usize;
    let termination = loop {
        if plies >= config.max_plies {
            break MatchTermination::MaxPlies;
        }

        let side = game.current_player();
        let engine: &mut dyn Engine = match side {
            Color::Light => &mut *light,
            Color::Dark => &mut *dark,
        };

        let output = engine.choose_move(&game)?;
        let Some((origin, destination)) = output.best_move else {
            break MatchTermination::NoMoves(side);
        };

        let record = game.apply_move(origin, destination)?;
        debug!(
            "ply {}: {} ({}) {} -> {}",
            plies + 1,
            record.piece,
            engine.name(),
            record.origin,
            record.destination
        );
        plies += 1;
    };

    info!(
        "match finished after {plies} plies ({termination:?}), {} pieces left",
        game.board().piece_count()
    );

    Ok(MatchOutcome {
        plies,
        final_state: game,
        termination,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_errors::ChessErrors;
    use crate::engines::engine_random::RandomEngine;
    use crate::engines::engine_trait::EngineOutput;
    use crate::game_state::chess_types::Square;

    #[test]
    fn random_match_runs_to_ply_limit() -> ChessResult<()> {
        let mut light = RandomEngine::with_seed(11);
        let mut dark = RandomEngine::with_seed(12);
        let outcome = play_engine_match(&mut light, &mut dark, MatchConfig { max_plies: 30 })?;

        assert_eq!(outcome.termination, MatchTermination::MaxPlies);
        assert_eq!(outcome.plies, 30);
        assert_eq!(outcome.final_state.history().len(), 30);
        assert_eq!(outcome.final_state.current_player(), Color::Light);
        Ok(())
    }

    #[test]
    fn seeded_matches_replay_identically() -> ChessResult<()> {
        let run = || -> ChessResult<MatchOutcome> {
            play_engine_match(
                &mut RandomEngine::with_seed(5),
                &mut RandomEngine::with_seed(6),
                MatchConfig { max_plies: 24 },
            )
        };
        let first = run()?;
        let second = run()?;
        assert_eq!(first.final_state, second.final_state);
        Ok(())
    }

    struct PassingEngine;

    impl Engine for PassingEngine {
        fn name(&self) -> &str {
            "Passing"
        }

        fn choose_move(&mut self, _game_state: &GameState) -> ChessResult<EngineOutput> {
            Ok(EngineOutput::default())
        }
    }

    struct BogusEngine;

    impl Engine for BogusEngine {
        fn name(&self) -> &str {
            "Bogus"
        }

        fn choose_move(&mut self, _game_state: &GameState) -> ChessResult<EngineOutput> {
            Ok(EngineOutput {
                best_move: Some((Square::new(6, 4), Square::new(3, 4))),
                info_lines: Vec::new(),
            })
        }
    }

    #[test]
    fn engine_without_a_move_ends_the_match() -> ChessResult<()> {
        let mut light = RandomEngine::with_seed(3);
        let outcome = play_engine_match(&mut light, &mut PassingEngine, MatchConfig::default())?;
        assert_eq!(outcome.termination, MatchTermination::NoMoves(Color::Dark));
        assert_eq!(outcome.plies, 1);
        Ok(())
    }

    #[test]
    fn illegal_proposal_surfaces_as_error() {
        let result = play_engine_match(&mut BogusEngine, &mut PassingEngine, MatchConfig::default());
        assert!(matches!(
            result,
            Err(ChessErrors::IllegalDestination { .. })
        ));
    }
}
