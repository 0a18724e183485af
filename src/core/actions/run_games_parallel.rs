use rayon::prelude::*;

use crate::core::game::chaos_game::ChaosGame;

/// Steps each game `steps` times on the rayon pool. Games share nothing, so
/// every canvas ends up exactly as a sequential `run_steps` would leave it.
pub fn run_games_parallel(games: &mut [ChaosGame], steps: u64) {
    games.par_iter_mut().for_each(|game| game.run_steps(steps));
}
