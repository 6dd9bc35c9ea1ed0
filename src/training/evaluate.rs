//! Head-to-head evaluation between agents.

use crate::agents::{Agent, QTable, QTableAgent};
use crate::core::Player;
use crate::env::{CheckersEnv, EnvConfig};
use crate::notation::square_name;
use crate::rules::GameOutcome;

use super::q_learning::OpponentKind;

/// Outcome counts over a series of games.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MatchupResult {
    pub black_wins: u32,
    pub red_wins: u32,
    pub draws: u32,
}

impl MatchupResult {
    /// Black's winrate over decisive games.
    #[must_use]
    pub fn black_winrate(&self) -> f64 {
        f64::from(self.black_wins) / f64::from((self.black_wins + self.red_wins).max(1))
    }

    /// Red's winrate over decisive games.
    #[must_use]
    pub fn red_winrate(&self) -> f64 {
        f64::from(self.red_wins) / f64::from((self.black_wins + self.red_wins).max(1))
    }

    #[must_use]
    pub fn games(&self) -> u32 {
        self.black_wins + self.red_wins + self.draws
    }
}

/// Play one seeded game to termination or truncation.
pub fn play_game(
    env: &mut CheckersEnv,
    black: &mut dyn Agent,
    red: &mut dyn Agent,
    seed: u64,
) -> GameOutcome {
    env.reset(Some(seed));
    loop {
        let mover = env.player_to_move();
        let agent: &mut dyn Agent = match mover {
            Player::Black => &mut *black,
            Player::Red => &mut *red,
        };
        let action = agent.select_move_index(env.board(), mover, env.legal_moves());
        if let Some(mv) = env.legal_moves().get(action) {
            log::trace!("{mover} plays {} {}", square_name(mv.from), square_name(mv.to));
        }
        let result = env.step(action);
        if result.terminated || result.truncated {
            return result.info.winner.unwrap_or(GameOutcome::Draw);
        }
    }
}

/// Play a seeded series; game `i` uses `base_seed + i`.
pub fn matchup(
    env: &mut CheckersEnv,
    black: &mut dyn Agent,
    red: &mut dyn Agent,
    games: u32,
    base_seed: u64,
) -> MatchupResult {
    let mut result = MatchupResult::default();
    for game in 0..games {
        match play_game(env, black, red, base_seed + u64::from(game)) {
            GameOutcome::Winner(Player::Black) => result.black_wins += 1,
            GameOutcome::Winner(Player::Red) => result.red_wins += 1,
            GameOutcome::Draw => result.draws += 1,
        }
    }
    log::debug!(
        "matchup over {} games: {}-{}-{} (B-R-draw)",
        games,
        result.black_wins,
        result.red_wins,
        result.draws
    );
    result
}

/// Winrate of the greedy table policy playing Black over `games` games.
#[must_use]
pub fn evaluate_q_table(
    q: &QTable,
    opponent: OpponentKind,
    games: u32,
    seed: u64,
    env_config: &EnvConfig,
) -> f64 {
    let mut env = CheckersEnv::new(env_config.clone());
    let mut black = QTableAgent::new(q, 0.0, seed);
    let mut red = opponent.build(seed + 1);

    let mut wins = 0u32;
    for game in 0..games {
        let outcome = play_game(&mut env, &mut black, red.as_mut(), seed + 1000 + u64::from(game));
        if outcome.is_winner(Player::Black) {
            wins += 1;
        }
    }
    f64::from(wins) / f64::from(games.max(1))
}
