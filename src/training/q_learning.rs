//! Tabular Q-learning against a fixed opponent.
//!
//! The learner always plays Black. Opponent plies — including whole jump
//! chains — are folded into the learner's TD target with their rewards
//! negated, so a loss inflicted by the opponent propagates as a negative
//! terminal target.

use serde::{Deserialize, Serialize};

use crate::agents::{Agent, HeuristicAgent, QTable, RandomAgent};
use crate::core::{GameRng, Player};
use crate::env::{CheckersEnv, EnvConfig};

use super::evaluate::evaluate_q_table;

/// Opponent used for training and greedy evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpponentKind {
    Random,
    Heuristic,
}

impl OpponentKind {
    /// Construct the opponent, seeding it where relevant.
    #[must_use]
    pub fn build(self, seed: u64) -> Box<dyn Agent> {
        match self {
            OpponentKind::Random => Box::new(RandomAgent::new(seed)),
            OpponentKind::Heuristic => Box::new(HeuristicAgent::new()),
        }
    }
}

/// Configuration for a training run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrainConfig {
    pub episodes: usize,

    /// Learning rate.
    pub alpha: f64,

    /// Discount factor.
    pub gamma: f64,

    /// Exploration schedule: start value, floor, and per-episode
    /// multiplicative decay.
    pub epsilon_start: f64,
    pub epsilon_end: f64,
    pub epsilon_decay: f64,

    /// Episodes between greedy evaluations. 0 disables evaluation.
    pub eval_interval: usize,

    /// Games per evaluation matchup.
    pub eval_games: u32,

    pub seed: u64,

    pub env: EnvConfig,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            episodes: 8000,
            alpha: 0.15,
            gamma: 0.99,
            epsilon_start: 1.0,
            epsilon_end: 0.05,
            epsilon_decay: 0.9993,
            eval_interval: 250,
            eval_games: 80,
            seed: 42,
            env: EnvConfig::default(),
        }
    }
}

impl TrainConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_episodes(mut self, episodes: usize) -> Self {
        self.episodes = episodes;
        self
    }

    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    #[must_use]
    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    #[must_use]
    pub fn with_epsilon(mut self, start: f64, end: f64, decay: f64) -> Self {
        self.epsilon_start = start;
        self.epsilon_end = end;
        self.epsilon_decay = decay;
        self
    }

    #[must_use]
    pub fn with_eval(mut self, interval: usize, games: u32) -> Self {
        self.eval_interval = interval;
        self.eval_games = games;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_env(mut self, env: EnvConfig) -> Self {
        self.env = env;
        self
    }
}

/// Greedy winrates measured during training.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvalPoint {
    /// Episode count at measurement time (1-based).
    pub episode: usize,
    pub vs_random: f64,
    pub vs_heuristic: f64,
}

/// Everything produced by a training run.
#[derive(Clone, Debug)]
pub struct TrainResult {
    pub q: QTable,
    /// Total reward per episode, from the learner's perspective.
    pub rewards: Vec<f64>,
    pub episode_lengths: Vec<u32>,
    pub evals: Vec<EvalPoint>,
}

/// Simple moving average; inputs shorter than `window` come back unchanged.
#[must_use]
pub fn moving_average(values: &[f64], window: usize) -> Vec<f64> {
    if window == 0 || values.len() < window {
        return values.to_vec();
    }
    values
        .windows(window)
        .map(|w| w.iter().sum::<f64>() / window as f64)
        .collect()
}

/// Run tabular Q-learning and return the learned table with its metrics.
pub fn train_q_learning(config: &TrainConfig, opponent_kind: OpponentKind) -> TrainResult {
    let mut rng = GameRng::new(config.seed);
    let mut env = CheckersEnv::new(config.env.clone());
    let mut q = QTable::new();
    let mut opponent = opponent_kind.build(config.seed + 7);

    let mut rewards = Vec::with_capacity(config.episodes);
    let mut episode_lengths = Vec::with_capacity(config.episodes);
    let mut evals = Vec::new();
    let mut epsilon = config.epsilon_start;

    for episode in 0..config.episodes {
        let (mut obs, _) = env.reset(Some(config.seed + episode as u64));
        let mut done = false;
        let mut total_reward = 0.0;
        let mut steps = 0u32;

        while !done {
            if env.player_to_move() != Player::Black {
                let action = select(opponent.as_mut(), &env);
                let r = env.step(action);
                obs = r.observation;
                total_reward -= r.reward;
                done = r.terminated || r.truncated;
                steps += 1;
                continue;
            }

            let state = obs;
            let legal_n = env.legal_moves().len();
            if legal_n == 0 {
                break;
            }

            let action = if rng.gen_f64() < epsilon {
                rng.gen_range_usize(0..legal_n)
            } else {
                q.greedy_action(&state, legal_n)
            };

            let r = env.step(action);
            let mut next_obs = r.observation;
            total_reward += r.reward;
            done = r.terminated || r.truncated;
            steps += 1;

            if done {
                q.nudge(state, action, r.reward, config.alpha);
                obs = next_obs;
                continue;
            }

            // Let the opponent answer (possibly a whole jump chain) before
            // bootstrapping from the learner's next decision point.
            let mut terminal_reward = 0.0;
            while !done && env.player_to_move() != Player::Black {
                let action_opp = select(opponent.as_mut(), &env);
                let ro = env.step(action_opp);
                next_obs = ro.observation;
                total_reward -= ro.reward;
                done = ro.terminated || ro.truncated;
                steps += 1;
                if done {
                    terminal_reward = -ro.reward;
                    break;
                }
            }

            let target = if done {
                terminal_reward
            } else {
                let next_legal_n = env.legal_moves().len();
                let next_best = if next_legal_n > 0 {
                    q.best_value(&next_obs, next_legal_n)
                } else {
                    0.0
                };
                r.reward + config.gamma * next_best
            };
            q.nudge(state, action, target, config.alpha);
            obs = next_obs;
        }

        rewards.push(total_reward);
        episode_lengths.push(steps);
        epsilon = (epsilon * config.epsilon_decay).max(config.epsilon_end);

        if config.eval_interval > 0 && (episode + 1) % config.eval_interval == 0 {
            let eval_seed = config.seed + 50_000 + episode as u64;
            let vs_random = evaluate_q_table(
                &q,
                OpponentKind::Random,
                config.eval_games,
                eval_seed,
                &config.env,
            );
            let vs_heuristic = evaluate_q_table(
                &q,
                OpponentKind::Heuristic,
                config.eval_games,
                eval_seed + 1000,
                &config.env,
            );
            evals.push(EvalPoint {
                episode: episode + 1,
                vs_random,
                vs_heuristic,
            });
            log::info!(
                "episode {}/{} | eps={:.3} | wr_vs_random={:.2} | wr_vs_heuristic={:.2}",
                episode + 1,
                config.episodes,
                epsilon,
                vs_random,
                vs_heuristic
            );
        }
    }

    TrainResult {
        q,
        rewards,
        episode_lengths,
        evals,
    }
}

fn select(agent: &mut dyn Agent, env: &CheckersEnv) -> usize {
    agent.select_move_index(env.board(), env.player_to_move(), env.legal_moves())
}
