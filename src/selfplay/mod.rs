use crate::core::setup::default_position;
use crate::core::Side;
use crate::game::{Game, GameEnd};
use crate::player::ai::AIConfig;
use crate::player::{NegamaxAI, PlayerController, RandomAI};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// 対戦させる戦略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    Negamax,
    Random,
}

pub struct SelfPlayConfig {
    pub num_games: usize,
    pub max_plies: usize,
    pub first: Strategy,
    pub second: Strategy,
    pub ai: AIConfig,
    /// 各対局のシード = base_seed + 対局番号
    pub base_seed: u64,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            max_plies: 200,
            first: Strategy::Negamax,
            second: Strategy::Random,
            ai: AIConfig::default(),
            base_seed: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Option<Side>,
    pub end: GameEnd,
    pub plies: usize,
    pub time_ms: u128,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelfPlayStats {
    pub started_at: String,
    pub total_games: usize,
    pub first_wins: usize,
    pub second_wins: usize,
    pub draws: usize,
    pub avg_plies: f64,
    pub avg_time_ms: f64,
    pub first_strategy: Strategy,
    pub second_strategy: Strategy,
    pub games: Vec<GameResult>,
}

impl SelfPlayStats {
    pub fn new(first: Strategy, second: Strategy) -> Self {
        Self {
            started_at: chrono::Local::now().to_rfc3339(),
            total_games: 0,
            first_wins: 0,
            second_wins: 0,
            draws: 0,
            avg_plies: 0.0,
            avg_time_ms: 0.0,
            first_strategy: first,
            second_strategy: second,
            games: Vec::new(),
        }
    }

    pub fn add_result(&mut self, result: GameResult) {
        self.total_games += 1;
        match result.winner {
            Some(Side::First) => self.first_wins += 1,
            Some(Side::Second) => self.second_wins += 1,
            None => self.draws += 1,
        }
        self.games.push(result);
        self.recalculate_averages();
    }

    fn recalculate_averages(&mut self) {
        if self.games.is_empty() {
            return;
        }
        let total_plies: usize = self.games.iter().map(|g| g.plies).sum();
        let total_time: u128 = self.games.iter().map(|g| g.time_ms).sum();
        self.avg_plies = total_plies as f64 / self.games.len() as f64;
        self.avg_time_ms = total_time as f64 / self.games.len() as f64;
    }
}

fn build_controller(
    strategy: Strategy,
    name: &str,
    ai: &AIConfig,
    seed: u64,
) -> Box<dyn PlayerController> {
    match strategy {
        Strategy::Negamax => {
            let mut config = ai.clone();
            config.search.seed = Some(seed);
            Box::new(NegamaxAI::from_config(name, &config))
        }
        Strategy::Random => Box::new(RandomAI::seeded(name, seed)),
    }
}

fn run_one(config: &SelfPlayConfig, game_num: usize) -> anyhow::Result<GameResult> {
    let start_time = Instant::now();
    let seed = config.base_seed.wrapping_add(game_num as u64);

    // 両者の乱数が同じ列にならないようにずらす
    let first = build_controller(config.first, "First", &config.ai, seed);
    let second = build_controller(
        config.second,
        "Second",
        &config.ai,
        seed ^ 0x9E37_79B9_7F4A_7C15,
    );

    let mut game = Game::new(default_position()?);
    let outcome = game.play(first.as_ref(), second.as_ref(), config.max_plies)?;

    let result = GameResult {
        winner: outcome.winner,
        end: outcome.end,
        plies: outcome.plies,
        time_ms: start_time.elapsed().as_millis(),
    };
    tracing::info!(
        game = game_num + 1,
        winner = ?result.winner,
        plies = result.plies,
        time_ms = result.time_ms as u64,
        "self-play game finished"
    );
    Ok(result)
}

/// 独立した対局を並列に回して集計する
pub fn run_selfplay(config: &SelfPlayConfig) -> anyhow::Result<SelfPlayStats> {
    let results: Vec<GameResult> = (0..config.num_games)
        .into_par_iter()
        .map(|game_num| run_one(config, game_num))
        .collect::<anyhow::Result<_>>()?;

    let mut stats = SelfPlayStats::new(config.first, config.second);
    for result in results {
        stats.add_result(result);
    }
    Ok(stats)
}
