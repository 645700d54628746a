use super::config::SearchConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 探索ノードごとに足す同点崩しの揺らぎ
#[derive(Debug, Clone)]
pub enum Noise {
    /// 揺らぎなし (決定的な探索)
    Disabled,
    /// [-amplitude, amplitude] の一様乱数
    Uniform { amplitude: f64, rng: StdRng },
}

impl Noise {
    pub fn seeded(amplitude: f64, seed: u64) -> Self {
        Self::uniform(amplitude, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(amplitude: f64) -> Self {
        Self::uniform(amplitude, StdRng::from_entropy())
    }

    fn uniform(amplitude: f64, rng: StdRng) -> Self {
        if amplitude > 0.0 {
            Noise::Uniform { amplitude, rng }
        } else {
            Noise::Disabled
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        match config.seed {
            Some(seed) => Self::seeded(config.jitter, seed),
            None => Self::from_entropy(config.jitter),
        }
    }

    pub fn sample(&mut self) -> f64 {
        match self {
            Noise::Disabled => 0.0,
            Noise::Uniform { amplitude, rng } => rng.gen_range(-*amplitude..=*amplitude),
        }
    }
}
