use serde::{Deserialize, Serialize};
use std::path::Path;

/// 既定の探索深さ (手数)
pub const DEFAULT_DEPTH: usize = 2;

/// ポーン数ごとの減点表 (0本は致命的、5本以上は中立)
pub const DEFAULT_PAWN_GRUDGE: [i32; 9] = [-1000, -100, -25, -15, -5, 0, 0, 0, 0];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AIConfig {
    pub version: String,
    pub search: SearchConfig,
    pub evaluation: EvaluationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub depth: usize,
    /// 同点崩しの揺らぎ幅。各ノードで [-jitter, jitter] の一様乱数を足す (0 で無効)
    pub jitter: f64,
    /// 揺らぎの乱数シード。None なら毎回エントロピーから
    pub seed: Option<u64>,
    /// 1手あたりの持ち時間。過ぎたら残りのノードは葉として評価する
    pub deadline_ms: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    pub pawn_grudge: [i32; 9],
}

impl AIConfig {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let config_str = std::fs::read_to_string(path)?;
        let config: AIConfig = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "using default AI config");
            Self::default()
        })
    }
}

impl Default for AIConfig {
    fn default() -> Self {
        AIConfig {
            version: "1.0".to_string(),
            search: SearchConfig::default(),
            evaluation: EvaluationConfig::default(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: DEFAULT_DEPTH,
            jitter: 1.0,
            seed: None,
            deadline_ms: None,
        }
    }
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        EvaluationConfig {
            pawn_grudge: DEFAULT_PAWN_GRUDGE,
        }
    }
}
