use super::evaluator::EvaluatorKind;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;

const CONFIG_PATH: &str = "mancala_config.json";

static CONFIG: Lazy<AIConfig> = Lazy::new(AIConfig::load_or_default);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AIConfig {
    pub version: String,
    pub game: GameDefaults,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameDefaults {
    pub seeds_per_pit: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Ply depth of the store-difference personality.
    pub material_depth: u32,
    /// Ply depth of the weighted-heuristic personality.
    pub weighted_depth: u32,
    /// Split the root moves across rayon workers.
    pub parallel_root: bool,
}

impl SearchConfig {
    pub fn depth_for(&self, kind: EvaluatorKind) -> u32 {
        match kind {
            EvaluatorKind::Material => self.material_depth,
            EvaluatorKind::Weighted => self.weighted_depth,
        }
    }
}

impl AIConfig {
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(CONFIG_PATH)
    }

    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let config_str = std::fs::read_to_string(path)?;
        let config: AIConfig = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                tracing::debug!("using default AI config ({})", e);
                Self::default()
            }
        }
    }

    /// Process-wide config, read once on first access.
    pub fn get() -> &'static AIConfig {
        &CONFIG
    }
}

impl Default for AIConfig {
    fn default() -> Self {
        AIConfig {
            version: "1.0".to_string(),
            game: GameDefaults { seeds_per_pit: 4 },
            search: SearchConfig {
                material_depth: 6,
                weighted_depth: 4,
                parallel_root: false,
            },
        }
    }
}
