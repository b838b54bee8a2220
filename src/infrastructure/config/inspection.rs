//! 적용 설정 진단(inspection) 뷰 모델.

use serde::Serialize;

use super::loader::LoadedConfig;
use super::types::Config;

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub searched_paths: Vec<String>,
    pub loaded_paths: Vec<String>,
    pub config: Config,
    pub effective: EffectiveSettings,
}

#[derive(Debug, Clone, Serialize)]
pub struct EffectiveSettings {
    pub store_path: String,
    pub store_exists: bool,
    pub seed_samples: bool,
    pub prompt: String,
    pub play_seed: Option<u64>,
}

impl ConfigInspection {
    pub(crate) fn from_loaded(loaded: LoadedConfig) -> Self {
        let store_path = loaded.config.store_path();

        Self {
            searched_paths: loaded
                .searched_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            loaded_paths: loaded
                .loaded_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            effective: EffectiveSettings {
                store_exists: store_path.exists(),
                store_path: store_path.display().to_string(),
                seed_samples: loaded.config.seed_samples(),
                prompt: loaded.config.prompt(),
                play_seed: loaded.config.play_seed(),
            },
            config: loaded.config,
        }
    }
}
