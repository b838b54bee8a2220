//! 설정 저장소 포트 구현 어댑터.

use anyhow::Result;

use crate::application::ports::ConfigRepository;
use crate::infrastructure::config;

/// JSON 파일 병합 설정 저장소 어댑터.
pub struct JsonConfigRepository;

impl ConfigRepository for JsonConfigRepository {
    fn load(&self) -> Result<config::Config> {
        config::Config::load()
    }

    fn inspect_pretty_json(&self) -> Result<String> {
        config::Config::inspect_pretty_json()
    }
}
