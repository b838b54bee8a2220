//! 설정 스키마와 병합/해석 규칙.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_PROMPT: &str = "quiz > ";
pub const DEFAULT_STORE_FILE: &str = "quizzes.json";

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// 퀴즈 저장소 설정
    #[serde(default)]
    pub store: StoreConfig,
    /// 대화형 쉘 설정
    #[serde(default)]
    pub shell: ShellConfig,
    /// play 모드 설정
    #[serde(default)]
    pub play: PlayConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct StoreConfig {
    /// JSON 저장 파일 경로
    pub path: Option<String>,
    /// 저장 파일이 없을 때 예제 퀴즈를 채울지 여부(기본 true)
    pub seed_samples: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ShellConfig {
    /// REPL 프롬프트 문자열
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct PlayConfig {
    /// 출제 순서 재현용 난수 시드
    pub seed: Option<u64>,
}

impl Config {
    /// 저장 파일 경로. 미설정 시 사용자 데이터 디렉터리 아래 기본 파일.
    pub fn store_path(&self) -> PathBuf {
        if let Some(path) = &self.store.path {
            return PathBuf::from(path);
        }
        match dirs::data_dir() {
            Some(base) => base.join("quizshell").join(DEFAULT_STORE_FILE),
            None => PathBuf::from(DEFAULT_STORE_FILE),
        }
    }

    pub fn seed_samples(&self) -> bool {
        self.store.seed_samples.unwrap_or(true)
    }

    pub fn prompt(&self) -> String {
        self.shell
            .prompt
            .clone()
            .unwrap_or_else(|| DEFAULT_PROMPT.to_string())
    }

    pub fn play_seed(&self) -> Option<u64> {
        self.play.seed
    }

    /// 후순위(나중 파일) 값으로 덮어쓰는 병합 규칙.
    pub(crate) fn merge_from(&mut self, other: Config) {
        self.store.merge_from(other.store);
        self.shell.merge_from(other.shell);
        self.play.merge_from(other.play);
    }
}

impl StoreConfig {
    pub(crate) fn merge_from(&mut self, other: StoreConfig) {
        if other.path.is_some() {
            self.path = other.path;
        }
        if other.seed_samples.is_some() {
            self.seed_samples = other.seed_samples;
        }
    }
}

impl ShellConfig {
    pub(crate) fn merge_from(&mut self, other: ShellConfig) {
        if other.prompt.is_some() {
            self.prompt = other.prompt;
        }
    }
}

impl PlayConfig {
    pub(crate) fn merge_from(&mut self, other: PlayConfig) {
        if other.seed.is_some() {
            self.seed = other.seed;
        }
    }
}
