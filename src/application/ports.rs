//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::error::QuizResult;
use crate::domain::quiz::{Quiz, QuizDraft, QuizId};
use crate::infrastructure::config::Config;

/// 설정 로딩/점검을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<Config>;
    fn inspect_pretty_json(&self) -> Result<String>;
}

/// 퀴즈 단일 테이블 저장소 포트.
/// 필드 제약 위반은 `QuizError::ValidationFailed`로 돌려준다.
#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn create(&self, draft: QuizDraft) -> QuizResult<Quiz>;
    async fn find_by_id(&self, id: QuizId) -> QuizResult<Option<Quiz>>;
    /// id 오름차순 전체 목록.
    async fn find_all(&self) -> QuizResult<Vec<Quiz>>;
    async fn count(&self) -> QuizResult<usize>;
    async fn destroy(&self, id: QuizId) -> QuizResult<()>;
    /// id는 그대로 두고 question/answer를 갱신한다.
    async fn save(&self, quiz: &Quiz) -> QuizResult<Quiz>;
}

/// 대화형 입력 포트.
#[async_trait]
pub trait Prompter: Send + Sync {
    /// 쉘 프롬프트를 띄우고 명령 한 줄을 읽는다. 입력이 끝나면 `None`.
    async fn read_command(&self) -> Result<Option<String>>;

    /// 질문을 띄우고 trim된 답을 돌려준다.
    /// `prefill`은 대화형 터미널에서만 입력 버퍼에 미리 채워진다.
    async fn ask(&self, question: &str, prefill: Option<&str>) -> QuizResult<String>;
}

/// 출력 색상 태그.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Green,
    Red,
    Magenta,
    Yellow,
}

/// 콘솔 출력 추상화 포트.
pub trait Renderer: Send + Sync {
    fn log(&self, text: &str, tone: Tone);
    /// 강조 배너 출력.
    fn biglog(&self, text: &str, tone: Tone);
    fn errorlog(&self, text: &str);
    /// 한 줄 안에 섞어 쓸 색 입힌 조각을 만든다.
    fn colorize(&self, text: &str, tone: Tone) -> String;
}
