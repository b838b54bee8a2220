//! 퀴즈 명령 파이프라인 전반에서 쓰는 도메인 오류.

use thiserror::Error;

use crate::domain::quiz::QuizId;

/// 필드 단위 검증 실패 메시지.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("missing parameter <id>")]
    MissingParameter,

    #[error("parameter <id> is not a number: '{0}'")]
    NotANumber(String),

    #[error("no quiz exists with id={0}")]
    NotFound(QuizId),

    /// 저장소 제약 위반. 필드별 메시지를 하나 이상 담는다.
    #[error("the quiz is invalid")]
    ValidationFailed(Vec<FieldError>),

    #[error("repository error: {0:#}")]
    Repository(anyhow::Error),

    #[error("input error: {0:#}")]
    Input(anyhow::Error),

    /// 질문 도중 입력 스트림이 닫혔다.
    #[error("input closed")]
    InputClosed,
}

impl QuizError {
    pub fn repository(err: impl Into<anyhow::Error>) -> Self {
        Self::Repository(err.into())
    }

    pub fn input(err: impl Into<anyhow::Error>) -> Self {
        Self::Input(err.into())
    }

    /// 필드 메시지 목록. 검증 오류가 아니면 빈 슬라이스.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::ValidationFailed(errors) => errors,
            _ => &[],
        }
    }
}

pub type QuizResult<T> = std::result::Result<T, QuizError>;
