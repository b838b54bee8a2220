//! 퀴즈 엔티티와 필드 제약 규칙.

use serde::{Deserialize, Serialize};

use crate::domain::error::{FieldError, QuizError, QuizResult};

pub type QuizId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub id: QuizId,
    pub question: String,
    pub answer: String,
}

/// 아직 id가 부여되지 않은 생성 요청.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizDraft {
    pub question: String,
    pub answer: String,
}

impl QuizDraft {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// 저장 전 정규화(앞뒤 공백 제거).
    pub fn normalized(&self) -> Self {
        Self::new(self.question.trim(), self.answer.trim())
    }
}

impl Quiz {
    pub fn draft(&self) -> QuizDraft {
        QuizDraft::new(&self.question, &self.answer)
    }

    /// 사용자 답을 대소문자/앞뒤 공백 무시로 비교한다.
    pub fn is_correct(&self, attempt: &str) -> bool {
        normalize_answer(attempt) == normalize_answer(&self.answer)
    }
}

fn normalize_answer(text: &str) -> String {
    text.trim().to_lowercase()
}

/// 저장소 공통 필드 제약.
/// - question/answer는 비어 있으면 안 된다.
/// - question은 `others` 안에서 유일해야 한다(`exclude_id` 자기 자신 제외).
pub fn check_constraints<'a>(
    draft: &QuizDraft,
    others: impl IntoIterator<Item = &'a Quiz>,
    exclude_id: Option<QuizId>,
) -> QuizResult<()> {
    let draft = draft.normalized();
    let mut errors = Vec::new();

    if draft.question.is_empty() {
        errors.push(FieldError::new("question", "Question must not be empty."));
    } else if others
        .into_iter()
        .filter(|quiz| Some(quiz.id) != exclude_id)
        .any(|quiz| quiz.question == draft.question)
    {
        errors.push(FieldError::new("question", "This question already exists."));
    }

    if draft.answer.is_empty() {
        errors.push(FieldError::new("answer", "Answer must not be empty."));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(QuizError::ValidationFailed(errors))
    }
}

/// 새 저장소를 채우는 기본 예제 퀴즈.
pub fn sample_drafts() -> Vec<QuizDraft> {
    vec![
        QuizDraft::new("Capital of Italy", "Rome"),
        QuizDraft::new("Capital of France", "Paris"),
        QuizDraft::new("Capital of Spain", "Madrid"),
        QuizDraft::new("Capital of Portugal", "Lisbon"),
    ]
}
