//! 두 저장소 구현이 공유하는 단일 테이블 자료구조.

use serde::{Deserialize, Serialize};

use crate::domain::error::{QuizError, QuizResult};
use crate::domain::quiz::{Quiz, QuizDraft, QuizId, check_constraints};

/// id는 `next_id`에서 단조 증가로 발급되며 삭제 후에도 재사용하지 않는다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct QuizTable {
    next_id: QuizId,
    #[serde(default)]
    quizzes: Vec<Quiz>,
}

impl Default for QuizTable {
    fn default() -> Self {
        Self {
            next_id: 1,
            quizzes: Vec::new(),
        }
    }
}

impl QuizTable {
    pub fn with_drafts(drafts: impl IntoIterator<Item = QuizDraft>) -> QuizResult<Self> {
        let mut table = Self::default();
        for draft in drafts {
            table.insert(draft)?;
        }
        Ok(table)
    }

    /// 파일에서 읽은 뒤 정렬/카운터를 바로잡는다.
    pub fn repaired(mut self) -> Self {
        self.quizzes.sort_by_key(|quiz| quiz.id);
        let highest = self.quizzes.last().map(|quiz| quiz.id).unwrap_or(0);
        self.next_id = self.next_id.max(highest.saturating_add(1)).max(1);
        self
    }

    pub fn insert(&mut self, draft: QuizDraft) -> QuizResult<Quiz> {
        check_constraints(&draft, &self.quizzes, None)?;
        let draft = draft.normalized();

        // 마지막 id(`QuizId::MAX`)는 발급하지 않는다.
        let Some(next_id) = self.next_id.checked_add(1) else {
            return Err(QuizError::repository(anyhow::anyhow!(
                "quiz id space exhausted (next id {})",
                self.next_id
            )));
        };

        let quiz = Quiz {
            id: self.next_id,
            question: draft.question,
            answer: draft.answer,
        };
        self.next_id = next_id;
        self.quizzes.push(quiz.clone());
        Ok(quiz)
    }

    pub fn get(&self, id: QuizId) -> Option<&Quiz> {
        self.position(id).map(|idx| &self.quizzes[idx])
    }

    pub fn all(&self) -> &[Quiz] {
        &self.quizzes
    }

    pub fn len(&self) -> usize {
        self.quizzes.len()
    }

    /// 대상이 없으면 `false`.
    pub fn remove(&mut self, id: QuizId) -> bool {
        match self.position(id) {
            Some(idx) => {
                self.quizzes.remove(idx);
                true
            }
            None => false,
        }
    }

    /// 대상이 없으면 `Ok(None)`.
    pub fn update(&mut self, quiz: &Quiz) -> QuizResult<Option<Quiz>> {
        let Some(idx) = self.position(quiz.id) else {
            return Ok(None);
        };
        let draft = quiz.draft();
        check_constraints(&draft, &self.quizzes, Some(quiz.id))?;
        let draft = draft.normalized();

        let slot = &mut self.quizzes[idx];
        slot.question = draft.question;
        slot.answer = draft.answer;
        Ok(Some(slot.clone()))
    }

    fn position(&self, id: QuizId) -> Option<usize> {
        self.quizzes.binary_search_by_key(&id, |quiz| quiz.id).ok()
    }
}
