//! 프로세스 메모리 안에서만 유지되는 저장소 어댑터.

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::table::QuizTable;
use crate::application::ports::QuizRepository;
use crate::domain::error::{QuizError, QuizResult};
use crate::domain::quiz::{Quiz, QuizDraft, QuizId};

#[derive(Default)]
pub struct MemoryQuizStore {
    table: Mutex<QuizTable>,
}

impl MemoryQuizStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 초기 퀴즈를 채운 저장소. 제약 위반 초안이 있으면 실패한다.
    pub fn with_drafts(drafts: impl IntoIterator<Item = QuizDraft>) -> QuizResult<Self> {
        Ok(Self {
            table: Mutex::new(QuizTable::with_drafts(drafts)?),
        })
    }
}

#[async_trait]
impl QuizRepository for MemoryQuizStore {
    async fn create(&self, draft: QuizDraft) -> QuizResult<Quiz> {
        self.table.lock().await.insert(draft)
    }

    async fn find_by_id(&self, id: QuizId) -> QuizResult<Option<Quiz>> {
        Ok(self.table.lock().await.get(id).cloned())
    }

    async fn find_all(&self) -> QuizResult<Vec<Quiz>> {
        Ok(self.table.lock().await.all().to_vec())
    }

    async fn count(&self) -> QuizResult<usize> {
        Ok(self.table.lock().await.len())
    }

    async fn destroy(&self, id: QuizId) -> QuizResult<()> {
        if self.table.lock().await.remove(id) {
            Ok(())
        } else {
            Err(QuizError::NotFound(id))
        }
    }

    async fn save(&self, quiz: &Quiz) -> QuizResult<Quiz> {
        self.table
            .lock()
            .await
            .update(quiz)?
            .ok_or(QuizError::NotFound(quiz.id))
    }
}
