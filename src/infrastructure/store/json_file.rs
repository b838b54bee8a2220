//! JSON 파일 기반 퀴즈 저장소 어댑터.
//! 첫 접근 때 파일을 읽어 메모리 테이블로 올리고, 변경마다 임시 파일 + rename으로 기록한다.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs;
use tokio::sync::{Mutex, MutexGuard};

use super::table::QuizTable;
use crate::application::ports::QuizRepository;
use crate::domain::error::{QuizError, QuizResult};
use crate::domain::quiz::{Quiz, QuizDraft, QuizId, sample_drafts};

pub struct JsonQuizStore {
    path: PathBuf,
    seed_samples: bool,
    table: Mutex<Option<QuizTable>>,
}

impl JsonQuizStore {
    /// `seed_samples`가 켜져 있으면 파일이 없을 때 예제 퀴즈로 시작한다.
    pub fn new(path: impl Into<PathBuf>, seed_samples: bool) -> Self {
        Self {
            path: path.into(),
            seed_samples,
            table: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn loaded(&self) -> QuizResult<MutexGuard<'_, Option<QuizTable>>> {
        let mut guard = self.table.lock().await;
        if guard.is_none() {
            let table = self.read_table().await.map_err(QuizError::repository)?;
            *guard = Some(table);
        }
        Ok(guard)
    }

    async fn read_table(&self) -> Result<QuizTable> {
        if !fs::try_exists(&self.path)
            .await
            .with_context(|| format!("failed to stat quiz store {}", self.path.display()))?
        {
            tracing::debug!(path = %self.path.display(), seed = self.seed_samples, "quiz store missing, starting fresh");
            if !self.seed_samples {
                return Ok(QuizTable::default());
            }
            let table = QuizTable::with_drafts(sample_drafts())?;
            write_table(&self.path, &table).await?;
            return Ok(table);
        }

        let raw = fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("failed to read quiz store {}", self.path.display()))?;
        let table: QuizTable = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse JSON in {}", self.path.display()))?;
        let table = table.repaired();
        tracing::debug!(path = %self.path.display(), rows = table.len(), "quiz store loaded");
        Ok(table)
    }

    /// 사본에 변경을 적용하고 파일 기록이 성공했을 때만 메모리에 반영한다.
    async fn mutate<T>(
        &self,
        change: impl FnOnce(&mut QuizTable) -> QuizResult<T>,
    ) -> QuizResult<T> {
        let mut guard = self.loaded().await?;
        let Some(current) = guard.as_ref() else {
            return Err(QuizError::repository(anyhow::anyhow!("quiz store not loaded")));
        };

        let mut next = current.clone();
        let out = change(&mut next)?;
        write_table(&self.path, &next)
            .await
            .map_err(QuizError::repository)?;
        *guard = Some(next);
        Ok(out)
    }

    async fn read<T>(&self, view: impl FnOnce(&QuizTable) -> T) -> QuizResult<T> {
        let guard = self.loaded().await?;
        match guard.as_ref() {
            Some(table) => Ok(view(table)),
            None => Err(QuizError::repository(anyhow::anyhow!("quiz store not loaded"))),
        }
    }
}

async fn write_table(path: &Path, table: &QuizTable) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    let rendered = serde_json::to_string_pretty(table)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, format!("{rendered}\n"))
        .await
        .with_context(|| format!("failed to write {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .await
        .with_context(|| format!("failed to replace quiz store {}", path.display()))?;
    tracing::debug!(path = %path.display(), rows = table.len(), "quiz store written");
    Ok(())
}

#[async_trait]
impl QuizRepository for JsonQuizStore {
    async fn create(&self, draft: QuizDraft) -> QuizResult<Quiz> {
        self.mutate(|table| table.insert(draft)).await
    }

    async fn find_by_id(&self, id: QuizId) -> QuizResult<Option<Quiz>> {
        self.read(|table| table.get(id).cloned()).await
    }

    async fn find_all(&self) -> QuizResult<Vec<Quiz>> {
        self.read(|table| table.all().to_vec()).await
    }

    async fn count(&self) -> QuizResult<usize> {
        self.read(QuizTable::len).await
    }

    async fn destroy(&self, id: QuizId) -> QuizResult<()> {
        self.mutate(|table| {
            if table.remove(id) {
                Ok(())
            } else {
                Err(QuizError::NotFound(id))
            }
        })
        .await
    }

    async fn save(&self, quiz: &Quiz) -> QuizResult<Quiz> {
        self.mutate(|table| table.update(quiz)?.ok_or(QuizError::NotFound(quiz.id)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_is_seeded_and_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("quizzes.json");
        let store = JsonQuizStore::new(&path, true);

        let all = store.find_all().await.unwrap();
        assert_eq!(all.len(), 4);
        assert_eq!(all[2].answer, "Madrid");
        assert!(path.exists());
    }

    #[tokio::test]
    async fn missing_file_without_samples_is_empty_and_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quizzes.json");
        let store = JsonQuizStore::new(&path, false);

        assert_eq!(store.count().await.unwrap(), 0);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn changes_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quizzes.json");

        let store = JsonQuizStore::new(&path, false);
        let first = store.create(QuizDraft::new("2+2?", "4")).await.unwrap();
        let second = store.create(QuizDraft::new("3+3?", "6")).await.unwrap();
        store.destroy(first.id).await.unwrap();
        drop(store);

        let reopened = JsonQuizStore::new(&path, true);
        let all = reopened.find_all().await.unwrap();
        assert_eq!(all, vec![second]);

        let third = reopened.create(QuizDraft::new("4+4?", "8")).await.unwrap();
        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn rejected_change_leaves_file_and_memory_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quizzes.json");
        let store = JsonQuizStore::new(&path, false);
        store.create(QuizDraft::new("2+2?", "4")).await.unwrap();
        let before = std::fs::read_to_string(&path).unwrap();

        let err = store.create(QuizDraft::new("2+2?", "")).await.unwrap_err();
        assert_eq!(err.field_errors().len(), 2);
        assert_eq!(store.count().await.unwrap(), 1);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[tokio::test]
    async fn corrupt_file_is_a_repository_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quizzes.json");
        std::fs::write(&path, "not json").unwrap();

        let store = JsonQuizStore::new(&path, true);
        assert!(matches!(
            store.find_all().await,
            Err(QuizError::Repository(_))
        ));
    }
}
