//! 퀴즈 삭제 유스케이스.

use super::find_existing;
use crate::application::ports::{QuizRepository, Renderer, Tone};
use crate::domain::error::QuizResult;
use crate::domain::quiz::QuizId;

pub struct DeleteQuizUseCase<'a> {
    pub quiz_repo: &'a dyn QuizRepository,
    pub renderer: &'a dyn Renderer,
}

impl<'a> DeleteQuizUseCase<'a> {
    pub async fn execute(&self, raw_id: Option<&str>) -> QuizResult<QuizId> {
        let quiz = find_existing(self.quiz_repo, raw_id).await?;
        self.quiz_repo.destroy(quiz.id).await?;
        self.renderer.log(
            &format!(
                " {} [{}]",
                self.renderer.colorize("Deleted quiz", Tone::Magenta),
                quiz.id
            ),
            Tone::Plain,
        );
        Ok(quiz.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{RecordingRenderer, sample_store};
    use crate::application::usecases::show_quiz::ShowQuizUseCase;
    use crate::domain::error::QuizError;

    #[tokio::test]
    async fn deleted_quiz_is_no_longer_found() {
        let store = sample_store();
        let renderer = RecordingRenderer::default();

        let deleted = DeleteQuizUseCase {
            quiz_repo: &store,
            renderer: &renderer,
        }
        .execute(Some("2"))
        .await
        .unwrap();
        assert_eq!(deleted, 2);

        let show = ShowQuizUseCase {
            quiz_repo: &store,
            renderer: &renderer,
        };
        assert!(matches!(
            show.execute(Some("2")).await,
            Err(QuizError::NotFound(2))
        ));
    }

    #[tokio::test]
    async fn missing_quiz_is_not_found() {
        let store = sample_store();
        let renderer = RecordingRenderer::default();

        let err = DeleteQuizUseCase {
            quiz_repo: &store,
            renderer: &renderer,
        }
        .execute(Some("40"))
        .await
        .unwrap_err();
        assert!(matches!(err, QuizError::NotFound(40)));
    }
}
