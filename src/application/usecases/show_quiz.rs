//! 퀴즈 하나의 질문과 답을 출력하는 유스케이스.

use super::{find_existing, render_pair};
use crate::application::ports::{QuizRepository, Renderer, Tone};
use crate::domain::error::QuizResult;
use crate::domain::quiz::Quiz;

pub struct ShowQuizUseCase<'a> {
    pub quiz_repo: &'a dyn QuizRepository,
    pub renderer: &'a dyn Renderer,
}

impl<'a> ShowQuizUseCase<'a> {
    pub async fn execute(&self, raw_id: Option<&str>) -> QuizResult<Quiz> {
        let quiz = find_existing(self.quiz_repo, raw_id).await?;
        self.renderer.log(
            &format!(
                " [{}]:  {}",
                self.renderer.colorize(&quiz.id.to_string(), Tone::Magenta),
                render_pair(self.renderer, &quiz)
            ),
            Tone::Plain,
        );
        Ok(quiz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{RecordingRenderer, sample_store};
    use crate::domain::error::QuizError;

    #[tokio::test]
    async fn shows_question_and_answer() {
        let store = sample_store();
        let renderer = RecordingRenderer::default();
        let usecase = ShowQuizUseCase {
            quiz_repo: &store,
            renderer: &renderer,
        };

        usecase.execute(Some("3")).await.unwrap();
        assert_eq!(renderer.logs(), vec![" [3]:  Capital of Spain => Madrid"]);
    }

    #[tokio::test]
    async fn lookup_failures_are_typed() {
        let store = sample_store();
        let renderer = RecordingRenderer::default();
        let usecase = ShowQuizUseCase {
            quiz_repo: &store,
            renderer: &renderer,
        };

        assert!(matches!(
            usecase.execute(None).await,
            Err(QuizError::MissingParameter)
        ));
        assert!(matches!(
            usecase.execute(Some("abc")).await,
            Err(QuizError::NotANumber(_))
        ));
        assert!(matches!(
            usecase.execute(Some("99")).await,
            Err(QuizError::NotFound(99))
        ));
        assert!(renderer.logs().is_empty());
    }
}
