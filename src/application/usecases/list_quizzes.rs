//! 전체 퀴즈 목록 출력 유스케이스.

use crate::application::ports::{QuizRepository, Renderer, Tone};
use crate::domain::error::QuizResult;

pub struct ListQuizzesUseCase<'a> {
    pub quiz_repo: &'a dyn QuizRepository,
    pub renderer: &'a dyn Renderer,
}

impl<'a> ListQuizzesUseCase<'a> {
    /// 저장소 순서대로 `id: question`을 출력하고 출력한 개수를 돌려준다.
    pub async fn execute(&self) -> QuizResult<usize> {
        let quizzes = self.quiz_repo.find_all().await?;
        for quiz in &quizzes {
            self.renderer.log(
                &format!(
                    "{}: {}",
                    self.renderer.colorize(&quiz.id.to_string(), Tone::Magenta),
                    quiz.question
                ),
                Tone::Plain,
            );
        }
        Ok(quizzes.len())
    }
}
