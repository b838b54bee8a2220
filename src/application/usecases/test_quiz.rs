//! 퀴즈 하나를 풀어 보는 유스케이스.

use super::find_existing;
use crate::application::ports::{Prompter, QuizRepository, Renderer, Tone};
use crate::domain::error::QuizResult;
use crate::domain::quiz::Quiz;

pub const CORRECT_BANNER: &str = "CORRECT";
pub const INCORRECT_BANNER: &str = "INCORRECT";

pub struct TestQuizUseCase<'a> {
    pub quiz_repo: &'a dyn QuizRepository,
    pub prompter: &'a dyn Prompter,
    pub renderer: &'a dyn Renderer,
}

impl<'a> TestQuizUseCase<'a> {
    /// 정답 여부를 돌려준다.
    pub async fn execute(&self, raw_id: Option<&str>) -> QuizResult<bool> {
        let quiz = find_existing(self.quiz_repo, raw_id).await?;
        let answer = self.prompter.ask(&question_prompt(&quiz), None).await?;

        let correct = quiz.is_correct(&answer);
        announce(self.renderer, correct);
        Ok(correct)
    }
}

/// 질문 프롬프트 문자열.
pub(crate) fn question_prompt(quiz: &Quiz) -> String {
    format!("{}? ", quiz.question)
}

pub(crate) fn announce(renderer: &dyn Renderer, correct: bool) {
    if correct {
        renderer.biglog(CORRECT_BANNER, Tone::Green);
    } else {
        renderer.biglog(INCORRECT_BANNER, Tone::Red);
    }
}
