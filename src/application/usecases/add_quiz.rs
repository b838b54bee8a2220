//! 질문/답을 차례로 물어 새 퀴즈를 만드는 유스케이스.

use super::render_pair;
use crate::application::ports::{Prompter, QuizRepository, Renderer, Tone};
use crate::domain::error::QuizResult;
use crate::domain::quiz::{Quiz, QuizDraft};

pub const QUESTION_PROMPT: &str = "Enter a question: ";
pub const ANSWER_PROMPT: &str = "Enter the answer: ";

pub struct AddQuizUseCase<'a> {
    pub quiz_repo: &'a dyn QuizRepository,
    pub prompter: &'a dyn Prompter,
    pub renderer: &'a dyn Renderer,
}

impl<'a> AddQuizUseCase<'a> {
    /// 답 질문은 질문 입력이 끝난 뒤에만 띄운다.
    pub async fn execute(&self) -> QuizResult<Quiz> {
        let question = self.prompter.ask(QUESTION_PROMPT, None).await?;
        let answer = self.prompter.ask(ANSWER_PROMPT, None).await?;

        let quiz = self
            .quiz_repo
            .create(QuizDraft::new(question, answer))
            .await?;
        self.renderer.log(
            &format!(
                " {}: {}",
                self.renderer.colorize("Added", Tone::Magenta),
                render_pair(self.renderer, &quiz)
            ),
            Tone::Plain,
        );
        Ok(quiz)
    }
}
