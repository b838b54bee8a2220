//! 기존 퀴즈의 질문/답을 바꾸는 유스케이스.
//! 현재 값을 입력 버퍼에 미리 채워 수정만 하면 되게 한다.

use super::{find_existing, render_pair};
use crate::application::ports::{Prompter, QuizRepository, Renderer, Tone};
use crate::domain::error::QuizResult;
use crate::domain::quiz::Quiz;

pub const EDIT_QUESTION_PROMPT: &str = "Edit the question: ";
pub const EDIT_ANSWER_PROMPT: &str = "Edit the answer: ";

pub struct EditQuizUseCase<'a> {
    pub quiz_repo: &'a dyn QuizRepository,
    pub prompter: &'a dyn Prompter,
    pub renderer: &'a dyn Renderer,
}

impl<'a> EditQuizUseCase<'a> {
    pub async fn execute(&self, raw_id: Option<&str>) -> QuizResult<Quiz> {
        let current = find_existing(self.quiz_repo, raw_id).await?;

        let question = self
            .prompter
            .ask(EDIT_QUESTION_PROMPT, Some(&current.question))
            .await?;
        let answer = self
            .prompter
            .ask(EDIT_ANSWER_PROMPT, Some(&current.answer))
            .await?;

        let saved = self
            .quiz_repo
            .save(&Quiz {
                id: current.id,
                question,
                answer,
            })
            .await?;
        self.renderer.log(
            &format!(
                " Quiz {} changed to: {}",
                self.renderer.colorize(&saved.id.to_string(), Tone::Magenta),
                render_pair(self.renderer, &saved)
            ),
            Tone::Plain,
        );
        Ok(saved)
    }
}
