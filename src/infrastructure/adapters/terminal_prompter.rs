//! 터미널 입력 포트 구현 어댑터.

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::application::ports::Prompter;
use crate::domain::error::{QuizError, QuizResult};
use crate::infrastructure::repl_input::{InputMode, read_input};

/// stdin/터미널에서 읽는 프롬프터. 블로킹 입력은 blocking 풀에서 돌린다.
pub struct TerminalPrompter {
    prompt: String,
}

impl TerminalPrompter {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

#[async_trait]
impl Prompter for TerminalPrompter {
    async fn read_command(&self) -> Result<Option<String>> {
        let prompt = self.prompt.clone();
        tokio::task::spawn_blocking(move || read_input(&prompt, None, InputMode::Command))
            .await
            .context("command input task failed")?
    }

    async fn ask(&self, question: &str, prefill: Option<&str>) -> QuizResult<String> {
        let question = question.to_string();
        let prefill = prefill.map(ToString::to_string);
        let line = tokio::task::spawn_blocking(move || {
            read_input(&question, prefill.as_deref(), InputMode::Answer)
        })
        .await
        .map_err(QuizError::input)?
        .map_err(QuizError::input)?;

        line.map(|answer| answer.trim().to_string())
            .ok_or(QuizError::InputClosed)
    }
}
