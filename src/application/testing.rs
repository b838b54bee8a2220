//! 유스케이스/REPL 테스트용 포트 대역.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Result;
use async_trait::async_trait;

use crate::application::ports::{Prompter, QuizRepository, Renderer, Tone};
use crate::domain::error::{QuizError, QuizResult};
use crate::domain::quiz::sample_drafts;
use crate::infrastructure::store::MemoryQuizStore;

pub fn sample_store() -> MemoryQuizStore {
    MemoryQuizStore::with_drafts(sample_drafts()).unwrap()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Log(String),
    Banner(String),
    Error(String),
}

/// 출력 내용을 색 없이 기록하는 렌더러.
#[derive(Default)]
pub struct RecordingRenderer {
    lines: Mutex<Vec<Line>>,
}

impl RecordingRenderer {
    pub fn lines(&self) -> Vec<Line> {
        self.lines.lock().unwrap().clone()
    }

    pub fn logs(&self) -> Vec<String> {
        self.collect(|line| match line {
            Line::Log(text) => Some(text.clone()),
            _ => None,
        })
    }

    pub fn banners(&self) -> Vec<String> {
        self.collect(|line| match line {
            Line::Banner(text) => Some(text.clone()),
            _ => None,
        })
    }

    pub fn errors(&self) -> Vec<String> {
        self.collect(|line| match line {
            Line::Error(text) => Some(text.clone()),
            _ => None,
        })
    }

    fn collect(&self, pick: impl Fn(&Line) -> Option<String>) -> Vec<String> {
        self.lines.lock().unwrap().iter().filter_map(pick).collect()
    }

    fn push(&self, line: Line) {
        self.lines.lock().unwrap().push(line);
    }
}

impl Renderer for RecordingRenderer {
    fn log(&self, text: &str, _tone: Tone) {
        self.push(Line::Log(text.to_string()));
    }

    fn biglog(&self, text: &str, _tone: Tone) {
        self.push(Line::Banner(text.to_string()));
    }

    fn errorlog(&self, text: &str) {
        self.push(Line::Error(text.to_string()));
    }

    fn colorize(&self, text: &str, _tone: Tone) -> String {
        text.to_string()
    }
}

/// 미리 정한 명령 줄과 답을 순서대로 돌려주는 프롬프터.
#[derive(Default)]
pub struct ScriptedPrompter {
    commands: Mutex<VecDeque<String>>,
    answers: Mutex<VecDeque<String>>,
    asked: Mutex<Vec<String>>,
    prefills: Mutex<Vec<Option<String>>>,
    command_reads: AtomicUsize,
}

impl ScriptedPrompter {
    pub fn answers<S: Into<String>>(answers: impl IntoIterator<Item = S>) -> Self {
        Self::session(Vec::<String>::new(), answers)
    }

    pub fn session<C: Into<String>, A: Into<String>>(
        commands: impl IntoIterator<Item = C>,
        answers: impl IntoIterator<Item = A>,
    ) -> Self {
        Self {
            commands: Mutex::new(commands.into_iter().map(Into::into).collect()),
            answers: Mutex::new(answers.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }

    pub fn prefills(&self) -> Vec<Option<String>> {
        self.prefills.lock().unwrap().clone()
    }

    /// 쉘 프롬프트가 뜬 횟수.
    pub fn command_reads(&self) -> usize {
        self.command_reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Prompter for ScriptedPrompter {
    async fn read_command(&self) -> Result<Option<String>> {
        self.command_reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.commands.lock().unwrap().pop_front())
    }

    async fn ask(&self, question: &str, prefill: Option<&str>) -> QuizResult<String> {
        self.asked.lock().unwrap().push(question.to_string());
        self.prefills
            .lock()
            .unwrap()
            .push(prefill.map(ToString::to_string));
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .map(|answer| answer.trim().to_string())
            .ok_or(QuizError::InputClosed)
    }
}

/// 질문 문자열을 보고 정답을 고르는 프롬프터. 지정한 턴에서만 오답을 낸다.
#[derive(Default)]
pub struct QuizMaster {
    answers: HashMap<String, String>,
    wrong_turn: Option<usize>,
    asked: Mutex<Vec<String>>,
}

impl QuizMaster {
    pub async fn from_store(store: &dyn QuizRepository) -> Self {
        let answers = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|quiz| (format!("{}? ", quiz.question), quiz.answer))
            .collect();
        Self {
            answers,
            ..Self::default()
        }
    }

    /// 1부터 센 `turn`번째 질문에 오답을 낸다.
    pub fn wrong_on_turn(mut self, turn: usize) -> Self {
        self.wrong_turn = Some(turn);
        self
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }
}

#[async_trait]
impl Prompter for QuizMaster {
    async fn read_command(&self) -> Result<Option<String>> {
        Ok(None)
    }

    async fn ask(&self, question: &str, _prefill: Option<&str>) -> QuizResult<String> {
        let turn = {
            let mut asked = self.asked.lock().unwrap();
            asked.push(question.to_string());
            asked.len()
        };
        if self.wrong_turn == Some(turn) {
            return Ok("definitely wrong".to_string());
        }
        // 대소문자가 달라도 정답 처리되어야 한다.
        self.answers
            .get(question)
            .map(|answer| answer.to_uppercase())
            .ok_or(QuizError::InputClosed)
    }
}
