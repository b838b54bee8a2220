//! 모든 퀴즈를 무작위 순서로 묻는 play 모드 유스케이스.
//!
//! 세션 값(`GameSession`)을 턴마다 갱신하며 다음 순서로 진행한다.
//! 1. Loading: 전체 id를 남은 문제 집합으로 적재
//! 2. 후보 id를 `[1, 상한]`에서 추첨 후 조회
//!    (상한에 비해 남은 문제가 드물면 남은 집합에서 바로 고른다)
//!    - 조회 실패 / 이미 물은 문제: 턴 소모 없이 재추첨
//!    - 남은 문제: 집합에서 제거하고 질문
//! 3. 정답이면 점수 +1 후 2로, 오답이면 Lost, 남은 문제가 없으면 Won

use std::sync::Mutex;

use rand::Rng;
use rand::rngs::StdRng;

use super::test_quiz::{announce, question_prompt};
use crate::application::ports::{Prompter, QuizRepository, Renderer, Tone};
use crate::domain::error::QuizResult;
use crate::domain::quiz::QuizId;
use crate::domain::session::{Draw, GameSession, SessionState};

/// 한 판의 최종 결과.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    pub state: SessionState,
    pub score: u32,
    /// 실제로 질문한 id 순서.
    pub asked: Vec<QuizId>,
    /// 턴을 소모하지 않은 재추첨 횟수.
    pub misses: u64,
}

pub struct PlayUseCase<'a> {
    pub quiz_repo: &'a dyn QuizRepository,
    pub prompter: &'a dyn Prompter,
    pub renderer: &'a dyn Renderer,
    pub rng: &'a Mutex<StdRng>,
}

impl<'a> PlayUseCase<'a> {
    pub async fn execute(&self) -> QuizResult<PlayOutcome> {
        let ids = self
            .quiz_repo
            .find_all()
            .await?
            .into_iter()
            .map(|quiz| quiz.id);
        let mut session = GameSession::start(ids);
        let mut asked = Vec::new();
        let mut misses: u64 = 0;

        while !session.state().is_terminal() {
            let row_count = self.quiz_repo.count().await?;
            let candidate = self.next_candidate(&session, row_count);

            let Some(quiz) = self.quiz_repo.find_by_id(candidate).await? else {
                if session.discard(candidate) {
                    tracing::debug!(candidate, "pending quiz disappeared, dropped from session");
                }
                misses += 1;
                tracing::trace!(candidate, "draw missed");
                continue;
            };

            if let Draw::AlreadyAsked = session.claim(quiz.id) {
                misses += 1;
                tracing::trace!(candidate, "draw already asked");
                continue;
            }

            asked.push(quiz.id);
            let answer = self.prompter.ask(&question_prompt(&quiz), None).await?;
            let correct = quiz.is_correct(&answer);
            if session.record_answer(correct) == SessionState::Lost {
                break;
            }

            announce(self.renderer, true);
            self.renderer
                .log(&format!("Score: {}", session.score()), Tone::Plain);
        }

        self.finish(&session);
        tracing::debug!(
            state = ?session.state(),
            score = session.score(),
            misses,
            "play session finished"
        );

        Ok(PlayOutcome {
            state: session.state(),
            score: session.score(),
            asked,
            misses,
        })
    }

    fn next_candidate(&self, session: &GameSession, row_count: usize) -> QuizId {
        let upper = session.draw_upper_bound(row_count);
        if !session.remaining().is_empty() && session.is_sparse(upper) {
            let index = self.with_rng(|rng| rng.gen_range(0..session.remaining().len()));
            if let Some(id) = session.nth_pending(index) {
                return id;
            }
        }
        self.draw(upper)
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        match self.rng.lock() {
            Ok(mut rng) => f(&mut *rng),
            Err(poisoned) => f(&mut *poisoned.into_inner()),
        }
    }

    /// `round(random * (upper - 1) + 1)`.
    fn draw(&self, upper: QuizId) -> QuizId {
        let unit: f64 = self.with_rng(|rng| rng.r#gen());
        (unit * (upper - 1) as f64 + 1.0).round() as QuizId
    }

    fn finish(&self, session: &GameSession) {
        let score = session.score().to_string();
        match session.state() {
            SessionState::Won => {
                self.renderer
                    .log("Congratulations, you finished the game!", Tone::Green);
                self.renderer.log("Final score:", Tone::Plain);
                self.renderer.biglog(&score, Tone::Magenta);
            }
            SessionState::Lost => {
                announce(self.renderer, false);
                self.renderer.log("Game over. Final score:", Tone::Plain);
                self.renderer.biglog(&score, Tone::Red);
            }
            SessionState::Loading | SessionState::AwaitingAnswer(_) => {}
        }
    }
}
