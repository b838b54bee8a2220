//! play 모드 한 판의 상태 값.
//! 남은 문제 집합과 점수를 턴마다 명시적으로 갱신한다.

use std::collections::BTreeSet;

use crate::domain::quiz::QuizId;

/// 추첨 범위가 남은 문제 수의 이 배수를 넘으면 남은 집합에서 직접 고른다.
pub const SPARSE_DRAW_FACTOR: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Loading,
    AwaitingAnswer(QuizId),
    Won,
    Lost,
}

impl SessionState {
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionState::Won | SessionState::Lost)
    }
}

/// 후보 id 추첨 결과 분류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Draw {
    /// 아직 묻지 않은 문제. 세션에서 제거된 뒤 질문으로 넘어간다.
    Pending(QuizId),
    /// 이미 물었거나 이번 세션 대상이 아닌 id.
    AlreadyAsked,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    remaining: BTreeSet<QuizId>,
    score: u32,
    turns: u32,
    state: SessionState,
}

impl Default for GameSession {
    fn default() -> Self {
        Self {
            remaining: BTreeSet::new(),
            score: 0,
            turns: 0,
            state: SessionState::Loading,
        }
    }
}

impl GameSession {
    /// Loading 단계 결과로 세션을 시작한다. 중복 id는 합쳐진다.
    pub fn start(ids: impl IntoIterator<Item = QuizId>) -> Self {
        let mut session = Self {
            remaining: ids.into_iter().collect(),
            ..Self::default()
        };
        session.settle();
        session
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn remaining(&self) -> &BTreeSet<QuizId> {
        &self.remaining
    }

    /// 추첨 범위 상한. 현재 행 수와 남은 id 중 최댓값 중 큰 쪽.
    /// id에 구멍이 있어도 남은 문제가 항상 추첨 범위 안에 들어온다.
    pub fn draw_upper_bound(&self, row_count: usize) -> QuizId {
        let rows = QuizId::try_from(row_count).unwrap_or(QuizId::MAX);
        let highest = self.remaining.last().copied().unwrap_or(0);
        rows.max(highest).max(1)
    }

    /// id 구멍이 많아 `[1, upper]` 추첨이 대부분 빗나가는 상태인지.
    pub fn is_sparse(&self, upper: QuizId) -> bool {
        let span = usize::try_from(upper).unwrap_or(usize::MAX);
        span > self.remaining.len().saturating_mul(SPARSE_DRAW_FACTOR)
    }

    /// 남은 문제 중 `index`번째(id 오름차순).
    pub fn nth_pending(&self, index: usize) -> Option<QuizId> {
        self.remaining.iter().nth(index).copied()
    }

    /// 조회에 성공한 후보를 분류하고, 남은 문제라면 집합에서 빼고 답변 대기로 전이한다.
    pub fn claim(&mut self, candidate: QuizId) -> Draw {
        if self.state != SessionState::Loading || !self.remaining.remove(&candidate) {
            return Draw::AlreadyAsked;
        }
        self.state = SessionState::AwaitingAnswer(candidate);
        Draw::Pending(candidate)
    }

    /// 남은 문제였지만 저장소에서 사라진 id를 버린다.
    pub fn discard(&mut self, id: QuizId) -> bool {
        let removed = self.remaining.remove(&id);
        if removed {
            self.settle();
        }
        removed
    }

    /// 답변 결과를 반영한다. 정답이면 다음 턴 또는 Won, 오답이면 Lost.
    pub fn record_answer(&mut self, correct: bool) -> SessionState {
        if !matches!(self.state, SessionState::AwaitingAnswer(_)) {
            return self.state;
        }

        self.turns += 1;
        if correct {
            self.score += 1;
            self.state = SessionState::Loading;
            self.settle();
        } else {
            self.state = SessionState::Lost;
        }
        self.state
    }

    fn settle(&mut self) {
        if self.state == SessionState::Loading && self.remaining.is_empty() {
            self.state = SessionState::Won;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pool_is_won_immediately() {
        let session = GameSession::start(std::iter::empty());
        assert_eq!(session.state(), SessionState::Won);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn duplicate_ids_are_merged() {
        let session = GameSession::start([1, 2, 2, 3, 1]);
        assert_eq!(session.remaining().len(), 3);
    }

    #[test]
    fn claimed_id_cannot_be_claimed_again() {
        let mut session = GameSession::start([1, 2]);
        assert_eq!(session.claim(2), Draw::Pending(2));
        assert_eq!(session.state(), SessionState::AwaitingAnswer(2));
        session.record_answer(true);

        assert_eq!(session.claim(2), Draw::AlreadyAsked);
        assert_eq!(session.claim(7), Draw::AlreadyAsked);
        assert_eq!(session.remaining().iter().copied().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn all_correct_ends_won_with_full_score() {
        let mut session = GameSession::start([4, 9, 1]);
        for id in [9, 1, 4] {
            session.claim(id);
            session.record_answer(true);
        }
        assert_eq!(session.state(), SessionState::Won);
        assert_eq!(session.score(), 3);
        assert_eq!(session.turns(), 3);
    }

    #[test]
    fn wrong_answer_ends_lost_keeping_previous_score() {
        let mut session = GameSession::start([1, 2, 3]);
        session.claim(1);
        session.record_answer(true);
        session.claim(3);
        assert_eq!(session.record_answer(false), SessionState::Lost);
        assert_eq!(session.score(), 1);

        // 종료 후에는 상태가 바뀌지 않는다.
        assert_eq!(session.claim(2), Draw::AlreadyAsked);
        assert_eq!(session.record_answer(true), SessionState::Lost);
    }

    #[test]
    fn discarding_last_pending_id_wins() {
        let mut session = GameSession::start([5]);
        assert!(session.discard(5));
        assert_eq!(session.state(), SessionState::Won);
    }

    #[test]
    fn upper_bound_covers_gapped_ids() {
        let session = GameSession::start([1, 10]);
        assert_eq!(session.draw_upper_bound(2), 10);
        assert_eq!(session.draw_upper_bound(12), 12);
        assert_eq!(GameSession::start(std::iter::empty()).draw_upper_bound(0), 1);
    }

    #[test]
    fn sparse_pool_is_detected() {
        let session = GameSession::start([3, 1_000_000]);
        assert!(session.is_sparse(session.draw_upper_bound(2)));
        assert_eq!(session.nth_pending(1), Some(1_000_000));
        assert_eq!(session.nth_pending(2), None);

        let dense = GameSession::start([1, 2, 4, 5]);
        assert!(!dense.is_sparse(dense.draw_upper_bound(4)));
    }
}
