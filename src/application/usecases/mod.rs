//! 쉘 명령별 유스케이스.
//! 각 유스케이스는 검증 → 저장소 → 출력 순서로 한 번만 시도하고 오류는 호출자에게 넘긴다.

pub mod add_quiz;
pub mod delete_quiz;
pub mod edit_quiz;
pub mod inspect_config;
pub mod list_quizzes;
pub mod play;
pub mod show_quiz;
pub mod test_quiz;

use crate::application::ports::{QuizRepository, Renderer, Tone};
use crate::domain::error::{QuizError, QuizResult};
use crate::domain::id::validate_id;
use crate::domain::quiz::Quiz;

/// `<id>` 인자를 검증하고 해당 퀴즈를 찾는다. 없으면 `NotFound`.
pub(crate) async fn find_existing(
    repo: &dyn QuizRepository,
    raw_id: Option<&str>,
) -> QuizResult<Quiz> {
    let id = validate_id(raw_id)?;
    repo.find_by_id(id).await?.ok_or(QuizError::NotFound(id))
}

/// `question => answer` 한 줄 표기.
pub(crate) fn render_pair(renderer: &dyn Renderer, quiz: &Quiz) -> String {
    format!(
        "{} {} {}",
        quiz.question,
        renderer.colorize("=>", Tone::Magenta),
        quiz.answer
    )
}
