//! `<id>` 인자 검증.

use crate::domain::error::{QuizError, QuizResult};
use crate::domain::quiz::QuizId;

/// 명령 인자 토큰을 퀴즈 id로 변환한다.
/// - 인자가 없으면 `MissingParameter`
/// - 앞쪽 공백 뒤 부호/숫자 접두부만 읽고(`"12abc"` → 12), 숫자가 하나도 없으면 `NotANumber`
pub fn validate_id(raw: Option<&str>) -> QuizResult<QuizId> {
    let Some(raw) = raw else {
        return Err(QuizError::MissingParameter);
    };

    parse_leading_integer(raw).ok_or_else(|| QuizError::NotANumber(raw.to_string()))
}

fn parse_leading_integer(raw: &str) -> Option<QuizId> {
    let text = raw.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    // 범위를 넘는 값은 숫자로 취급하되 어떤 퀴즈와도 맞지 않도록 포화시킨다.
    let magnitude = rest[..digits_len]
        .parse::<QuizId>()
        .unwrap_or(QuizId::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
