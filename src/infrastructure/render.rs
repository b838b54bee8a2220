//! 콘솔 배너 렌더링 모듈.

use unicode_width::UnicodeWidthStr;

const BANNER_PADDING: usize = 2;

/// 글자를 한 칸씩 띄운 상자 배너를 만든다.
///
/// ```text
/// +-----------------+
/// |                 |
/// |  C O R R E C T  |
/// |                 |
/// +-----------------+
/// ```
pub fn render_banner(text: &str) -> Vec<String> {
    let spaced = spread_letters(text.trim());
    let inner = UnicodeWidthStr::width(spaced.as_str()) + BANNER_PADDING * 2;
    let border = format!("+{}+", "-".repeat(inner));
    let blank = format!("|{}|", " ".repeat(inner));
    let pad = " ".repeat(BANNER_PADDING);

    vec![
        border.clone(),
        blank.clone(),
        format!("|{pad}{spaced}{pad}|"),
        blank,
        border,
    ]
}

fn spread_letters(text: &str) -> String {
    let mut out = String::new();
    for (idx, ch) in text.chars().enumerate() {
        if idx > 0 {
            out.push(' ');
        }
        out.push(ch.to_uppercase().next().unwrap_or(ch));
    }
    out
}
