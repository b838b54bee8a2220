//! 한 줄 입력기.
//! 대화형 터미널에서는 raw mode로 직접 편집(프리필, 커서 이동, 명령 추천)을 처리하고,
//! 그 외에는 일반 stdin 라인 입력으로 대체한다.

use std::env;
use std::io::{self, IsTerminal, Write};

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::style::{Color, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, ClearType};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::domain::command::{COMMANDS, CommandSpec, lookup};
use crate::domain::error::QuizError;
use crate::domain::id::validate_id;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// 쉘 명령 입력. 실시간 명령 추천을 표시한다.
    Command,
    /// 질문에 대한 답 입력.
    Answer,
}

impl InputMode {
    fn label_color(self) -> Color {
        match self {
            InputMode::Command => Color::Magenta,
            InputMode::Answer => Color::Red,
        }
    }
}

/// 한 줄 입력을 읽는다. 입력이 끝나면(EOF, Ctrl-D) `None`.
/// - TTY + 지원 터미널: raw mode 편집 + `prefill` 적용
/// - non-TTY/미지원 터미널: 일반 라인 입력(`prefill` 무시)
pub fn read_input(label: &str, prefill: Option<&str>, mode: InputMode) -> Result<Option<String>> {
    if !supports_interactive_input() {
        return read_line_fallback(label);
    }

    match read_line_interactive(label, prefill.unwrap_or(""), mode) {
        Ok(v) => Ok(v),
        Err(err) => {
            tracing::debug!(error = %err, "interactive input failed, falling back to line input");
            read_line_fallback(label)
        }
    }
}

/// 프리필 같은 편집 기능을 쓸 수 있는 터미널인지 판단한다.
pub fn supports_interactive_input() -> bool {
    if !io::stdout().is_terminal() || !io::stdin().is_terminal() {
        return false;
    }

    // dumb 터미널에서는 제어 시퀀스 기반 UI를 비활성화한다.
    if let Ok(term) = env::var("TERM")
        && term.eq_ignore_ascii_case("dumb")
    {
        return false;
    }

    true
}

fn read_line_fallback(label: &str) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    let read = io::stdin().read_line(&mut line)?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(trim_newline(line)))
}

fn read_line_interactive(label: &str, initial: &str, mode: InputMode) -> Result<Option<String>> {
    let mut stdout = io::stdout();
    let _guard = InputGuard::enter(&mut stdout)?;

    let mut input = initial.to_string();
    let mut cursor_chars = input.chars().count();

    loop {
        let hint = match mode {
            InputMode::Command => command_hint(&input),
            InputMode::Answer => None,
        };
        render_line(&mut stdout, label, mode, &input, cursor_chars, hint)?;

        match event::read()? {
            Event::Paste(text) => {
                for ch in text.chars().filter(|c| !c.is_control()) {
                    insert_char_at(&mut input, cursor_chars, ch);
                    cursor_chars += 1;
                }
            }
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match key.code {
                    KeyCode::Enter => {
                        finish_line(&mut stdout, label, mode, &input)?;
                        return Ok(Some(input));
                    }
                    KeyCode::Backspace => {
                        if cursor_chars > 0 {
                            remove_char_at(&mut input, cursor_chars - 1);
                            cursor_chars -= 1;
                        }
                    }
                    KeyCode::Delete => {
                        if cursor_chars < input.chars().count() {
                            remove_char_at(&mut input, cursor_chars);
                        }
                    }
                    KeyCode::Left => {
                        cursor_chars = cursor_chars.saturating_sub(1);
                    }
                    KeyCode::Right => {
                        cursor_chars = (cursor_chars + 1).min(input.chars().count());
                    }
                    KeyCode::Home => {
                        cursor_chars = 0;
                    }
                    KeyCode::End => {
                        cursor_chars = input.chars().count();
                    }
                    KeyCode::Tab if mode == InputMode::Command => {
                        if let Some(completed) = complete_verb(&input) {
                            input = completed;
                            cursor_chars = input.chars().count();
                        }
                    }
                    KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        finish_line(&mut stdout, label, mode, &input)?;
                        return Ok(None);
                    }
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        finish_line(&mut stdout, label, mode, &input)?;
                        return Ok(match mode {
                            InputMode::Command => Some("quit".to_string()),
                            InputMode::Answer => None,
                        });
                    }
                    KeyCode::Char(ch) => {
                        if !key.modifiers.contains(KeyModifiers::CONTROL)
                            && !key.modifiers.contains(KeyModifiers::ALT)
                        {
                            insert_char_at(&mut input, cursor_chars, ch);
                            cursor_chars += 1;
                        }
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    }
}

/// 첫 단어 접두사와 맞는 명령 목록. 공백이 들어가면 추천하지 않는다.
fn match_commands(input: &str) -> Vec<&'static CommandSpec> {
    let word = input.trim_start();
    if word.is_empty() || word.contains(' ') {
        return Vec::new();
    }

    COMMANDS
        .iter()
        .filter(|spec| {
            spec.verb.starts_with(word) || spec.aliases.iter().any(|a| a.starts_with(word))
        })
        .collect()
}

/// 명령 입력줄 아래에 표시할 실시간 힌트.
fn command_hint(input: &str) -> Option<(Color, String)> {
    let trimmed = input.trim_start();
    if trimmed.is_empty() {
        return Some((Color::Grey, "type `help` for the command list".to_string()));
    }

    let mut words = trimmed.split_whitespace();
    let word = words.next()?;
    let typing_verb = !trimmed.contains(' ');

    if typing_verb {
        let matches = match_commands(trimmed);
        if matches.is_empty() {
            return Some((Color::Red, format!("error: unknown command `{word}`")));
        }
        if let Some(spec) = lookup(word)
            && matches.len() == 1
        {
            return Some(ready_or_usage(spec));
        }
        let usages: Vec<String> = matches.iter().map(|spec| spec.usage()).collect();
        return Some((Color::White, usages.join("  ·  ")));
    }

    let Some(spec) = lookup(word) else {
        return Some((Color::Red, format!("error: unknown command `{word}`")));
    };
    if spec.argument.is_none() {
        return Some((Color::Green, "ready: press Enter to run".to_string()));
    }

    match validate_id(words.next()) {
        Ok(_) => Some((Color::Green, "ready: press Enter to run".to_string())),
        Err(QuizError::MissingParameter) => {
            Some((Color::Yellow, format!("hint: {}", spec.usage())))
        }
        Err(err) => Some((Color::Red, format!("error: {err}"))),
    }
}

fn ready_or_usage(spec: &CommandSpec) -> (Color, String) {
    match spec.argument {
        Some(_) => (Color::Yellow, format!("hint: {}", spec.usage())),
        None => (
            Color::Green,
            format!("ready: {} - {}", spec.usage(), spec.description),
        ),
    }
}

/// 첫 단어를 가장 먼저 맞는 명령으로 완성한다. 인자가 필요한 명령은 공백까지 붙인다.
fn complete_verb(input: &str) -> Option<String> {
    let spec = match_commands(input).into_iter().next()?;
    let completed = match spec.argument {
        Some(_) => format!("{} ", spec.verb),
        None => spec.verb.to_string(),
    };
    (completed != input).then_some(completed)
}

fn render_line(
    stdout: &mut io::Stdout,
    label: &str,
    mode: InputMode,
    input: &str,
    cursor_chars: usize,
    hint: Option<(Color, String)>,
) -> Result<()> {
    let (w, _) = terminal::size().unwrap_or((120, 40));
    let width = (w as usize).max(20);
    let label = clip_line_display(label, width / 2);
    let available = width.saturating_sub(display_width(&label) + 1);

    execute!(
        stdout,
        cursor::MoveToColumn(0),
        terminal::Clear(ClearType::FromCursorDown),
        SetForegroundColor(mode.label_color())
    )?;
    write!(stdout, "{label}")?;
    execute!(stdout, ResetColor)?;
    write!(stdout, "{}", tail_with_ellipsis_display(input, available))?;

    // 힌트는 입력줄 바로 아래에 그리고 커서를 다시 입력줄로 올린다.
    if let Some((color, line)) = hint {
        write!(stdout, "\r\n")?;
        execute!(stdout, SetForegroundColor(color))?;
        write!(stdout, "{}", clip_line_display(&line, width.saturating_sub(1)))?;
        execute!(stdout, ResetColor, cursor::MoveUp(1))?;
    }

    let col = display_width(&label) + input_cursor_col(input, cursor_chars, available);
    execute!(stdout, cursor::MoveToColumn(col as u16), cursor::Show)?;
    stdout.flush()?;
    Ok(())
}

fn finish_line(stdout: &mut io::Stdout, label: &str, mode: InputMode, input: &str) -> Result<()> {
    execute!(
        stdout,
        cursor::MoveToColumn(0),
        terminal::Clear(ClearType::FromCursorDown),
        SetForegroundColor(mode.label_color())
    )?;
    write!(stdout, "{label}")?;
    execute!(stdout, ResetColor)?;
    write!(stdout, "{input}\r\n")?;
    stdout.flush()?;
    Ok(())
}

fn input_cursor_col(input: &str, cursor_chars: usize, available: usize) -> usize {
    let before_cursor: String = input.chars().take(cursor_chars).collect();
    if display_width(input) <= available {
        return display_width(&before_cursor);
    }

    // 오버플로우 상태에서는 tail 표시 정책상 커서를 입력 끝쪽으로 정렬한다.
    display_width(&tail_with_ellipsis_display(input, available))
}

fn tail_with_ellipsis_display(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    let text_width = display_width(text);
    if text_width <= max_width {
        return text.to_string();
    }

    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let target = max_width - 3;
    let mut tail_rev = String::new();
    let mut used = 0usize;

    for ch in text.chars().rev() {
        let cw = char_display_width(ch);
        if used + cw > target {
            break;
        }
        tail_rev.push(ch);
        used += cw;
    }

    let tail: String = tail_rev.chars().rev().collect();
    format!("...{tail}")
}

fn clip_line_display(line: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    if display_width(line) <= max_width {
        return line.to_string();
    }

    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let mut out = String::new();
    let mut used = 0usize;
    let cap = max_width - 3;

    for ch in line.chars() {
        let cw = char_display_width(ch);
        if used + cw > cap {
            break;
        }
        out.push(ch);
        used += cw;
    }

    out.push_str("...");
    out
}

fn trim_newline(mut s: String) -> String {
    while matches!(s.chars().last(), Some('\n' | '\r')) {
        s.pop();
    }
    s
}

fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

fn char_display_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

struct InputGuard;

impl InputGuard {
    fn enter(stdout: &mut io::Stdout) -> Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(stdout, cursor::Show)?;
        Ok(Self)
    }
}

impl Drop for InputGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show, ResetColor);
        let _ = terminal::disable_raw_mode();
        let _ = stdout.flush();
    }
}

fn insert_char_at(input: &mut String, char_idx: usize, ch: char) {
    let byte_idx = byte_index_at_char(input, char_idx);
    input.insert(byte_idx, ch);
}

fn remove_char_at(input: &mut String, char_idx: usize) {
    let start = byte_index_at_char(input, char_idx);
    let end = byte_index_at_char(input, char_idx + 1);
    if start < end && end <= input.len() {
        input.replace_range(start..end, "");
    }
}

fn byte_index_at_char(input: &str, char_idx: usize) -> usize {
    if char_idx == 0 {
        return 0;
    }
    input
        .char_indices()
        .nth(char_idx)
        .map(|(idx, _)| idx)
        .unwrap_or(input.len())
}
