//! 콘솔 렌더러 포트 구현 어댑터.

use std::io::{self, IsTerminal};

use crossterm::style::{Color, Stylize};

use crate::application::ports::{Renderer, Tone};
use crate::infrastructure::render::render_banner;

/// stdout/stderr 출력 어댑터. TTY일 때만 색을 입힌다.
pub struct ConsoleRenderer {
    interactive: bool,
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleRenderer {
    pub fn new() -> Self {
        Self {
            interactive: io::stdout().is_terminal(),
        }
    }

    fn paint(&self, text: &str, tone: Tone) -> String {
        paint(text, tone, self.interactive)
    }
}

impl Renderer for ConsoleRenderer {
    fn log(&self, text: &str, tone: Tone) {
        println!("{}", self.paint(text, tone));
    }

    fn biglog(&self, text: &str, tone: Tone) {
        for line in render_banner(text) {
            println!("{}", self.paint(&line, tone));
        }
    }

    fn errorlog(&self, text: &str) {
        let interactive = io::stderr().is_terminal();
        eprintln!(
            "{} {}",
            paint("Error:", Tone::Red, interactive),
            paint(text, Tone::Red, interactive)
        );
    }

    fn colorize(&self, text: &str, tone: Tone) -> String {
        self.paint(text, tone)
    }
}

fn paint(text: &str, tone: Tone, interactive: bool) -> String {
    let color = match tone {
        Tone::Plain => return text.to_string(),
        Tone::Green => Color::Green,
        Tone::Red => Color::Red,
        Tone::Magenta => Color::Magenta,
        Tone::Yellow => Color::Yellow,
    };
    if interactive {
        text.with(color).bold().to_string()
    } else {
        text.to_string()
    }
}
