//! 쉘 명령 어휘와 파싱 규칙.

/// 명령 한 개의 표기 정보. help 출력과 입력 추천이 같은 표를 쓴다.
pub struct CommandSpec {
    pub verb: &'static str,
    pub aliases: &'static [&'static str],
    pub argument: Option<&'static str>,
    pub description: &'static str,
}

impl CommandSpec {
    /// `h|help`, `show <id>` 형태의 사용법.
    pub fn usage(&self) -> String {
        let mut names: Vec<&str> = self.aliases.to_vec();
        names.push(self.verb);
        let names = names.join("|");
        match self.argument {
            Some(arg) => format!("{names} {arg}"),
            None => names,
        }
    }

    pub fn matches(&self, word: &str) -> bool {
        self.verb == word || self.aliases.contains(&word)
    }
}

pub const COMMANDS: [CommandSpec; 10] = [
    CommandSpec {
        verb: "help",
        aliases: &["h"],
        argument: None,
        description: "Show this help.",
    },
    CommandSpec {
        verb: "list",
        aliases: &[],
        argument: None,
        description: "List the existing quizzes.",
    },
    CommandSpec {
        verb: "show",
        aliases: &[],
        argument: Some("<id>"),
        description: "Show the question and answer of the given quiz.",
    },
    CommandSpec {
        verb: "add",
        aliases: &[],
        argument: None,
        description: "Add a new quiz interactively.",
    },
    CommandSpec {
        verb: "delete",
        aliases: &[],
        argument: Some("<id>"),
        description: "Delete the given quiz.",
    },
    CommandSpec {
        verb: "edit",
        aliases: &[],
        argument: Some("<id>"),
        description: "Edit the given quiz.",
    },
    CommandSpec {
        verb: "test",
        aliases: &[],
        argument: Some("<id>"),
        description: "Test yourself on the given quiz.",
    },
    CommandSpec {
        verb: "play",
        aliases: &["p"],
        argument: None,
        description: "Play: answer every quiz in random order.",
    },
    CommandSpec {
        verb: "credits",
        aliases: &[],
        argument: None,
        description: "Credits.",
    },
    CommandSpec {
        verb: "quit",
        aliases: &["q"],
        argument: None,
        description: "Quit the program.",
    },
];

/// 명령 단어(동사 또는 별칭)에 해당하는 명세를 찾는다. 대소문자를 구분한다.
pub fn lookup(word: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|spec| spec.matches(word))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Help,
    List,
    Show(Option<String>),
    Add,
    Delete(Option<String>),
    Edit(Option<String>),
    Test(Option<String>),
    Play,
    Credits,
    Quit,
}

impl ShellCommand {
    /// 입력 한 줄을 명령으로 바꾼다.
    /// 빈 줄은 `Ok(None)`, 모르는 명령은 `Err(동사)`.
    /// 인자는 동사 뒤 첫 토큰만 쓰고 나머지는 무시한다.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Ok(None);
        };
        let arg = words.next().map(ToString::to_string);

        let Some(spec) = lookup(word) else {
            return Err(word.to_string());
        };

        let command = match spec.verb {
            "help" => Self::Help,
            "list" => Self::List,
            "show" => Self::Show(arg),
            "add" => Self::Add,
            "delete" => Self::Delete(arg),
            "edit" => Self::Edit(arg),
            "test" => Self::Test(arg),
            "play" => Self::Play,
            "credits" => Self::Credits,
            _ => Self::Quit,
        };
        Ok(Some(command))
    }

    pub fn verb(&self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::List => "list",
            Self::Show(_) => "show",
            Self::Add => "add",
            Self::Delete(_) => "delete",
            Self::Edit(_) => "edit",
            Self::Test(_) => "test",
            Self::Play => "play",
            Self::Credits => "credits",
            Self::Quit => "quit",
        }
    }
}
