//! `quizshell` 대화형 쉘(REPL) 인터페이스.
//!
//! 명령 하나를 끝까지 처리한 뒤에만 다음 프롬프트를 띄운다.
//! 처리 중 오류는 여기서 한 번 출력하고 세션은 계속된다. quit/EOF만 세션을 끝낸다.

use anyhow::Result;

use crate::application::ports::{Renderer, Tone};
use crate::domain::command::{COMMANDS, ShellCommand};
use crate::domain::error::QuizError;
use crate::interface::cli::composition::AppComposition;

const AUTHORS: [&str; 1] = ["Andrés Moreno Miguel"];

/// 입력 스트림 자체가 망가졌다고 보는 연속 읽기 실패 횟수.
const MAX_READ_FAILURES: usize = 3;

/// 명령 처리 후 쉘 진행 여부.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// 입력이 끝나거나 quit 명령이 올 때까지 명령을 읽고 처리한다.
/// 한 줄 읽기 실패는 보고만 하고 계속한다.
pub async fn run_repl(composition: &AppComposition) -> Result<()> {
    let renderer = composition.renderer();
    renderer.log("Welcome to the quiz shell! Type `help` for commands.", Tone::Green);

    let mut read_failures = 0;
    loop {
        let line = match composition.prompter().read_command().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(err) => {
                // 잘못된 줄은 이미 소비됐으므로 다음 읽기로 넘어간다.
                renderer.errorlog(&format!("failed to read command: {err:#}"));
                read_failures += 1;
                if read_failures >= MAX_READ_FAILURES {
                    tracing::warn!(read_failures, "command input keeps failing, closing session");
                    break;
                }
                continue;
            }
        };
        read_failures = 0;

        if dispatch_line(composition, &line).await == Flow::Quit {
            break;
        }
    }

    renderer.log("Bye!", Tone::Plain);
    Ok(())
}

/// 한 줄을 해석해 실행하고 오류를 출력한다.
pub async fn dispatch_line(composition: &AppComposition, line: &str) -> Flow {
    let renderer = composition.renderer();

    let command = match ShellCommand::parse(line) {
        Ok(Some(command)) => command,
        Ok(None) => return Flow::Continue,
        Err(verb) => {
            renderer.errorlog(&format!("Unknown command: '{verb}'"));
            renderer.log("Use 'help' to see all available commands.", Tone::Plain);
            return Flow::Continue;
        }
    };

    tracing::debug!(verb = command.verb(), "dispatching command");
    match execute_command(composition, command).await {
        Ok(flow) => flow,
        // 질문 도중 입력이 닫히면 더 읽을 것이 없다.
        Err(QuizError::InputClosed) => Flow::Quit,
        Err(err) => {
            report_error(renderer, &err);
            Flow::Continue
        }
    }
}

async fn execute_command(
    composition: &AppComposition,
    command: ShellCommand,
) -> Result<Flow, QuizError> {
    match command {
        ShellCommand::Help => print_help(composition.renderer()),
        ShellCommand::List => {
            composition.list_usecase().execute().await?;
        }
        ShellCommand::Show(id) => {
            composition.show_usecase().execute(id.as_deref()).await?;
        }
        ShellCommand::Add => {
            composition.add_usecase().execute().await?;
        }
        ShellCommand::Delete(id) => {
            composition.delete_usecase().execute(id.as_deref()).await?;
        }
        ShellCommand::Edit(id) => {
            composition.edit_usecase().execute(id.as_deref()).await?;
        }
        ShellCommand::Test(id) => {
            composition.test_usecase().execute(id.as_deref()).await?;
        }
        ShellCommand::Play => {
            composition.play_usecase().execute().await?;
        }
        ShellCommand::Credits => print_credits(composition.renderer()),
        ShellCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

/// 검증 오류는 필드별로 한 줄씩, 나머지는 한 줄로 출력한다.
pub fn report_error(renderer: &dyn Renderer, err: &QuizError) {
    match err {
        QuizError::ValidationFailed(fields) => {
            renderer.errorlog("The quiz is invalid:");
            for field in fields {
                renderer.errorlog(&field.message);
            }
        }
        other => renderer.errorlog(&other.to_string()),
    }
}

fn print_help(renderer: &dyn Renderer) {
    renderer.log("Commands:", Tone::Plain);
    for spec in &COMMANDS {
        renderer.log(
            &format!("  {} - {}", spec.usage(), spec.description),
            Tone::Plain,
        );
    }
}

fn print_credits(renderer: &dyn Renderer) {
    renderer.log("Authors:", Tone::Plain);
    for author in AUTHORS {
        renderer.log(author, Tone::Green);
    }
}
