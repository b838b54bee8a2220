//! CLI 인자 파싱 모듈.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "quizshell")]
#[command(about = "Interactive quiz shell: list, add, edit, test and play trivia questions")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Quiz store file (overrides `store.path`)
    #[arg(long, value_name = "PATH")]
    store: Option<PathBuf>,

    /// Fixed random seed for play order (overrides `play.seed`)
    #[arg(long)]
    seed: Option<u64>,

    /// Do not populate a new store with sample quizzes
    #[arg(long)]
    no_samples: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show effective merged config and store location
    Config,
}

/// 설정 파일보다 우선하는 실행 옵션.
#[derive(Debug, Clone, Default)]
pub struct ShellOptions {
    pub store: Option<PathBuf>,
    pub seed: Option<u64>,
    pub no_samples: bool,
}

pub enum CliAction {
    Interactive(ShellOptions),
    InspectConfig,
}

impl Cli {
    /// 인자 오류나 `--help`는 clap이 직접 출력하고 종료한다.
    pub fn parse_action() -> CliAction {
        Cli::parse().into_action()
    }

    fn into_action(self) -> CliAction {
        match self.command {
            Some(Commands::Config) => CliAction::InspectConfig,
            None => CliAction::Interactive(ShellOptions {
                store: self.store,
                seed: self.seed,
                no_samples: self.no_samples,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_become_shell_options() {
        let cli = Cli::try_parse_from(["quizshell", "--store", "q.json", "--seed", "7", "--no-samples"])
            .unwrap();
        let CliAction::Interactive(options) = cli.into_action() else {
            panic!("expected interactive action");
        };
        assert_eq!(options.store, Some(PathBuf::from("q.json")));
        assert_eq!(options.seed, Some(7));
        assert!(options.no_samples);
    }

    #[test]
    fn config_subcommand() {
        let cli = Cli::try_parse_from(["quizshell", "config"]).unwrap();
        assert!(matches!(cli.into_action(), CliAction::InspectConfig));
    }
}
