//! `quizshell` 바이너리 진입점.

use quizshell::interface::cli::{Cli, CliAction};

#[tokio::main]
async fn main() {
    // stdout은 쉘 출력 전용이다.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse_action() {
        CliAction::InspectConfig => match quizshell::inspect_config_pretty_json() {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: {err:#}");
                std::process::exit(1);
            }
        },
        CliAction::Interactive(options) => {
            if let Err(err) = quizshell::run(options).await {
                eprintln!("error: {err:#}");
                std::process::exit(1);
            }
        }
    }
}
