//! quizshell library root.
//! Clean Architecture + DDD 계층을 외부에 노출한다.

use anyhow::Result;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use interface::cli::{AppComposition, ShellOptions, run_repl};

/// 라이브러리 직접 호출용 실행 함수. 터미널 쉘을 끝날 때까지 돌린다.
pub async fn run(options: ShellOptions) -> Result<()> {
    let composition = AppComposition::from_options(&options)?;
    run_repl(&composition).await
}

/// 설정 점검 JSON 출력용 함수.
pub fn inspect_config_pretty_json() -> Result<String> {
    let composition = AppComposition::from_options(&ShellOptions::default())?;
    composition.inspect_config_usecase().execute()
}
