//! 애플리케이션 조립(composition root) 모듈.

use std::sync::Mutex;

use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::application::ports::{ConfigRepository, Prompter, QuizRepository, Renderer};
use crate::application::usecases::add_quiz::AddQuizUseCase;
use crate::application::usecases::delete_quiz::DeleteQuizUseCase;
use crate::application::usecases::edit_quiz::EditQuizUseCase;
use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::application::usecases::list_quizzes::ListQuizzesUseCase;
use crate::application::usecases::play::PlayUseCase;
use crate::application::usecases::show_quiz::ShowQuizUseCase;
use crate::application::usecases::test_quiz::TestQuizUseCase;
use crate::infrastructure::adapters::{ConsoleRenderer, JsonConfigRepository, TerminalPrompter};
use crate::infrastructure::store::JsonQuizStore;
use crate::interface::cli::command::ShellOptions;

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    config_repo: JsonConfigRepository,
    quiz_repo: Box<dyn QuizRepository>,
    prompter: Box<dyn Prompter>,
    renderer: Box<dyn Renderer>,
    rng: Mutex<StdRng>,
}

impl AppComposition {
    /// 설정 파일 + CLI 옵션으로 터미널용 조합을 만든다.
    pub fn from_options(options: &ShellOptions) -> Result<Self> {
        let config_repo = JsonConfigRepository;
        let mut config = config_repo.load()?;
        if let Some(store) = &options.store {
            config.store.path = Some(store.display().to_string());
        }
        if options.no_samples {
            config.store.seed_samples = Some(false);
        }
        if options.seed.is_some() {
            config.play.seed = options.seed;
        }

        let store_path = config.store_path();
        tracing::debug!(store = %store_path.display(), "using quiz store");

        Ok(Self::with_ports(
            Box::new(JsonQuizStore::new(store_path, config.seed_samples())),
            Box::new(TerminalPrompter::new(config.prompt())),
            Box::new(ConsoleRenderer::new()),
            config.play_seed(),
        ))
    }

    /// 포트 구현을 외부에서 주입한다. `seed`가 없으면 OS 난수로 시작한다.
    pub fn with_ports(
        quiz_repo: Box<dyn QuizRepository>,
        prompter: Box<dyn Prompter>,
        renderer: Box<dyn Renderer>,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config_repo: JsonConfigRepository,
            quiz_repo,
            prompter,
            renderer,
            rng: Mutex::new(rng),
        }
    }

    pub fn prompter(&self) -> &dyn Prompter {
        self.prompter.as_ref()
    }

    pub fn renderer(&self) -> &dyn Renderer {
        self.renderer.as_ref()
    }

    /// 설정 점검 유스케이스를 생성한다.
    pub fn inspect_config_usecase(&self) -> InspectConfigUseCase<'_> {
        InspectConfigUseCase {
            config_repo: &self.config_repo,
        }
    }

    pub fn list_usecase(&self) -> ListQuizzesUseCase<'_> {
        ListQuizzesUseCase {
            quiz_repo: self.quiz_repo.as_ref(),
            renderer: self.renderer.as_ref(),
        }
    }

    pub fn show_usecase(&self) -> ShowQuizUseCase<'_> {
        ShowQuizUseCase {
            quiz_repo: self.quiz_repo.as_ref(),
            renderer: self.renderer.as_ref(),
        }
    }

    pub fn add_usecase(&self) -> AddQuizUseCase<'_> {
        AddQuizUseCase {
            quiz_repo: self.quiz_repo.as_ref(),
            prompter: self.prompter.as_ref(),
            renderer: self.renderer.as_ref(),
        }
    }

    pub fn delete_usecase(&self) -> DeleteQuizUseCase<'_> {
        DeleteQuizUseCase {
            quiz_repo: self.quiz_repo.as_ref(),
            renderer: self.renderer.as_ref(),
        }
    }

    pub fn edit_usecase(&self) -> EditQuizUseCase<'_> {
        EditQuizUseCase {
            quiz_repo: self.quiz_repo.as_ref(),
            prompter: self.prompter.as_ref(),
            renderer: self.renderer.as_ref(),
        }
    }

    pub fn test_usecase(&self) -> TestQuizUseCase<'_> {
        TestQuizUseCase {
            quiz_repo: self.quiz_repo.as_ref(),
            prompter: self.prompter.as_ref(),
            renderer: self.renderer.as_ref(),
        }
    }

    /// play 세션 유스케이스를 생성한다. 난수 상태는 세션 사이에 이어진다.
    pub fn play_usecase(&self) -> PlayUseCase<'_> {
        PlayUseCase {
            quiz_repo: self.quiz_repo.as_ref(),
            prompter: self.prompter.as_ref(),
            renderer: self.renderer.as_ref(),
            rng: &self.rng,
        }
    }
}
