//! Domain layer
//! 퀴즈 엔티티, 명령 어휘, 인자 검증, play 세션 상태를 외부 의존성 없이 표현한다.

pub mod command;
pub mod error;
pub mod id;
pub mod quiz;
pub mod session;
