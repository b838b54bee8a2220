//! Infrastructure layer
//! 외부 시스템(파일시스템/터미널)과 직접 통신하는 구현체 집합.

pub mod adapters;
pub mod config;
pub mod render;
pub mod repl_input;
pub mod store;
