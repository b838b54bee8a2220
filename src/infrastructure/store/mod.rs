//! 퀴즈 저장소 포트 구현체.

mod json_file;
mod memory;
mod table;

pub use json_file::JsonQuizStore;
pub use memory::MemoryQuizStore;
