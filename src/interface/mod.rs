//! 사용자 접점 계층.

pub mod cli;
