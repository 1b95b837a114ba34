//! 공통 유틸리티
//!
//! - [`date_utils`] - `chrono`와 BSON 시각 변환
//! - [`display_terminal`] - 기동 과정 터미널 출력

pub mod date_utils;
pub mod display_terminal;
