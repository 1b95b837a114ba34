//! # Core Module
//!
//! 애플리케이션 전반에서 공유하는 기반 타입을 제공합니다.
//!
//! - [`errors`] - `AppError`와 저장소/배치 에러 변환
//! - [`state`] - 핸들러에 주입되는 `AppState`

pub mod errors;
pub mod state;

pub use errors::*;
pub use state::AppState;
