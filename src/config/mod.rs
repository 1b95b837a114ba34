//! # 설정 모듈
//!
//! 환경 변수 기반 설정을 정적 함수 형태로 제공합니다.
//!
//! | 구조체 | 환경 변수 |
//! |--------|-----------|
//! | [`ServerConfig`] | `HOST`, `PORT`, `HTTP_WORKERS`, `MAX_PAYLOAD_BYTES` |
//! | [`DatabaseConfig`] | `MONGODB_URI`, `MONGODB_DBNAME`, `STORE_BACKEND` |
//! | [`EnrollmentConfig`] | `ENROLLMENT_WORKERS`, `ENROLLMENT_BATCH_TIMEOUT_SECS` |
//! | [`RateLimitConfig`] | `RATE_LIMIT_PER_SECOND`, `RATE_LIMIT_BURST_SIZE` |
//! | [`Environment`] | `ENVIRONMENT` |

pub mod data_config;
pub mod enrollment_config;

pub use data_config::*;
pub use enrollment_config::*;
