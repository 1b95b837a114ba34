//! # 회원 일괄 등록
//!
//! - [`enrollment_service`] - 존재 확인, 검증, 작업자 풀 실행, 리포트 생성
//! - [`member_validator`] - 후보 회원 형식 검증
//! - [`worker_pool`] - 고정 크기 작업자 풀과 작업 큐
//! - [`outcome_collector`] - 인덱스별 결과 슬롯
//! - [`cancellation`] - 배치 단위 취소 신호

pub mod cancellation;
pub mod enrollment_service;
pub mod member_validator;
pub mod outcome_collector;
pub mod worker_pool;

pub use cancellation::{CancelOnDrop, CancellationSignal};
pub use enrollment_service::{BatchError, EnrollmentOptions, EnrollmentService};
