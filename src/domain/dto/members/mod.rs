//! # 회원 등록 관련 DTO 모듈
//!
//! - [`request`] - 등록 후보 회원 (`EnrollMemberRequest`)
//! - [`response`] - 회원별 결과와 배치 리포트 (`EnrollmentOutcome`, `BatchReport`)

pub mod request;
pub mod response;

pub use request::EnrollMemberRequest;
pub use response::{
    BatchReport, EnrollmentFailure, EnrollmentOutcome, FailureKind, MemberResponse, OutcomeResult,
};
