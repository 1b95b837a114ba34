//! # 모임 관련 DTO 모듈
//!
//! - [`request`] - 모임 생성 요청 (`CreateMeetingRequest`)
//! - [`response`] - 모임 응답 (`MeetingResponse`)

pub mod request;
pub mod response;

pub use request::CreateMeetingRequest;
pub use response::{MeetingResponse, MemberSummaryResponse};
