//! Meetings Entity Module
//!
//! 모임 도메인의 엔티티를 정의합니다.

pub mod meeting;

pub use meeting::{Meeting, MemberSummary, NewMeeting};
