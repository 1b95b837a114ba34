//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 데이터 계약을 정의합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── meetings/
//! │   ├── request.rs    # CreateMeetingRequest
//! │   └── response.rs   # MeetingResponse
//! └── members/
//!     ├── request.rs    # EnrollMemberRequest (일괄 등록의 원소)
//!     └── response.rs   # EnrollmentOutcome, BatchReport
//! ```
//!
//! 요청 DTO는 `validator` derive로 형식 규칙을 선언하고,
//! 응답 DTO는 엔티티로부터 `From` 구현으로 만들어집니다.

pub mod meetings;
pub mod members;
