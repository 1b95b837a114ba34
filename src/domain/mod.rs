//! # Domain Layer Module
//!
//! 모임과 회원 도메인을 구성하는 타입들을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - MongoDB 문서와 매핑되는 Meeting, Member
//! └── dto       - HTTP 요청/응답 계약 (모임 생성, 회원 일괄 등록 리포트)
//!      │
//!      ▼
//! Application Layer (services)
//!      │
//!      ▼
//! Infrastructure Layer (repositories, db)
//! ```
//!
//! ## Entity와 DTO의 분리
//!
//! 엔티티는 BSON 표현(`ObjectId`, `bson::DateTime`)을 그대로 사용하고,
//! DTO는 클라이언트에 노출되는 표현(16진 문자열 ID, RFC 3339 시각)을 사용합니다.
//! 두 표현 사이의 변환은 `From` 구현과 [`crate::utils::date_utils`]가 담당합니다.
//!
//! ```rust,ignore
//! use crate::domain::dto::meetings::{CreateMeetingRequest, MeetingResponse};
//!
//! let new_meeting = request.into_new_meeting();
//! let meeting = store.create_meeting(new_meeting).await?;
//! let response = MeetingResponse::from(meeting);
//! ```

pub mod entities;
pub mod dto;
