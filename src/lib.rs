//! 모임 등록 서비스 백엔드
//!
//! 모임을 만들고, 한 모임에 회원 목록을 한 번에 등록하는 Rust 기반 서비스입니다.
//!
//! # Features
//!
//! - **모임 생성**: 이름 유일성 확인 후 저장
//! - **회원 일괄 등록**: 고정 크기 작업자 풀로 동시 저장, 회원별 결과 리포트
//! - **모임 내 고유성**: 이메일, 전화번호, 이름 중복을 회원 단위 충돌로 보고
//! - **취소**: 배치 마감 시간 또는 클라이언트 연결 종료 시 남은 작업 취소
//! - **MongoDB / 인메모리 저장소**: `STORE_BACKEND`로 선택
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, 취소 가드
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 모임 생성, 일괄 등록 (작업자 풀)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  MeetingStore   │ ← Mongo / InMemory 구현체
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use meeting_enrollment_backend::repositories::meetings::InMemoryMeetingStore;
//! use meeting_enrollment_backend::services::enrollment::{
//!     CancellationSignal, EnrollmentOptions, EnrollmentService,
//! };
//!
//! let store = Arc::new(InMemoryMeetingStore::new());
//! let service = EnrollmentService::new(store, EnrollmentOptions::default());
//!
//! let report = service
//!     .enroll_members(&meeting_id, candidates, CancellationSignal::new())
//!     .await?;
//! println!("{} / {} 등록 성공", report.created, report.total);
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
