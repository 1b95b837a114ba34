//! # Domain Entities Module
//!
//! MongoDB 컬렉션과 1:1로 대응되는 문서 구조를 정의합니다.
//!
//! | 엔티티 | 컬렉션 | 고유성 |
//! |--------|--------|--------|
//! | [`meetings::Meeting`] | `meetings` | `name` |
//! | [`members::Member`] | `members` | 모임별 `email`, `phone_number`, `name` |
//!
//! 모임 문서는 등록된 회원의 `{id, name}` 요약 목록을 내장합니다.
//! 고유성은 저장소의 유니크 인덱스가 최종적으로 보장합니다.

pub mod meetings;
pub mod members;
