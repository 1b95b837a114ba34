//! Members Entity Module
//!
//! 모임 회원 엔티티를 정의합니다.

pub mod member;

pub use member::{Member, NewMember};
