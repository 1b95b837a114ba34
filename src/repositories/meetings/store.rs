//! # 모임 저장소 계약
//!
//! 모임/회원 데이터 접근을 추상화하는 [`MeetingStore`] trait과
//! 저장소 계층의 에러 타입 [`StoreError`]를 정의합니다.
//!
//! ## 구현체
//!
//! | 구현체 | 선택 | 용도 |
//! |--------|------|------|
//! | [`MongoMeetingStore`](super::mongo_store::MongoMeetingStore) | `STORE_BACKEND=mongo` | 운영 |
//! | [`InMemoryMeetingStore`](super::memory_store::InMemoryMeetingStore) | `STORE_BACKEND=memory` | 로컬 실행, 테스트 |
//!
//! 서비스 계층은 `Arc<dyn MeetingStore>`만 알고 있으며, 어떤 구현체를 쓸지는
//! 애플리케이션 시작 시점에 한 번 결정됩니다.
//!
//! ## 동시성 요구사항
//!
//! 일괄 등록 작업자들이 같은 저장소 핸들을 동시에 사용하므로
//! 구현체는 `Send + Sync`여야 하고, 고유성 검사는 저장소 내부에서 원자적으로 수행되어야 합니다.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::meetings::{Meeting, NewMeeting};
use crate::domain::entities::members::{Member, NewMember};

/// 저장소 계층 에러
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// 유니크 제약 위반. `field`는 충돌한 필드 이름입니다.
    #[error("{message}")]
    Conflict { field: String, message: String },

    /// 회원을 연결할 모임이 없음
    #[error("meeting {0} does not exist")]
    MeetingNotFound(String),

    /// 회원 문서는 저장됐지만 모임 연결에 실패하여 보상 삭제됨
    #[error("failed to link member to meeting: {0}")]
    LinkFailed(String),

    /// 모임 연결과 보상 삭제가 모두 실패하여 회원 문서가 남아 있음
    #[error("member {member_id} is orphaned: {message}")]
    OrphanedMember { member_id: String, message: String },

    /// 그 밖의 저장소 오류
    #[error("store error: {0}")]
    Database(String),
}

impl StoreError {
    pub fn conflict(field: &str, message: &str) -> Self {
        StoreError::Conflict {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// 모임/회원 저장소 인터페이스
///
/// # 예제
///
/// ```rust,ignore
/// let store: Arc<dyn MeetingStore> = Arc::new(InMemoryMeetingStore::new());
///
/// if store.check_availability("Rust Meetup").await? {
///     let meeting = store.create_meeting(new_meeting).await?;
///     let member = store.add_member(&meeting.id_string().unwrap(), new_member).await?;
/// }
/// ```
#[async_trait]
pub trait MeetingStore: Send + Sync {
    /// 모임 이름이 아직 사용되지 않았는지 확인합니다.
    async fn check_availability(&self, name: &str) -> Result<bool, StoreError>;

    /// 모임 존재 여부를 확인합니다.
    ///
    /// ObjectId 형식이 아닌 ID는 존재하지 않는 모임으로 취급합니다.
    async fn meeting_exists(&self, meeting_id: &str) -> Result<bool, StoreError>;

    /// 모임을 생성하고 ID가 할당된 엔티티를 반환합니다.
    ///
    /// 이름이 이미 사용 중이면 `Conflict { field: "name" }`을 반환합니다.
    async fn create_meeting(&self, meeting: NewMeeting) -> Result<Meeting, StoreError>;

    /// 회원을 저장하고 모임의 회원 요약 목록에 연결합니다.
    ///
    /// 연결에 실패하면 저장한 회원 문서를 삭제한 뒤 `LinkFailed`를,
    /// 삭제마저 실패하면 `OrphanedMember`를 반환합니다.
    async fn add_member(&self, meeting_id: &str, member: NewMember) -> Result<Member, StoreError>;
}

/// 모임 이름 중복 시 사용하는 충돌 에러
pub(crate) fn meeting_name_conflict() -> StoreError {
    StoreError::conflict("name", "meeting name is already used")
}

/// 회원 필드별 중복 메시지
pub(crate) fn member_conflict(field: &str) -> StoreError {
    let message = match field {
        "email" => "email already in use in this meeting",
        "phone_number" => "phone number already in use in this meeting",
        _ => "name already in use in this meeting",
    };
    StoreError::conflict(field, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_conflict_messages() {
        let err = member_conflict("email");

        assert!(matches!(err, StoreError::Conflict { ref field, .. } if field == "email"));
        assert_eq!(err.to_string(), "email already in use in this meeting");
    }

    #[test]
    fn test_orphaned_member_display_contains_id() {
        let err = StoreError::OrphanedMember {
            member_id: "665f".to_string(),
            message: "link failed".to_string(),
        };

        assert!(err.to_string().contains("665f"));
        assert!(!matches!(err, StoreError::Conflict { .. }));
    }
}
