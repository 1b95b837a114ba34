//! Member Entity Implementation
//!
//! 모임에 등록된 회원 엔티티입니다. `members` 컬렉션에 저장되며
//! 소속 모임의 ID(`meeting_id`)를 함께 보관합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::domain::entities::meetings::MemberSummary;

/// 회원 엔티티
///
/// 같은 모임 안에서 `email`, `phone_number`, `name`은 각각 유일해야 합니다.
/// 이 제약은 저장소의 복합 유니크 인덱스가 강제합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 소속 모임 ID
    pub meeting_id: ObjectId,
    /// 회원 이름
    pub name: String,
    /// 전화번호
    pub phone_number: String,
    /// 이메일
    pub email: String,
    /// 가입일
    pub membership_date: DateTime,
}

/// 아직 저장되지 않은 회원
#[derive(Debug, Clone, PartialEq)]
pub struct NewMember {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub membership_date: DateTime,
}

impl Member {
    /// 저장소가 할당한 ID와 소속 모임으로 엔티티를 만듭니다.
    pub fn from_new(id: ObjectId, meeting_id: ObjectId, new_member: NewMember) -> Self {
        Self {
            id: Some(id),
            meeting_id,
            name: new_member.name,
            phone_number: new_member.phone_number,
            email: new_member.email,
            membership_date: new_member.membership_date,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 모임 문서에 넣을 요약 정보를 만듭니다.
    ///
    /// ID가 아직 할당되지 않은 회원이면 `None`을 반환합니다.
    pub fn summary(&self) -> Option<MemberSummary> {
        self.id.map(|id| MemberSummary {
            id,
            name: self.name.clone(),
        })
    }
}
