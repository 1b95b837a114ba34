//! Meeting Entity Implementation
//!
//! 모임 엔티티의 핵심 구현체입니다.
//! `meetings` 컬렉션의 문서 구조와 1:1로 대응하며,
//! 등록된 회원의 요약 정보(`{id, name}`)를 비정규화하여 함께 보관합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 모임 엔티티
///
/// 모임 이름은 전체 모임 사이에서 유일해야 합니다 (대소문자 구분).
/// 유일성은 생성 시점의 가용성 확인과 저장소의 유니크 인덱스로 보장됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meeting {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 모임 이름 (unique)
    pub name: String,
    /// 모임 설명
    pub description: String,
    /// 모임 일시
    pub date: DateTime,
    /// 등록된 회원 요약 목록
    #[serde(default)]
    pub members: Vec<MemberSummary>,
}

/// 모임 문서에 포함되는 회원 요약
///
/// 회원 등록이 성공하면 모임 문서의 `members` 배열에 추가됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberSummary {
    pub id: ObjectId,
    pub name: String,
}

/// 아직 저장되지 않은 모임
///
/// 저장소가 ID를 할당하기 전의 입력값입니다.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMeeting {
    pub name: String,
    pub description: String,
    pub date: DateTime,
}

impl Meeting {
    /// 새 모임 입력값과 저장소가 할당한 ID로 엔티티를 만듭니다.
    pub fn from_new(id: ObjectId, new_meeting: NewMeeting) -> Self {
        Self {
            id: Some(id),
            name: new_meeting.name,
            description: new_meeting.description,
            date: new_meeting.date,
            members: Vec::new(),
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_new_assigns_id_and_empty_members() {
        let id = ObjectId::new();
        let meeting = Meeting::from_new(
            id,
            NewMeeting {
                name: "Rust Meetup".to_string(),
                description: "monthly".to_string(),
                date: DateTime::from_millis(0),
            },
        );

        assert_eq!(meeting.id_string(), Some(id.to_hex()));
        assert!(meeting.members.is_empty());
    }
}
