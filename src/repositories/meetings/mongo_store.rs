//! # MongoDB 모임 저장소
//!
//! `meetings`, `members` 두 컬렉션을 사용하는 [`MeetingStore`] 구현체입니다.
//!
//! ## 인덱스
//!
//! | 컬렉션 | 인덱스 | 키 |
//! |--------|--------|----|
//! | `meetings` | `meeting_name_unique` | `name` |
//! | `members` | `member_email_unique` | `(meeting_id, email)` |
//! | `members` | `member_phone_unique` | `(meeting_id, phone_number)` |
//! | `members` | `member_name_unique` | `(meeting_id, name)` |
//!
//! 동시에 실행되는 등록 작업자 사이의 중복은 사전 조회가 아니라 유니크 인덱스로 막습니다.
//! 중복 키 쓰기 에러(code 11000)는 메시지에 포함된 인덱스 이름으로 충돌 필드를 판별해
//! [`StoreError::Conflict`]로 변환합니다.

use async_trait::async_trait;
use log::{debug, error, warn};
use mongodb::{
    bson::{doc, oid::ObjectId},
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::db::Database;
use crate::domain::entities::meetings::{Meeting, NewMeeting};
use crate::domain::entities::members::{Member, NewMember};
use crate::repositories::meetings::store::{
    meeting_name_conflict, member_conflict, MeetingStore, StoreError,
};

const MEETINGS_COLLECTION: &str = "meetings";
const MEMBERS_COLLECTION: &str = "members";

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

const MEETING_NAME_INDEX: &str = "meeting_name_unique";

/// 회원 유니크 인덱스 이름과 충돌 필드
const MEMBER_UNIQUE_INDEXES: [(&str, &str); 3] = [
    ("member_email_unique", "email"),
    ("member_phone_unique", "phone_number"),
    ("member_name_unique", "name"),
];

/// MongoDB 기반 모임 저장소
#[derive(Clone)]
pub struct MongoMeetingStore {
    meetings: Collection<Meeting>,
    members: Collection<Member>,
}

impl MongoMeetingStore {
    pub fn new(database: &Database) -> Self {
        let db = database.get_database();

        Self {
            meetings: db.collection::<Meeting>(MEETINGS_COLLECTION),
            members: db.collection::<Member>(MEMBERS_COLLECTION),
        }
    }

    /// 고유성 제약에 필요한 인덱스를 생성합니다.
    ///
    /// 애플리케이션 시작 시 한 번 호출합니다. 이미 존재하는 인덱스는 그대로 유지됩니다.
    ///
    /// # 주의사항
    ///
    /// 컬렉션에 이미 중복 데이터가 있으면 유니크 인덱스 생성이 실패합니다.
    pub async fn ensure_indexes(&self) -> Result<(), StoreError> {
        let meeting_name_index = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name(MEETING_NAME_INDEX.to_string())
                .build())
            .build();

        self.meetings
            .create_index(meeting_name_index)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        let member_indexes = MEMBER_UNIQUE_INDEXES.iter().map(|(index_name, field)| {
            let mut keys = doc! { "meeting_id": 1 };
            keys.insert(*field, 1);

            IndexModel::builder()
                .keys(keys)
                .options(IndexOptions::builder()
                    .unique(true)
                    .name(index_name.to_string())
                    .build())
                .build()
        });

        self.members
            .create_indexes(member_indexes)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        debug!("모임/회원 인덱스 확인 완료");
        Ok(())
    }

    /// 모임 연결 실패 후 회원 문서를 삭제합니다.
    async fn compensate(&self, member_id: ObjectId, reason: String) -> StoreError {
        match self.members.delete_one(doc! { "_id": member_id }).await {
            Ok(_) => {
                warn!("회원 {} 모임 연결 실패, 보상 삭제 완료: {}", member_id, reason);
                StoreError::LinkFailed(reason)
            }
            Err(e) => {
                error!("회원 {} 보상 삭제 실패: {} (원인: {})", member_id, e, reason);
                StoreError::OrphanedMember {
                    member_id: member_id.to_hex(),
                    message: format!("{}; compensating delete failed: {}", reason, e),
                }
            }
        }
    }
}

/// 중복 키 에러라면 메시지에 담긴 인덱스 이름을 반환합니다.
fn duplicate_key_message(err: &MongoError) -> Option<&str> {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE =>
        {
            Some(write_error.message.as_str())
        }
        _ => None,
    }
}

fn map_meeting_insert_error(err: MongoError) -> StoreError {
    match duplicate_key_message(&err) {
        Some(_) => meeting_name_conflict(),
        None => StoreError::Database(err.to_string()),
    }
}

fn map_member_insert_error(err: MongoError) -> StoreError {
    let Some(message) = duplicate_key_message(&err) else {
        return StoreError::Database(err.to_string());
    };

    match member_conflict_field(message) {
        Some(field) => member_conflict(field),
        None => StoreError::conflict("member", message),
    }
}

/// E11000 메시지의 `index: <이름>` 부분으로 충돌한 회원 필드를 찾습니다.
///
/// 중복된 값 자체가 인덱스 이름을 포함할 수 있으므로 `dup key` 앞부분만 봅니다.
fn member_conflict_field(message: &str) -> Option<&'static str> {
    let index_name = message
        .split_once("index: ")?
        .1
        .split_whitespace()
        .next()?;

    MEMBER_UNIQUE_INDEXES
        .iter()
        .find(|(name, _)| *name == index_name)
        .map(|(_, field)| *field)
}

#[async_trait]
impl MeetingStore for MongoMeetingStore {
    async fn check_availability(&self, name: &str) -> Result<bool, StoreError> {
        let count = self
            .meetings
            .count_documents(doc! { "name": name })
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(count == 0)
    }

    async fn meeting_exists(&self, meeting_id: &str) -> Result<bool, StoreError> {
        let Ok(object_id) = ObjectId::parse_str(meeting_id) else {
            return Ok(false);
        };

        let count = self
            .meetings
            .count_documents(doc! { "_id": object_id })
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(count > 0)
    }

    async fn create_meeting(&self, meeting: NewMeeting) -> Result<Meeting, StoreError> {
        let id = ObjectId::new();
        let meeting = Meeting::from_new(id, meeting);

        self.meetings
            .insert_one(&meeting)
            .await
            .map_err(map_meeting_insert_error)?;

        Ok(meeting)
    }

    async fn add_member(&self, meeting_id: &str, member: NewMember) -> Result<Member, StoreError> {
        let meeting_oid = ObjectId::parse_str(meeting_id)
            .map_err(|_| StoreError::MeetingNotFound(meeting_id.to_string()))?;

        let member_oid = ObjectId::new();
        let member = Member::from_new(member_oid, meeting_oid, member);

        self.members
            .insert_one(&member)
            .await
            .map_err(map_member_insert_error)?;

        let link = self
            .meetings
            .update_one(
                doc! { "_id": meeting_oid },
                doc! { "$push": { "members": { "id": member_oid, "name": member.name.clone() } } },
            )
            .await;

        match link {
            Ok(result) if result.matched_count == 1 => Ok(member),
            Ok(_) => Err(self
                .compensate(member_oid, format!("meeting {} no longer exists", meeting_id))
                .await),
            Err(e) => Err(self.compensate(member_oid, e.to_string()).await),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_key_messages_map_to_member_fields() {
        let cases = [
            (
                "E11000 duplicate key error collection: meetings_dev.members index: member_email_unique dup key: { meeting_id: ObjectId('665f1c2e9d1a4b0012345678'), email: \"kim@example.com\" }",
                "email",
            ),
            (
                "E11000 duplicate key error collection: meetings_dev.members index: member_phone_unique dup key: { meeting_id: ObjectId('665f1c2e9d1a4b0012345678'), phone_number: \"5551234567\" }",
                "phone_number",
            ),
            (
                "E11000 duplicate key error collection: meetings_dev.members index: member_name_unique dup key: { meeting_id: ObjectId('665f1c2e9d1a4b0012345678'), name: \"Kim\" }",
                "name",
            ),
        ];

        for (message, field) in cases {
            assert_eq!(member_conflict_field(message), Some(field), "{}", message);
        }
    }

    #[test]
    fn test_duplicate_key_value_does_not_pick_index() {
        let message = "E11000 duplicate key error collection: meetings_dev.members index: member_name_unique dup key: { meeting_id: ObjectId('665f1c2e9d1a4b0012345678'), name: \"member_email_unique\" }";

        assert_eq!(member_conflict_field(message), Some("name"));
    }

    #[test]
    fn test_unknown_index_has_no_field() {
        assert_eq!(
            member_conflict_field("E11000 duplicate key error collection: meetings_dev.members index: _id_ dup key: { _id: ObjectId('665f1c2e9d1a4b0012345678') }"),
            None
        );
        assert_eq!(member_conflict_field("E11000 duplicate key error"), None);
    }
}
