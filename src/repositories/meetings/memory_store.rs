//! # 인메모리 모임 저장소
//!
//! 프로세스 메모리에 모임과 회원을 보관하는 [`MeetingStore`] 구현체입니다.
//! `STORE_BACKEND=memory`로 MongoDB 없이 서버를 띄울 때와 테스트에서 사용합니다.
//!
//! MongoDB 구현체와 같은 고유성 규칙을 따르며, 검사와 삽입은 하나의 잠금 구간 안에서
//! 수행되므로 동시 등록에서도 중복이 생기지 않습니다.
//!
//! ## 장애 주입
//!
//! [`FaultInjection`]으로 모임 연결 실패, 보상 삭제 실패, 존재 확인 실패,
//! 인위적인 지연을 켤 수 있습니다.
//!
//! ```rust,ignore
//! let store = InMemoryMeetingStore::new();
//! store.faults().set_fail_link(true);
//! store.faults().set_latency(Duration::from_millis(20));
//! ```

use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::domain::entities::meetings::{Meeting, NewMeeting};
use crate::domain::entities::members::{Member, NewMember};
use crate::repositories::meetings::store::{
    meeting_name_conflict, member_conflict, MeetingStore, StoreError,
};

#[derive(Default)]
struct MemoryState {
    meetings: Vec<Meeting>,
    members: Vec<Member>,
}

/// 테스트용 장애 주입 스위치와 호출 계측
#[derive(Default)]
pub struct FaultInjection {
    fail_link: AtomicBool,
    fail_compensation: AtomicBool,
    fail_existence_check: AtomicBool,
    latency_ms: AtomicU64,
    existence_checks: AtomicUsize,
    add_member_calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl FaultInjection {
    /// 회원 저장 후 모임 연결 단계를 실패시킵니다.
    pub fn set_fail_link(&self, fail: bool) {
        self.fail_link.store(fail, Ordering::SeqCst);
    }

    /// 모임 연결 실패 후 보상 삭제까지 실패시킵니다.
    pub fn set_fail_compensation(&self, fail: bool) {
        self.fail_compensation.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_existence_check(&self, fail: bool) {
        self.fail_existence_check.store(fail, Ordering::SeqCst);
    }

    /// `add_member` 호출마다 주입할 지연
    pub fn set_latency(&self, latency: Duration) {
        self.latency_ms
            .store(latency.as_millis() as u64, Ordering::SeqCst);
    }

    pub fn existence_checks(&self) -> usize {
        self.existence_checks.load(Ordering::SeqCst)
    }

    pub fn add_member_calls(&self) -> usize {
        self.add_member_calls.load(Ordering::SeqCst)
    }

    /// 동시에 진행된 `add_member` 호출 수의 최댓값
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    fn latency(&self) -> Option<Duration> {
        match self.latency_ms.load(Ordering::SeqCst) {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }
}

/// 진행 중인 `add_member` 호출 수를 추적하는 가드
struct InFlight<'a>(&'a FaultInjection);

impl<'a> InFlight<'a> {
    fn enter(faults: &'a FaultInjection) -> Self {
        let current = faults.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        faults.max_in_flight.fetch_max(current, Ordering::SeqCst);
        Self(faults)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

/// 프로세스 메모리 기반 모임 저장소
#[derive(Default)]
pub struct InMemoryMeetingStore {
    state: Mutex<MemoryState>,
    faults: FaultInjection,
}

impl InMemoryMeetingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn faults(&self) -> &FaultInjection {
        &self.faults
    }

    /// ID로 모임을 조회합니다.
    pub fn meeting(&self, meeting_id: &str) -> Option<Meeting> {
        let id = ObjectId::parse_str(meeting_id).ok()?;
        let state = self.state().ok()?;
        state.meetings.iter().find(|m| m.id == Some(id)).cloned()
    }

    /// 모임에 속한 회원 문서 목록
    pub fn members_of(&self, meeting_id: &str) -> Vec<Member> {
        let (Ok(id), Ok(state)) = (ObjectId::parse_str(meeting_id), self.state()) else {
            return Vec::new();
        };
        state
            .members
            .iter()
            .filter(|m| m.meeting_id == id)
            .cloned()
            .collect()
    }

    fn state(&self) -> Result<MutexGuard<'_, MemoryState>, StoreError> {
        self.state
            .lock()
            .map_err(|_| StoreError::Database("in-memory store lock poisoned".to_string()))
    }
}

/// 같은 모임에서 이미 사용 중인 필드를 찾습니다. 검사 순서는 email, phone_number, name입니다.
fn conflicting_field(existing: &[Member], meeting_id: ObjectId, candidate: &NewMember) -> Option<&'static str> {
    let same_meeting = || existing.iter().filter(move |m| m.meeting_id == meeting_id);

    if same_meeting().any(|m| m.email == candidate.email) {
        Some("email")
    } else if same_meeting().any(|m| m.phone_number == candidate.phone_number) {
        Some("phone_number")
    } else if same_meeting().any(|m| m.name == candidate.name) {
        Some("name")
    } else {
        None
    }
}

#[async_trait]
impl MeetingStore for InMemoryMeetingStore {
    async fn check_availability(&self, name: &str) -> Result<bool, StoreError> {
        let state = self.state()?;
        Ok(!state.meetings.iter().any(|m| m.name == name))
    }

    async fn meeting_exists(&self, meeting_id: &str) -> Result<bool, StoreError> {
        self.faults.existence_checks.fetch_add(1, Ordering::SeqCst);

        if self.faults.fail_existence_check.load(Ordering::SeqCst) {
            return Err(StoreError::Database("injected existence check failure".to_string()));
        }

        let Ok(id) = ObjectId::parse_str(meeting_id) else {
            return Ok(false);
        };

        let state = self.state()?;
        Ok(state.meetings.iter().any(|m| m.id == Some(id)))
    }

    async fn create_meeting(&self, meeting: NewMeeting) -> Result<Meeting, StoreError> {
        let mut state = self.state()?;

        if state.meetings.iter().any(|m| m.name == meeting.name) {
            return Err(meeting_name_conflict());
        }

        let meeting = Meeting::from_new(ObjectId::new(), meeting);
        state.meetings.push(meeting.clone());
        Ok(meeting)
    }

    async fn add_member(&self, meeting_id: &str, member: NewMember) -> Result<Member, StoreError> {
        self.faults.add_member_calls.fetch_add(1, Ordering::SeqCst);
        let _in_flight = InFlight::enter(&self.faults);

        // 잠금을 잡기 전에 지연시켜 다른 작업자와 겹치도록 합니다
        if let Some(latency) = self.faults.latency() {
            tokio::time::sleep(latency).await;
        }

        let meeting_oid = ObjectId::parse_str(meeting_id)
            .map_err(|_| StoreError::MeetingNotFound(meeting_id.to_string()))?;

        let mut state = self.state()?;

        if let Some(field) = conflicting_field(&state.members, meeting_oid, &member) {
            return Err(member_conflict(field));
        }

        let member = Member::from_new(ObjectId::new(), meeting_oid, member);
        state.members.push(member.clone());

        let linked = !self.faults.fail_link.load(Ordering::SeqCst)
            && match state.meetings.iter_mut().find(|m| m.id == Some(meeting_oid)) {
                Some(meeting) => {
                    meeting.members.extend(member.summary());
                    true
                }
                None => false,
            };

        if linked {
            return Ok(member);
        }

        let reason = format!("failed to link member into meeting {}", meeting_id);
        if self.faults.fail_compensation.load(Ordering::SeqCst) {
            return Err(StoreError::OrphanedMember {
                member_id: member.id_string().unwrap_or_default(),
                message: reason,
            });
        }

        state.members.retain(|m| m.id != member.id);
        Err(StoreError::LinkFailed(reason))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::DateTime;

    fn new_meeting(name: &str) -> NewMeeting {
        NewMeeting {
            name: name.to_string(),
            description: String::new(),
            date: DateTime::now(),
        }
    }

    fn new_member(name: &str, email: &str, phone: &str) -> NewMember {
        NewMember {
            name: name.to_string(),
            email: email.to_string(),
            phone_number: phone.to_string(),
            membership_date: DateTime::now(),
        }
    }

    #[actix_web::test]
    async fn test_meeting_name_is_unique() {
        let store = InMemoryMeetingStore::new();

        store.create_meeting(new_meeting("Rust")).await.unwrap();

        assert!(!store.check_availability("Rust").await.unwrap());
        assert!(store.check_availability("rust").await.unwrap());
        let err = store.create_meeting(new_meeting("Rust")).await.unwrap_err();
        assert_eq!(err, meeting_name_conflict());
    }

    #[actix_web::test]
    async fn test_malformed_id_is_absent() {
        let store = InMemoryMeetingStore::new();

        assert!(!store.meeting_exists("not-an-object-id").await.unwrap());
        assert!(!store.meeting_exists(&ObjectId::new().to_hex()).await.unwrap());
    }

    #[actix_web::test]
    async fn test_add_member_links_summary() {
        let store = InMemoryMeetingStore::new();
        let meeting = store.create_meeting(new_meeting("Rust")).await.unwrap();
        let meeting_id = meeting.id_string().unwrap();

        let member = store
            .add_member(&meeting_id, new_member("Kim", "kim@x.io", "5551234567"))
            .await
            .unwrap();

        let stored = store.meeting(&meeting_id).unwrap();
        assert_eq!(stored.members, vec![member.summary().unwrap()]);
    }

    #[actix_web::test]
    async fn test_conflicts_are_scoped_to_meeting() {
        let store = InMemoryMeetingStore::new();
        let first = store.create_meeting(new_meeting("A")).await.unwrap().id_string().unwrap();
        let second = store.create_meeting(new_meeting("B")).await.unwrap().id_string().unwrap();

        store
            .add_member(&first, new_member("Kim", "kim@x.io", "5551234567"))
            .await
            .unwrap();

        let err = store
            .add_member(&first, new_member("Lee", "kim@x.io", "5559999999"))
            .await
            .unwrap_err();
        assert_eq!(err, member_conflict("email"));

        let err = store
            .add_member(&first, new_member("Lee", "lee@x.io", "5551234567"))
            .await
            .unwrap_err();
        assert_eq!(err, member_conflict("phone_number"));

        assert!(store
            .add_member(&second, new_member("Kim", "kim@x.io", "5551234567"))
            .await
            .is_ok());
    }

    #[actix_web::test]
    async fn test_link_failure_compensates() {
        let store = InMemoryMeetingStore::new();
        let meeting_id = store.create_meeting(new_meeting("A")).await.unwrap().id_string().unwrap();
        store.faults().set_fail_link(true);

        let err = store
            .add_member(&meeting_id, new_member("Kim", "kim@x.io", "5551234567"))
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::LinkFailed(_)));
        assert!(store.members_of(&meeting_id).is_empty());
    }

    #[actix_web::test]
    async fn test_failed_compensation_reports_orphan() {
        let store = InMemoryMeetingStore::new();
        let meeting_id = store.create_meeting(new_meeting("A")).await.unwrap().id_string().unwrap();
        store.faults().set_fail_link(true);
        store.faults().set_fail_compensation(true);

        let err = store
            .add_member(&meeting_id, new_member("Kim", "kim@x.io", "5551234567"))
            .await
            .unwrap_err();

        let orphans = store.members_of(&meeting_id);
        assert_eq!(orphans.len(), 1);
        assert_eq!(
            err,
            StoreError::OrphanedMember {
                member_id: orphans[0].id_string().unwrap(),
                message: format!("failed to link member into meeting {}", meeting_id),
            }
        );
    }
}
