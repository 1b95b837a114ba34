//! 회원 일괄 등록 응답 DTO
//!
//! 배치 리포트는 입력 순서대로 회원마다 정확히 하나의 결과를 담습니다.
//!
//! ```json
//! {
//!   "meeting_id": "665f1c...",
//!   "total": 2, "created": 1, "failed": 1, "cancelled": 0,
//!   "outcomes": [
//!     {"index": 0, "status": "created", "member": {"id": "...", "name": "..."}},
//!     {"index": 1, "status": "failed", "error": {"kind": "conflict", "field": "email", "message": "..."}}
//!   ]
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::members::Member;
use crate::repositories::meetings::store::StoreError;
use crate::utils::date_utils::to_chrono_datetime;

/// 등록에 성공한 회원 정보
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub membership_date: DateTime<Utc>,
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            id: member.id_string().unwrap_or_default(),
            name: member.name,
            email: member.email,
            phone_number: member.phone_number,
            membership_date: to_chrono_datetime(member.membership_date),
        }
    }
}

/// 실패 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// 입력 형식 오류. 저장소에 전달되지 않음
    InvalidField,
    /// 모임 내 이메일/전화번호/이름 중복
    Conflict,
    /// 그 밖의 저장소 오류
    StoreError,
}

/// 회원 한 명의 실패 상세
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentFailure {
    pub kind: FailureKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub message: String,
    /// 모임 연결과 보상 삭제가 모두 실패해 남겨진 회원 문서의 ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_id: Option<String>,
}

impl EnrollmentFailure {
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::InvalidField,
            field: Some(field.into()),
            message: message.into(),
            member_id: None,
        }
    }

    pub fn store_error(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::StoreError,
            field: None,
            message: message.into(),
            member_id: None,
        }
    }
}

impl From<StoreError> for EnrollmentFailure {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict { field, message } => Self {
                kind: FailureKind::Conflict,
                field: Some(field),
                message,
                member_id: None,
            },
            StoreError::OrphanedMember { ref member_id, .. } => Self {
                kind: FailureKind::StoreError,
                field: None,
                member_id: Some(member_id.clone()),
                message: err.to_string(),
            },
            other => Self::store_error(other.to_string()),
        }
    }
}

/// 회원 한 명의 처리 결과
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OutcomeResult {
    Created { member: MemberResponse },
    Failed { error: EnrollmentFailure },
    /// 작업자가 시도하기 전에 배치가 취소됨
    Cancelled,
}

/// 입력 위치와 결과의 쌍
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentOutcome {
    pub index: usize,
    #[serde(flatten)]
    pub result: OutcomeResult,
}

impl EnrollmentOutcome {
    pub fn created(index: usize, member: Member) -> Self {
        Self {
            index,
            result: OutcomeResult::Created {
                member: member.into(),
            },
        }
    }

    pub fn failed(index: usize, error: EnrollmentFailure) -> Self {
        Self {
            index,
            result: OutcomeResult::Failed { error },
        }
    }

    pub fn cancelled(index: usize) -> Self {
        Self {
            index,
            result: OutcomeResult::Cancelled,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self.result, OutcomeResult::Created { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.result, OutcomeResult::Failed { .. })
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self.result, OutcomeResult::Cancelled)
    }

    /// 실패한 경우 실패 분류를 반환합니다.
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match &self.result {
            OutcomeResult::Failed { error } => Some(error.kind),
            _ => None,
        }
    }
}

/// 일괄 등록 결과 리포트
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub meeting_id: String,
    pub total: usize,
    pub created: usize,
    pub failed: usize,
    pub cancelled: usize,
    pub outcomes: Vec<EnrollmentOutcome>,
}

impl BatchReport {
    /// 입력 순서로 정렬된 결과 목록으로 리포트를 만듭니다.
    pub fn new(meeting_id: impl Into<String>, outcomes: Vec<EnrollmentOutcome>) -> Self {
        let created = outcomes.iter().filter(|o| o.is_created()).count();
        let failed = outcomes.iter().filter(|o| o.is_failed()).count();
        let cancelled = outcomes.iter().filter(|o| o.is_cancelled()).count();

        Self {
            meeting_id: meeting_id.into(),
            total: outcomes.len(),
            created,
            failed,
            cancelled,
            outcomes,
        }
    }
}
