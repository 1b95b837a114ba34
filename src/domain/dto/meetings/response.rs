use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::meetings::{Meeting, MemberSummary};
use crate::utils::date_utils::to_chrono_datetime;

/// 모임 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub members: Vec<MemberSummaryResponse>,
}

/// 모임에 포함된 회원 요약 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberSummaryResponse {
    pub id: String,
    pub name: String,
}

impl From<MemberSummary> for MemberSummaryResponse {
    fn from(summary: MemberSummary) -> Self {
        Self {
            id: summary.id.to_hex(),
            name: summary.name,
        }
    }
}

impl From<Meeting> for MeetingResponse {
    fn from(meeting: Meeting) -> Self {
        let Meeting {
            id,
            name,
            description,
            date,
            members,
        } = meeting;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            description,
            date: to_chrono_datetime(date),
            members: members.into_iter().map(MemberSummaryResponse::from).collect(),
        }
    }
}
