//! 모임 생성 요청 DTO
//!
//! `POST /api/meetings` 요청 본문을 표현합니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::meetings::NewMeeting;
use crate::utils::date_utils::to_bson_datetime;

/// 새 모임 생성을 위한 요청 DTO
///
/// # JSON 예제
///
/// ```json
/// {
///   "name": "Rust Seoul Meetup",
///   "description": "월간 정기 모임",
///   "date": "2024-05-01T19:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateMeetingRequest {
    /// 모임 이름 (공백 불가, 전체 모임에서 유일)
    #[validate(
        length(max = 200, message = "모임 이름은 200자 이하여야 합니다"),
        custom(function = "validate_meeting_name")
    )]
    pub name: String,

    /// 모임 설명
    #[serde(default)]
    pub description: String,

    /// 모임 일시 (RFC 3339)
    pub date: DateTime<Utc>,
}

fn validate_meeting_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("blank_name")
            .with_message("모임 이름은 비어 있을 수 없습니다".into()));
    }
    Ok(())
}

impl CreateMeetingRequest {
    /// 저장소에 전달할 입력값으로 변환합니다.
    ///
    /// 이름은 대소문자를 구분하여 그대로 저장하며 앞뒤 공백만 제거합니다.
    pub fn into_new_meeting(self) -> NewMeeting {
        NewMeeting {
            name: self.name.trim().to_string(),
            description: self.description,
            date: to_bson_datetime(self.date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str) -> CreateMeetingRequest {
        CreateMeetingRequest {
            name: name.to_string(),
            description: "desc".to_string(),
            date: Utc::now(),
        }
    }

    #[test]
    fn test_blank_name_is_rejected() {
        assert!(request("   ").validate().is_err());
        assert!(request("").validate().is_err());
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(request("Weekly sync").validate().is_ok());
    }

    #[test]
    fn test_missing_description_defaults_to_empty() {
        let parsed: CreateMeetingRequest =
            serde_json::from_str(r#"{"name":"A","date":"2024-05-01T19:00:00Z"}"#).unwrap();

        assert_eq!(parsed.description, "");
        assert_eq!(parsed.into_new_meeting().name, "A");
    }
}
