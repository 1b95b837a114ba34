//! 등록 후보 회원 검증
//!
//! 순수 함수이며 저장소에 접근하지 않습니다.
//! 형식 규칙 자체는 [`EnrollMemberRequest`]의 `validator` derive에 선언되어 있고,
//! 여기서는 실패한 필드 중 첫 번째(name, email, phone_number 순)를 골라냅니다.

use thiserror::Error;
use validator::Validate;

use crate::domain::dto::members::{EnrollMemberRequest, EnrollmentFailure};
use crate::domain::entities::members::NewMember;
use crate::utils::date_utils::to_bson_datetime;

/// 보고 우선순위 순서의 검증 대상 필드
const FIELD_ORDER: [&str; 3] = ["name", "email", "phone_number"];

/// 형식 검증에 실패한 필드
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{field}: {message}")]
pub struct InvalidField {
    pub field: &'static str,
    pub message: String,
}

impl From<InvalidField> for EnrollmentFailure {
    fn from(invalid: InvalidField) -> Self {
        EnrollmentFailure::invalid_field(invalid.field, invalid.message)
    }
}

/// 후보 회원의 형식을 검증합니다.
pub fn validate(candidate: &EnrollMemberRequest) -> Result<(), InvalidField> {
    let Err(errors) = candidate.validate() else {
        return Ok(());
    };

    let field_errors = errors.field_errors();
    for field in FIELD_ORDER {
        if let Some(error) = field_errors.get(field).and_then(|errs| errs.first()) {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{} is not valid", field));
            return Err(InvalidField { field, message });
        }
    }

    Err(InvalidField {
        field: "member",
        message: errors.to_string(),
    })
}

/// 검증을 통과한 후보를 저장할 회원으로 변환합니다.
///
/// 중복 판정은 저장된 값 그대로 비교하므로 여기서 정규형으로 맞춥니다.
/// - name: 앞뒤 공백 제거
/// - email: 앞뒤 공백 제거 후 소문자
/// - phone_number: 앞의 `+`와 숫자만 남김 (`"+82 10-1234-5678"` → `"+821012345678"`)
pub fn to_new_member(candidate: EnrollMemberRequest) -> NewMember {
    NewMember {
        name: candidate.name.trim().to_string(),
        phone_number: normalize_phone_number(&candidate.phone_number),
        email: candidate.email.trim().to_lowercase(),
        membership_date: to_bson_datetime(candidate.membership_date),
    }
}

fn normalize_phone_number(value: &str) -> String {
    let value = value.trim();
    let prefix = if value.starts_with('+') { "+" } else { "" };
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    format!("{}{}", prefix, digits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn candidate(name: &str, email: &str, phone: &str) -> EnrollMemberRequest {
        EnrollMemberRequest {
            name: name.to_string(),
            email: email.to_string(),
            phone_number: phone.to_string(),
            membership_date: Utc::now(),
        }
    }

    #[test]
    fn test_valid_candidate() {
        assert_eq!(validate(&candidate("Kim", "kim@example.com", "+82 10 1234 5678")), Ok(()));
    }

    #[test]
    fn test_first_failing_field_is_reported() {
        let err = validate(&candidate(" ", "not-an-email", "12")).unwrap_err();
        assert_eq!(err.field, "name");

        let err = validate(&candidate("Kim", "not-an-email", "12")).unwrap_err();
        assert_eq!(err.field, "email");

        let err = validate(&candidate("Kim", "kim@example.com", "12")).unwrap_err();
        assert_eq!(err.field, "phone_number");
        assert_eq!(err.message, "phone number must contain between 7 and 15 digits");
    }

    #[test]
    fn test_to_new_member_trims() {
        let member = to_new_member(candidate("  Kim ", " kim@example.com", "5551234567 "));

        assert_eq!(member.name, "Kim");
        assert_eq!(member.email, "kim@example.com");
        assert_eq!(member.phone_number, "5551234567");
    }

    #[test]
    fn test_to_new_member_normalizes_contact_fields() {
        let member = to_new_member(candidate("Kim", " Kim@Example.COM ", " +82 10-1234-5678"));
        assert_eq!(member.email, "kim@example.com");
        assert_eq!(member.phone_number, "+821012345678");

        let member = to_new_member(candidate("Lee", "lee@example.com", "(555) 123.4567"));
        assert_eq!(member.phone_number, "5551234567");
    }
}
