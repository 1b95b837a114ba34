//! 회원 일괄 등록 요청 DTO
//!
//! `POST /api/meetings/{id}/members` 요청 본문은 이 타입의 배열입니다.
//! 필드 누락은 JSON 파싱 오류로 배치 전체를 거부하지 않고,
//! 빈 값으로 채워진 뒤 해당 회원의 `invalid_field` 결과로 보고됩니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 등록 후보 회원 한 명
///
/// # JSON 예제
///
/// ```json
/// {
///   "name": "Kim Minsu",
///   "phone_number": "+82 10-1234-5678",
///   "email": "minsu@example.com",
///   "membership_date": "2024-05-01T00:00:00Z"
/// }
/// ```
///
/// `phoneNumber`, `membershipDate` 표기도 허용합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EnrollMemberRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    #[serde(default, alias = "phoneNumber")]
    #[validate(custom(function = "validate_phone_number"))]
    pub phone_number: String,

    #[serde(default)]
    #[validate(email(message = "email address is not valid"))]
    pub email: String,

    /// 생략하면 요청 처리 시각으로 채워집니다.
    #[serde(default = "Utc::now", alias = "membershipDate")]
    pub membership_date: DateTime<Utc>,
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("name must not be empty".into()));
    }
    Ok(())
}

/// 전화번호 형식 검증
///
/// 선택적인 선행 `+` 뒤에 숫자, 공백, `-`, `.`, `(`, `)`만 허용하며
/// 숫자는 7개 이상 15개 이하여야 합니다 (E.164 최대 길이).
fn validate_phone_number(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    let body = trimmed.strip_prefix('+').unwrap_or(trimmed);

    let allowed = body
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '.' | '(' | ')'));
    if !allowed {
        return Err(ValidationError::new("phone_charset")
            .with_message("phone number contains invalid characters".into()));
    }

    let digits = body.chars().filter(|c| c.is_ascii_digit()).count();
    if !(7..=15).contains(&digits) {
        return Err(ValidationError::new("phone_length")
            .with_message("phone number must contain between 7 and 15 digits".into()));
    }

    Ok(())
}
