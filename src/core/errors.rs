//! # Application Error Handling System
//!
//! 모임/회원 등록 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`로 에러 타입을 정의하고 `actix_web::ResponseError`를 구현하여
//! 핸들러에서 `?` 연산자만으로 일관된 HTTP 응답을 만들 수 있습니다.
//!
//! ## 에러 계층
//!
//! ```text
//! StoreError  (저장소 어댑터)  ─┐
//!                              ├─► AppError ─► HttpResponse {"error": "..."}
//! BatchError  (등록 게이트)    ─┘
//! ```
//!
//! 회원 단위의 실패(검증 실패, 중복, 저장소 오류)는 `AppError`로 올라오지 않습니다.
//! 이들은 각 회원의 등록 결과(`EnrollmentOutcome`)에 기록되고,
//! 배치 전체는 201로 응답됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 요청 본문 검증/파싱 실패 |
//! | `BadRequest` | 400 Bad Request | 모임 생성 중 저장소 실패 |
//! | `MeetingNotFound` | 400 Bad Request | 등록 대상 모임 없음 |
//! | `ConflictError` | 409 Conflict | 모임 이름 중복 |
//! | `DatabaseError` | 500 Internal Server Error | 존재 확인 등 저장소 오류 |

use thiserror::Error;

use crate::repositories::meetings::store::StoreError;
use crate::services::enrollment::BatchError;

/// 애플리케이션 전역 에러 타입
///
/// HTTP 계층까지 전파되는 에러만을 표현합니다.
/// `actix_web::ResponseError` 구현을 통해 자동으로 HTTP 응답으로 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    ///
    /// # 발생 시나리오
    /// - JSON 본문 파싱 실패
    /// - 모임 이름 누락
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 저장소가 요청을 처리하지 못한 경우 (400 Bad Request)
    ///
    /// 모임 생성 흐름에서 이름 가용성 확인이나 삽입이 실패했을 때 사용합니다.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 등록 대상 모임이 존재하지 않음 (400 Bad Request)
    ///
    /// 일괄 등록 API는 잘못된 모임 ID를 클라이언트 입력 오류로 취급합니다.
    #[error("Meeting not found: {0}")]
    MeetingNotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러 응답은 다음 형식을 따릅니다:
    ///
    /// ```json
    /// {
    ///   "error": "Human readable error message"
    /// }
    /// ```
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }

    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_)
            | AppError::BadRequest(_)
            | AppError::MeetingNotFound(_) => StatusCode::BAD_REQUEST,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<BatchError> for AppError {
    fn from(err: BatchError) -> Self {
        match err {
            BatchError::MeetingNotFound(id) => {
                AppError::MeetingNotFound(format!("meeting {} does not exist", id))
            }
            BatchError::ExistenceCheckFailed(source) => AppError::DatabaseError(format!(
                "impossible to check if the meeting exists: {}",
                source
            )),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict { .. } => AppError::ConflictError(err.to_string()),
            other => AppError::DatabaseError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("name is required".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_meeting_not_found_is_bad_request() {
        let error: AppError = BatchError::MeetingNotFound("abc".to_string()).into();

        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
        assert!(error.to_string().contains("abc"));
    }

    #[test]
    fn test_existence_check_failure_is_server_error() {
        let error: AppError =
            BatchError::ExistenceCheckFailed(StoreError::Database("timeout".to_string())).into();

        assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_store_conflict_maps_to_conflict() {
        let error: AppError = StoreError::Conflict {
            field: "name".to_string(),
            message: "meeting name is already used".to_string(),
        }
        .into();

        assert_eq!(error.error_response().status(), StatusCode::CONFLICT);
    }
}
