//! 모임 및 회원 일괄 등록 HTTP 핸들러

use actix_web::{post, web, HttpResponse};

use crate::core::errors::AppError;
use crate::core::state::AppState;
use crate::domain::dto::meetings::CreateMeetingRequest;
use crate::domain::dto::members::EnrollMemberRequest;
use crate::services::enrollment::{CancelOnDrop, CancellationSignal};

/// 모임 생성
///
/// `POST /api/meetings`
///
/// - 201: 생성된 모임 (ID 포함)
/// - 400: 이름 누락 또는 저장소 오류
/// - 409: 이미 사용 중인 이름
#[post("")]
pub async fn create_meeting(
    state: web::Data<AppState>,
    payload: web::Json<CreateMeetingRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .meeting_service
        .create_meeting(payload.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(response))
}

/// 회원 일괄 등록
///
/// `POST /api/meetings/{meeting_id}/members`
///
/// 회원 단위의 실패가 있어도 201과 함께 회원별 결과 리포트를 반환합니다.
/// 모임이 없으면 400, 존재 확인 자체가 실패하면 500입니다.
///
/// 클라이언트가 응답 전에 연결을 끊으면 이 future가 drop되면서 취소 신호가 켜지고,
/// 작업자들은 진행 중인 쓰기만 마치고 멈춥니다.
#[post("/{meeting_id}/members")]
pub async fn enroll_members(
    state: web::Data<AppState>,
    meeting_id: web::Path<String>,
    payload: web::Json<Vec<EnrollMemberRequest>>,
) -> Result<HttpResponse, AppError> {
    let cancel = CancellationSignal::new();
    let guard = CancelOnDrop::new(cancel.clone());

    let result = state
        .enrollment_service
        .enroll_members(&meeting_id, payload.into_inner(), cancel)
        .await;
    guard.disarm();

    Ok(HttpResponse::Created().json(result?))
}
