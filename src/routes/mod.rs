//! API 라우트 설정 모듈
//!
//! 모임 관련 엔드포인트와 헬스체크 엔드포인트를 등록합니다.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | `/api/health` | [`health_check`] |
//! | POST | `/api/meetings` | [`handlers::meetings::create_meeting`] |
//! | POST | `/api/meetings/{meeting_id}/members` | [`handlers::meetings::enroll_members`] |
//!
//! JSON 본문 크기 제한과 파싱 에러 매핑([`json_config`])도 여기서 함께 등록되므로
//! 테스트에서도 운영과 같은 설정으로 라우트를 구성할 수 있습니다.

use crate::config::ServerConfig;
use crate::core::errors::AppError;
use crate::core::state::AppState;
use crate::handlers;
use actix_web::web;
use serde_json::json;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config(ServerConfig::max_payload_bytes()));

    // Health check endpoint
    cfg.service(health_check);

    configure_meeting_routes(cfg);
}

fn configure_meeting_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/meetings")
            .service(handlers::meetings::create_meeting)
            .service(handlers::meetings::enroll_members),
    );
}

/// JSON 추출기 설정
///
/// 본문 파싱 실패(문법 오류, 타입 불일치, 크기 초과)를 `AppError::ValidationError`(400)로 바꿉니다.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            log::debug!("JSON 본문 파싱 실패: {}", err);
            AppError::ValidationError(err.to_string()).into()
        })
}

#[actix_web::get("/api/health")]
async fn health_check(state: web::Data<AppState>) -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "meeting_enrollment_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "store": state.store_backend.to_string(),
            "enrollment_workers": state.enrollment_service.options().workers
        }
    }))
}
