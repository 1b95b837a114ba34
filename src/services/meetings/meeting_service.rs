//! # 모임 관리 서비스
//!
//! 모임 생성을 담당합니다. 동시성 없이 가용성 확인 1회와 삽입 1회로 이루어지며,
//! 확인과 삽입 사이의 경합은 저장소의 유니크 인덱스가 `Conflict`로 돌려줍니다.

use std::sync::Arc;
use std::time::Instant;

use log::{info, warn};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::meetings::{CreateMeetingRequest, MeetingResponse};
use crate::repositories::meetings::{MeetingStore, StoreError};

pub struct MeetingService {
    store: Arc<dyn MeetingStore>,
}

impl MeetingService {
    pub fn new(store: Arc<dyn MeetingStore>) -> Self {
        Self { store }
    }

    /// 새 모임을 생성합니다.
    ///
    /// # 에러
    ///
    /// * `AppError::ValidationError` - 이름이 비어 있는 경우
    /// * `AppError::ConflictError` - 이름이 이미 사용 중인 경우
    /// * `AppError::BadRequest` - 저장소가 확인이나 삽입에 실패한 경우
    pub async fn create_meeting(&self, request: CreateMeetingRequest) -> Result<MeetingResponse, AppError> {
        let start_time = Instant::now();

        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let new_meeting = request.into_new_meeting();

        let available = self
            .store
            .check_availability(&new_meeting.name)
            .await
            .map_err(|e| AppError::BadRequest(format!("impossible to check meeting name: {}", e)))?;

        if !available {
            warn!("모임 이름 중복: {}", new_meeting.name);
            return Err(AppError::ConflictError(format!(
                "meeting name {} is already used",
                new_meeting.name
            )));
        }

        let meeting = self
            .store
            .create_meeting(new_meeting)
            .await
            .map_err(|e| match e {
                StoreError::Conflict { .. } => AppError::from(e),
                other => AppError::BadRequest(format!("impossible to create meeting: {}", other)),
            })?;

        info!(
            "✅ 모임 생성: {} ({}) in {:?}",
            meeting.name,
            meeting.id_string().unwrap_or_default(),
            start_time.elapsed()
        );

        Ok(MeetingResponse::from(meeting))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::meetings::InMemoryMeetingStore;
    use chrono::Utc;

    fn request(name: &str) -> CreateMeetingRequest {
        CreateMeetingRequest {
            name: name.to_string(),
            description: "monthly".to_string(),
            date: Utc::now(),
        }
    }

    #[actix_web::test]
    async fn test_create_meeting_assigns_id() {
        let service = MeetingService::new(Arc::new(InMemoryMeetingStore::new()));

        let response = service.create_meeting(request("Rust Meetup")).await.unwrap();

        assert_eq!(response.id.len(), 24);
        assert_eq!(response.name, "Rust Meetup");
        assert!(response.members.is_empty());
    }

    #[actix_web::test]
    async fn test_duplicate_name_is_conflict() {
        let service = MeetingService::new(Arc::new(InMemoryMeetingStore::new()));
        service.create_meeting(request("Rust Meetup")).await.unwrap();

        let err = service.create_meeting(request("Rust Meetup")).await.unwrap_err();

        assert!(matches!(err, AppError::ConflictError(_)));
    }

    #[actix_web::test]
    async fn test_blank_name_is_validation_error() {
        let service = MeetingService::new(Arc::new(InMemoryMeetingStore::new()));

        let err = service.create_meeting(request("  ")).await.unwrap_err();

        assert!(matches!(err, AppError::ValidationError(_)));
    }
}
