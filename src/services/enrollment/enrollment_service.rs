//! # 회원 일괄 등록 서비스
//!
//! 하나의 모임에 회원 목록을 한 번에 등록합니다.
//!
//! ## 처리 흐름
//!
//! ```text
//! enroll_members(meeting_id, candidates, cancel)
//!   │
//!   ├─ 1. 모임 존재 확인 (저장소 1회 왕복)
//!   │      ├─ 없음      → BatchError::MeetingNotFound      (작업자 0개)
//!   │      └─ 확인 실패 → BatchError::ExistenceCheckFailed
//!   │
//!   ├─ 2. 후보별 형식 검증
//!   │      ├─ 실패 → 해당 인덱스에 invalid_field 결과 기록
//!   │      └─ 통과 → 작업 큐에 추가
//!   │
//!   ├─ 3. 작업자 풀 실행 (마감 타이머와 함께)
//!   │
//!   └─ 4. 입력 순서대로 결과를 모아 BatchReport 생성
//! ```
//!
//! 회원 단위의 실패는 배치를 중단시키지 않으며, 리포트에는 항상 입력한 회원 수만큼의 결과가 들어갑니다.

use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, error, info};
use thiserror::Error;

use crate::domain::dto::members::{BatchReport, EnrollMemberRequest, EnrollmentOutcome};
use crate::repositories::meetings::{MeetingStore, StoreError};
use crate::services::enrollment::cancellation::{spawn_deadline, CancellationSignal};
use crate::services::enrollment::member_validator;
use crate::services::enrollment::outcome_collector::OutcomeCollector;
use crate::services::enrollment::worker_pool::{Job, WorkerPool};

/// 배치 전체를 거부하는 에러
#[derive(Error, Debug)]
pub enum BatchError {
    #[error("meeting {0} does not exist")]
    MeetingNotFound(String),

    #[error("impossible to check if the meeting exists: {0}")]
    ExistenceCheckFailed(StoreError),
}

/// 일괄 등록 실행 옵션
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnrollmentOptions {
    /// 동시 작업자 수
    pub workers: usize,
    /// 배치 마감 시간. `None`이면 제한 없음
    pub batch_timeout: Option<Duration>,
}

impl Default for EnrollmentOptions {
    fn default() -> Self {
        Self {
            workers: 4,
            batch_timeout: Some(Duration::from_secs(30)),
        }
    }
}

pub struct EnrollmentService {
    store: Arc<dyn MeetingStore>,
    options: EnrollmentOptions,
}

impl EnrollmentService {
    pub fn new(store: Arc<dyn MeetingStore>, options: EnrollmentOptions) -> Self {
        Self { store, options }
    }

    pub fn options(&self) -> EnrollmentOptions {
        self.options
    }

    /// 모임이 존재하는지 확인합니다.
    pub async fn ensure_meeting_exists(&self, meeting_id: &str) -> Result<(), BatchError> {
        match self.store.meeting_exists(meeting_id).await {
            Ok(true) => Ok(()),
            Ok(false) => {
                error!("❌ 일괄 등록 거부: 모임 {} 없음", meeting_id);
                Err(BatchError::MeetingNotFound(meeting_id.to_string()))
            }
            Err(e) => {
                error!("❌ 모임 {} 존재 확인 실패: {}", meeting_id, e);
                Err(BatchError::ExistenceCheckFailed(e))
            }
        }
    }

    /// 회원 목록을 모임에 등록하고 회원별 결과 리포트를 반환합니다.
    ///
    /// `cancel`이 켜지면 이미 시작한 저장소 호출까지만 마치고
    /// 시도하지 않은 회원은 `cancelled`로 보고합니다.
    ///
    /// # 예제
    ///
    /// ```rust,ignore
    /// let report = service
    ///     .enroll_members(&meeting_id, candidates, CancellationSignal::new())
    ///     .await?;
    ///
    /// for outcome in report.outcomes.iter().filter(|o| o.is_failed()) {
    ///     println!("재시도 대상: {}", outcome.index);
    /// }
    /// ```
    pub async fn enroll_members(
        &self,
        meeting_id: &str,
        candidates: Vec<EnrollMemberRequest>,
        cancel: CancellationSignal,
    ) -> Result<BatchReport, BatchError> {
        let start_time = Instant::now();

        self.ensure_meeting_exists(meeting_id).await?;

        let total = candidates.len();
        info!("📥 일괄 등록 시작: 모임 {}, 회원 {}명", meeting_id, total);

        let collector = Arc::new(OutcomeCollector::new(total));
        let mut jobs = Vec::with_capacity(total);

        for (index, candidate) in candidates.into_iter().enumerate() {
            match member_validator::validate(&candidate) {
                Ok(()) => jobs.push(Job {
                    index,
                    member: member_validator::to_new_member(candidate),
                }),
                Err(invalid) => {
                    debug!("회원 [{}] 형식 오류: {}", index, invalid);
                    if let Err(e) = collector.record(EnrollmentOutcome::failed(index, invalid.into())) {
                        error!("검증 결과 기록 거부: {}", e);
                    }
                }
            }
        }

        let _deadline = (!jobs.is_empty())
            .then_some(self.options.batch_timeout)
            .flatten()
            .map(|timeout| spawn_deadline(cancel.clone(), timeout));

        WorkerPool::new(self.options.workers)
            .run(
                Arc::clone(&self.store),
                meeting_id,
                jobs,
                Arc::clone(&collector),
                cancel,
            )
            .await;

        let report = BatchReport::new(meeting_id, collector.finish());

        info!(
            "✅ 일괄 등록 완료: 모임 {}, 전체 {} / 성공 {} / 실패 {} / 취소 {} ({:?})",
            meeting_id,
            report.total,
            report.created,
            report.failed,
            report.cancelled,
            start_time.elapsed()
        );

        Ok(report)
    }
}
