//! 고정 크기 작업자 풀
//!
//! ```text
//!              ┌──────────────┐
//!   jobs ────► │   JobQueue   │  (채운 뒤 닫힘, FCFS)
//!              └──────┬───────┘
//!        ┌────────────┼────────────┐
//!        ▼            ▼            ▼
//!    worker 0     worker 1 ... worker n-1   ── add_member ──► MeetingStore
//!        │            │            │
//!        └────────────┼────────────┘
//!                     ▼
//!             OutcomeCollector (인덱스별 슬롯)
//! ```
//!
//! 작업자는 분리된 tokio 태스크로 실행되므로 요청 future가 drop되어도
//! 진행 중인 저장소 쓰기가 중간에 끊기지 않습니다.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use futures_util::future::join_all;
use log::{debug, error, warn};

use crate::domain::dto::members::EnrollmentOutcome;
use crate::domain::entities::members::NewMember;
use crate::repositories::meetings::MeetingStore;
use crate::services::enrollment::cancellation::CancellationSignal;
use crate::services::enrollment::outcome_collector::OutcomeCollector;

/// 입력 위치와 저장할 회원
#[derive(Debug, Clone)]
pub struct Job {
    pub index: usize,
    pub member: NewMember,
}

/// 생성 시점에 채워지고 이후로는 꺼내기만 하는 작업 큐
pub struct JobQueue {
    jobs: Mutex<VecDeque<Job>>,
}

impl JobQueue {
    pub fn new(jobs: Vec<Job>) -> Self {
        Self {
            jobs: Mutex::new(jobs.into()),
        }
    }

    /// 다음 작업을 꺼냅니다. 큐가 비었으면 `None`입니다.
    pub fn pop(&self) -> Option<Job> {
        self.jobs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
    }
}

/// 작업자들이 공유하는 배치 컨텍스트
struct BatchContext {
    store: Arc<dyn MeetingStore>,
    meeting_id: String,
    queue: JobQueue,
    collector: Arc<OutcomeCollector>,
    cancel: CancellationSignal,
}

/// 고정 크기 작업자 풀
#[derive(Debug, Clone, Copy)]
pub struct WorkerPool {
    workers: usize,
}

impl WorkerPool {
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    /// 모든 작업을 처리하고 작업자가 전부 끝날 때까지 기다립니다.
    ///
    /// 각 작업의 결과는 `collector`의 해당 인덱스 슬롯에 기록됩니다.
    /// 취소되면 이미 꺼낸 작업까지만 처리하고 반환합니다.
    pub async fn run(
        &self,
        store: Arc<dyn MeetingStore>,
        meeting_id: &str,
        jobs: Vec<Job>,
        collector: Arc<OutcomeCollector>,
        cancel: CancellationSignal,
    ) {
        let worker_count = self.workers.min(jobs.len());
        if worker_count == 0 {
            return;
        }

        let context = Arc::new(BatchContext {
            store,
            meeting_id: meeting_id.to_string(),
            queue: JobQueue::new(jobs),
            collector,
            cancel,
        });

        let handles = (0..worker_count).map(|worker_id| {
            let context = Arc::clone(&context);
            tokio::spawn(async move { worker_loop(worker_id, context).await })
        });

        for (worker_id, result) in join_all(handles).await.into_iter().enumerate() {
            if let Err(e) = result {
                error!("작업자 {} 비정상 종료: {}", worker_id, e);
            }
        }
    }
}

async fn worker_loop(worker_id: usize, context: Arc<BatchContext>) {
    let mut processed = 0usize;

    loop {
        if context.cancel.is_cancelled() {
            debug!("작업자 {} 취소 신호 확인, {}건 처리 후 종료", worker_id, processed);
            break;
        }

        let Some(Job { index, member }) = context.queue.pop() else {
            break;
        };
        context.collector.mark_claimed(index);

        let outcome = match context.store.add_member(&context.meeting_id, member).await {
            Ok(member) => {
                debug!("회원 등록 성공 [{}] {}", index, member.name);
                EnrollmentOutcome::created(index, member)
            }
            Err(e) => {
                warn!("회원 등록 실패 [{}]: {}", index, e);
                EnrollmentOutcome::failed(index, e.into())
            }
        };

        if let Err(e) = context.collector.record(outcome) {
            error!("작업자 {} 결과 기록 거부: {}", worker_id, e);
        }
        processed += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::meetings::NewMeeting;
    use crate::repositories::meetings::InMemoryMeetingStore;
    use mongodb::bson::DateTime;
    use std::time::Duration;

    fn job(index: usize) -> Job {
        Job {
            index,
            member: NewMember {
                name: format!("member-{}", index),
                email: format!("member-{}@example.com", index),
                phone_number: format!("55500{:05}", index),
                membership_date: DateTime::now(),
            },
        }
    }

    async fn store_with_meeting() -> (Arc<InMemoryMeetingStore>, String) {
        let store = Arc::new(InMemoryMeetingStore::new());
        let meeting = store
            .create_meeting(NewMeeting {
                name: "pool".to_string(),
                description: String::new(),
                date: DateTime::now(),
            })
            .await
            .unwrap();
        let id = meeting.id_string().unwrap();
        (store, id)
    }

    #[test]
    fn test_queue_is_fifo() {
        let queue = JobQueue::new(vec![job(0), job(1)]);

        assert_eq!(queue.pop().map(|j| j.index), Some(0));
        assert_eq!(queue.pop().map(|j| j.index), Some(1));
        assert!(queue.pop().is_none());
    }

    #[actix_web::test]
    async fn test_concurrency_is_bounded_by_worker_count() {
        let (store, meeting_id) = store_with_meeting().await;
        store.faults().set_latency(Duration::from_millis(20));
        let collector = Arc::new(OutcomeCollector::new(12));

        WorkerPool::new(3)
            .run(
                store.clone(),
                &meeting_id,
                (0..12).map(job).collect(),
                collector.clone(),
                CancellationSignal::new(),
            )
            .await;

        assert!(store.faults().max_in_flight() <= 3);
        assert_eq!(store.faults().add_member_calls(), 12);
        assert!(collector.finish().iter().all(|o| o.is_created()));
    }

    #[actix_web::test]
    async fn test_cancelled_before_start_attempts_nothing() {
        let (store, meeting_id) = store_with_meeting().await;
        let collector = Arc::new(OutcomeCollector::new(5));
        let cancel = CancellationSignal::new();
        cancel.cancel();

        WorkerPool::new(4)
            .run(store.clone(), &meeting_id, (0..5).map(job).collect(), collector.clone(), cancel)
            .await;

        assert_eq!(store.faults().add_member_calls(), 0);
        assert!(collector.finish().iter().all(|o| o.is_cancelled()));
    }
}
