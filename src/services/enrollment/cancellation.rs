//! 배치 단위 취소 신호
//!
//! 작업자는 다음 작업을 꺼내기 직전에 신호를 확인합니다.
//! 이미 시작된 저장소 호출은 끝까지 진행되고, 꺼내지 않은 작업은 `cancelled`로 보고됩니다.
//!
//! 신호를 켜는 곳은 두 군데입니다.
//! - [`spawn_deadline`]: 배치 마감 시간이 지나면 취소
//! - [`CancelOnDrop`]: 요청 future가 중간에 drop되면(클라이언트 연결 종료) 취소

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use log::warn;
use tokio::task::JoinHandle;

/// 여러 작업자가 공유하는 취소 신호
#[derive(Debug, Clone, Default)]
pub struct CancellationSignal {
    cancelled: Arc<AtomicBool>,
}

impl CancellationSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// 마감 타이머 태스크의 소유권
///
/// drop되면 타이머 태스크를 중단합니다. 배치가 정상 종료되든 요청 future가 중간에
/// 버려지든 타이머가 남아 있지 않습니다.
pub struct DeadlineTimer {
    handle: JoinHandle<()>,
}

impl Drop for DeadlineTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// 마감 시간이 지나면 신호를 켜는 타이머 태스크를 띄웁니다.
///
/// 반환된 [`DeadlineTimer`]를 배치가 끝날 때까지 들고 있어야 합니다.
pub fn spawn_deadline(signal: CancellationSignal, timeout: Duration) -> DeadlineTimer {
    DeadlineTimer {
        handle: tokio::spawn(async move {
            tokio::time::sleep(timeout).await;
            warn!("⏰ 일괄 등록 마감 시간 초과 ({:?}), 남은 작업을 취소합니다", timeout);
            signal.cancel();
        }),
    }
}

/// drop될 때 신호를 켜는 가드
///
/// 핸들러가 정상적으로 끝나면 [`CancelOnDrop::disarm`]으로 해제합니다.
///
/// ```rust,ignore
/// let signal = CancellationSignal::new();
/// let guard = CancelOnDrop::new(signal.clone());
/// let report = service.enroll_members(&id, members, signal).await?;
/// guard.disarm();
/// ```
pub struct CancelOnDrop {
    signal: Option<CancellationSignal>,
}

impl CancelOnDrop {
    pub fn new(signal: CancellationSignal) -> Self {
        Self {
            signal: Some(signal),
        }
    }

    pub fn disarm(mut self) {
        self.signal = None;
    }
}

impl Drop for CancelOnDrop {
    fn drop(&mut self) {
        if let Some(signal) = self.signal.take() {
            warn!("요청이 중단되어 일괄 등록을 취소합니다");
            signal.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_is_shared_between_clones() {
        let signal = CancellationSignal::new();
        let clone = signal.clone();

        clone.cancel();

        assert!(signal.is_cancelled());
    }

    #[test]
    fn test_guard_cancels_only_when_armed() {
        let signal = CancellationSignal::new();
        CancelOnDrop::new(signal.clone()).disarm();
        assert!(!signal.is_cancelled());

        drop(CancelOnDrop::new(signal.clone()));
        assert!(signal.is_cancelled());
    }

    #[actix_web::test]
    async fn test_deadline_fires() {
        let signal = CancellationSignal::new();
        let _timer = spawn_deadline(signal.clone(), Duration::from_millis(10));

        tokio::time::sleep(Duration::from_millis(60)).await;

        assert!(signal.is_cancelled());
    }

    #[actix_web::test]
    async fn test_dropped_deadline_never_fires() {
        let signal = CancellationSignal::new();
        drop(spawn_deadline(signal.clone(), Duration::from_millis(10)));

        tokio::time::sleep(Duration::from_millis(60)).await;

        assert!(!signal.is_cancelled());
    }
}
