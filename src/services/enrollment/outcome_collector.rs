//! 회원별 결과 수집기
//!
//! 배치 크기만큼의 한 번만 쓸 수 있는 슬롯을 미리 만들어 두고,
//! 작업자는 자신이 꺼낸 작업의 인덱스 슬롯에만 씁니다.
//! 모든 작업자가 끝난 뒤 [`OutcomeCollector::finish`]가 입력 순서대로 결과를 돌려줍니다.

use std::sync::atomic::{AtomicBool, Ordering};

use log::error;
use once_cell::sync::OnceCell;
use thiserror::Error;

use crate::domain::dto::members::{EnrollmentFailure, EnrollmentOutcome};

#[derive(Error, Debug, PartialEq)]
pub enum RecordError {
    #[error("outcome index {index} is out of range for a batch of {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("outcome for index {0} was already recorded")]
    AlreadyRecorded(usize),
}

#[derive(Default)]
struct Slot {
    claimed: AtomicBool,
    outcome: OnceCell<EnrollmentOutcome>,
}

/// 고정 크기 결과 수집기
pub struct OutcomeCollector {
    slots: Vec<Slot>,
}

impl OutcomeCollector {
    pub fn new(len: usize) -> Self {
        Self {
            slots: (0..len).map(|_| Slot::default()).collect(),
        }
    }

    /// 작업자가 작업을 꺼냈음을 표시합니다.
    pub fn mark_claimed(&self, index: usize) {
        if let Some(slot) = self.slots.get(index) {
            slot.claimed.store(true, Ordering::SeqCst);
        }
    }

    /// 결과를 기록합니다. 같은 인덱스에 두 번 기록할 수 없습니다.
    pub fn record(&self, outcome: EnrollmentOutcome) -> Result<(), RecordError> {
        let index = outcome.index;
        let slot = self.slots.get(index).ok_or(RecordError::OutOfRange {
            index,
            len: self.slots.len(),
        })?;

        slot.outcome
            .set(outcome)
            .map_err(|_| RecordError::AlreadyRecorded(index))
    }

    /// 입력 순서대로 결과를 반환합니다.
    ///
    /// 비어 있는 슬롯은 꺼내지지 않았으면 `cancelled`로,
    /// 꺼내졌지만 결과가 없으면(작업자 비정상 종료) `store_error`로 채웁니다.
    pub fn finish(&self) -> Vec<EnrollmentOutcome> {
        self.slots
            .iter()
            .enumerate()
            .map(|(index, slot)| match slot.outcome.get() {
                Some(outcome) => outcome.clone(),
                None if slot.claimed.load(Ordering::SeqCst) => {
                    error!("작업 {}의 결과가 기록되지 않았습니다 (작업자 중단)", index);
                    EnrollmentOutcome::failed(index, EnrollmentFailure::store_error("worker aborted"))
                }
                None => EnrollmentOutcome::cancelled(index),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::members::FailureKind;

    #[test]
    fn test_second_record_is_rejected() {
        let collector = OutcomeCollector::new(2);

        collector.record(EnrollmentOutcome::cancelled(1)).unwrap();
        let err = collector
            .record(EnrollmentOutcome::failed(1, EnrollmentFailure::store_error("late")))
            .unwrap_err();

        assert_eq!(err, RecordError::AlreadyRecorded(1));
        assert!(collector.finish()[1].is_cancelled());
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let collector = OutcomeCollector::new(1);

        assert_eq!(
            collector.record(EnrollmentOutcome::cancelled(3)),
            Err(RecordError::OutOfRange { index: 3, len: 1 })
        );
    }

    #[test]
    fn test_finish_fills_empty_slots() {
        let collector = OutcomeCollector::new(3);
        collector
            .record(EnrollmentOutcome::failed(0, EnrollmentFailure::invalid_field("name", "empty")))
            .unwrap();
        collector.mark_claimed(1);

        let outcomes = collector.finish();

        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0].failure_kind(), Some(FailureKind::InvalidField));
        assert_eq!(outcomes[1].failure_kind(), Some(FailureKind::StoreError));
        assert!(outcomes[2].is_cancelled());
        assert!(outcomes.iter().enumerate().all(|(i, o)| o.index == i));
    }
}
