//! 회원 일괄 등록 및 요청 제한 설정
//!
//! 작업자 풀 크기와 배치 마감 시간, 그리고 `actix-governor` 요청 제한 값을 관리합니다.

use std::env;
use std::time::Duration;

/// 작업자 수 상한
pub const MAX_ENROLLMENT_WORKERS: usize = 64;

/// 일괄 등록 설정
pub struct EnrollmentConfig;

impl EnrollmentConfig {
    /// 배치당 동시 작업자 수 (`ENROLLMENT_WORKERS`, 기본값 4)
    ///
    /// 저장소로 동시에 나가는 요청 수의 상한이기도 합니다.
    /// 1..=64 범위로 보정됩니다.
    pub fn workers() -> usize {
        Self::parse_workers(env::var("ENROLLMENT_WORKERS").ok().as_deref())
    }

    /// 배치 마감 시간 (`ENROLLMENT_BATCH_TIMEOUT_SECS`, 기본값 30초)
    ///
    /// 0이면 마감 시간 없이 배치를 끝까지 처리합니다.
    pub fn batch_timeout() -> Option<Duration> {
        Self::parse_batch_timeout(env::var("ENROLLMENT_BATCH_TIMEOUT_SECS").ok().as_deref())
    }

    pub fn parse_workers(raw: Option<&str>) -> usize {
        raw.and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(4)
            .clamp(1, MAX_ENROLLMENT_WORKERS)
    }

    pub fn parse_batch_timeout(raw: Option<&str>) -> Option<Duration> {
        let secs = raw
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(30);

        (secs > 0).then(|| Duration::from_secs(secs))
    }
}

/// 요청 제한 설정
pub struct RateLimitConfig;

impl RateLimitConfig {
    /// 초당 허용 요청 수 (`RATE_LIMIT_PER_SECOND`, 기본값 100)
    pub fn per_second() -> u64 {
        env::var("RATE_LIMIT_PER_SECOND")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(100)
    }

    /// 버스트 허용량 (`RATE_LIMIT_BURST_SIZE`, 기본값 200)
    pub fn burst_size() -> u32 {
        env::var("RATE_LIMIT_BURST_SIZE")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(200)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workers_are_clamped() {
        assert_eq!(EnrollmentConfig::parse_workers(None), 4);
        assert_eq!(EnrollmentConfig::parse_workers(Some("8")), 8);
        assert_eq!(EnrollmentConfig::parse_workers(Some("0")), 1);
        assert_eq!(EnrollmentConfig::parse_workers(Some("1000")), MAX_ENROLLMENT_WORKERS);
        assert_eq!(EnrollmentConfig::parse_workers(Some("many")), 4);
    }

    #[test]
    fn test_batch_timeout_zero_disables_deadline() {
        assert_eq!(
            EnrollmentConfig::parse_batch_timeout(None),
            Some(Duration::from_secs(30))
        );
        assert_eq!(EnrollmentConfig::parse_batch_timeout(Some("0")), None);
        assert_eq!(
            EnrollmentConfig::parse_batch_timeout(Some("5")),
            Some(Duration::from_secs(5))
        );
    }
}
