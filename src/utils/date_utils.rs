//! 날짜 변환 유틸리티
//!
//! API 계층은 `chrono::DateTime<Utc>`(RFC 3339)를, 저장 계층은 BSON `DateTime`을 사용합니다.
//! 두 표현 사이의 변환은 밀리초 정밀도로 수행됩니다.

use chrono::{DateTime, Utc};
use mongodb::bson;

/// `chrono` 시각을 BSON 시각으로 변환합니다.
pub fn to_bson_datetime(value: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(value.timestamp_millis())
}

/// BSON 시각을 `chrono` 시각으로 변환합니다.
///
/// 표현 범위를 벗어난 값은 Unix epoch로 대체됩니다.
pub fn to_chrono_datetime(value: bson::DateTime) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(value.timestamp_millis()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_conversion_keeps_millisecond_precision() {
        let original = Utc.with_ymd_and_hms(2024, 5, 1, 19, 0, 0).unwrap()
            + chrono::Duration::milliseconds(123);

        assert_eq!(to_chrono_datetime(to_bson_datetime(original)), original);
    }
}
