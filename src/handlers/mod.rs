//! HTTP 요청 핸들러
//!
//! 핸들러는 요청을 DTO로 받아 서비스에 위임하고, 결과를 HTTP 응답으로 바꾸는 일만 합니다.
//! 에러는 `AppError`로 반환하면 `ResponseError` 구현이 `{"error": ...}` 응답을 만듭니다.

pub mod meetings;
