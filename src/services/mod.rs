//! # 비즈니스 서비스 계층
//!
//! | 서비스 | 역할 |
//! |--------|------|
//! | [`meetings::MeetingService`] | 모임 생성 (이름 가용성 확인 후 삽입) |
//! | [`enrollment::EnrollmentService`] | 회원 일괄 등록 (존재 확인, 검증, 작업자 풀, 결과 리포트) |
//!
//! 서비스는 `Arc<dyn MeetingStore>`를 생성자로 주입받으며 전역 상태를 사용하지 않습니다.

pub mod enrollment;
pub mod meetings;
