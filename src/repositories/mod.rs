//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 모임/회원 저장소는 [`meetings::MeetingStore`] trait 뒤에 숨겨져 있으며,
//! 애플리케이션 상태(`AppState`)가 `Arc<dyn MeetingStore>`로 보관합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::meetings::{InMemoryMeetingStore, MeetingStore};
//!
//! let store: Arc<dyn MeetingStore> = Arc::new(InMemoryMeetingStore::new());
//! let exists = store.meeting_exists("665f1c2e9b1e8a3d4c5b6a79").await?;
//! ```

pub mod meetings;
