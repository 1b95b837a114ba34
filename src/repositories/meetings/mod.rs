//! 모임/회원 저장소
//!
//! - [`store`] - `MeetingStore` trait과 `StoreError`
//! - [`mongo_store`] - MongoDB 구현체
//! - [`memory_store`] - 인메모리 구현체 (로컬 실행, 테스트)

pub mod memory_store;
pub mod mongo_store;
pub mod store;

pub use memory_store::{FaultInjection, InMemoryMeetingStore};
pub use mongo_store::MongoMeetingStore;
pub use store::{MeetingStore, StoreError};
