//! # 애플리케이션 상태
//!
//! 핸들러가 `web::Data<AppState>`로 주입받는 서비스 묶음입니다.
//! 저장소 핸들은 여기서 한 번 만들어져 서비스들에 명시적으로 전달되며,
//! 전역 싱글톤이나 서비스 로케이터를 거치지 않습니다.
//!
//! ```rust,ignore
//! let store: Arc<dyn MeetingStore> = Arc::new(InMemoryMeetingStore::new());
//! let state = web::Data::new(AppState::new(store, StoreBackend::Memory, options));
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .app_data(state.clone())
//!         .configure(configure_all_routes)
//! })
//! ```

use std::sync::Arc;

use crate::config::StoreBackend;
use crate::repositories::meetings::MeetingStore;
use crate::services::enrollment::{EnrollmentOptions, EnrollmentService};
use crate::services::meetings::MeetingService;

pub struct AppState {
    pub meeting_service: MeetingService,
    pub enrollment_service: EnrollmentService,
    pub store_backend: StoreBackend,
}

impl AppState {
    pub fn new(
        store: Arc<dyn MeetingStore>,
        store_backend: StoreBackend,
        options: EnrollmentOptions,
    ) -> Self {
        Self {
            meeting_service: MeetingService::new(Arc::clone(&store)),
            enrollment_service: EnrollmentService::new(store, options),
            store_backend,
        }
    }
}
